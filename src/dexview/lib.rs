//! # Dexview Architecture
//!
//! Dexview browses a paginated entity catalog served by a REST API (the PokeAPI
//! `pokemon` resource by default). It is a **UI-agnostic catalog library** with
//! a terminal client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the Screen, runs browse shell  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (controller.rs)                                 │
//! │  - Owns the Catalog and the Screen                          │
//! │  - load / render / filter / detail, detail sequencing       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - EntitySource trait                                       │
//! │  - HttpSource (production), MemorySource (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the controller inward, code returns Rust types and mutates a
//! [`view::Screen`]. It never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; installing a subscriber is the
//! client's job.
//!
//! ## Module Overview
//!
//! - [`controller`]: the catalog controller
//! - [`catalog`]: the unfiltered catalog and its filter projection
//! - [`view`]: screen state (indicators, cards, detail panel, messages)
//! - [`model`]: entity types, wire payloads, identifier and sprite derivation
//! - [`source`]: entity source abstraction and implementations
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod source;
pub mod view;
