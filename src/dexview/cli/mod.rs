//! # CLI Behavior
//!
//! This is one client for the dexview library. It is the only place that knows
//! about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`dexview`)
//!
//! Running `dexview` with no subcommand starts `dexview browse`: the catalog
//! loads once, then each line typed is either a search query, a card number to
//! select, or a `:` command. See [`shell`] for the key summary.
//!
//! ## One-shot Commands
//!
//! - `dexview list [--search TEXT]` prints the card list and exits
//! - `dexview search TEXT` is `list --search TEXT`
//! - `dexview show ID` fetches one entity and prints its detail panel
//! - `dexview config [KEY] [VALUE]` reads or writes `config.json`
//!
//! A failed catalog or detail load prints the error indicator and exits 1.
//!
//! ## Output
//!
//! Cards, details, status lines and messages go through minijinja templates
//! (`templates/*.tmp`) styled by the theme in `styles.rs`. Color is detected
//! from stdout unless `--no-color` is given. Status and errors go to stderr so
//! `dexview list | grep` only sees cards.

mod commands;
mod render;
pub mod setup;
mod shell;
mod styles;
mod templates;
mod theme;

pub use commands::run;
