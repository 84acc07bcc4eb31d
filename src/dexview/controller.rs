//! # Catalog Controller
//!
//! The controller owns the [`Catalog`] and the [`Screen`] and drives the three
//! catalog operations:
//!
//! - **load**: fetch the listing, replace the catalog, render it
//! - **filter**: derive a case-insensitive substring projection and render it
//! - **detail**: fetch one entity and show it in the detail panel
//!
//! ## Two-phase operations
//!
//! Loads are split into `begin_*` and `finish_*` halves around the network
//! await. The `begin` half puts the screen into its loading state, so a client
//! can draw it while the request is in flight; the `finish` half applies the
//! response. [`CatalogController::load_catalog`] and
//! [`CatalogController::load_detail`] chain both halves for callers that just
//! want to await the result.
//!
//! ## Detail sequencing
//!
//! Detail loads are never cancelled. Every `begin_detail` issues a
//! [`DetailTicket`] with a strictly increasing sequence number, and
//! `finish_detail` only applies a response whose ticket is the latest one
//! issued. A slow response for an earlier selection is discarded instead of
//! overwriting a newer one.
//!
//! State is mutated from a single task only. Background fetches started with
//! [`CatalogController::spawn_detail`] report back over a channel and the
//! owning task applies them.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::{EntityDetail, EntitySummary};
use crate::source::EntitySource;
use crate::view::{Card, DetailPanel, Message, Screen};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// Identifies one detail load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub seq: u64,
    pub id: String,
}

/// A finished background detail fetch, as sent by [`CatalogController::spawn_detail`].
pub type DetailReply = (DetailTicket, Result<EntityDetail>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    Applied,
    /// A newer load was issued after this one; the response was dropped.
    Stale,
}

pub struct CatalogController<S: EntitySource> {
    source: Arc<S>,
    sprite_base: String,
    catalog: Catalog,
    screen: Screen,
    detail_seq: u64,
}

impl<S: EntitySource> CatalogController<S> {
    pub fn new(source: Arc<S>, sprite_base: impl Into<String>) -> Self {
        Self {
            source,
            sprite_base: sprite_base.into(),
            catalog: Catalog::new(),
            screen: Screen::default(),
            detail_seq: 0,
        }
    }

    pub fn source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Fetches the listing and renders it. Failures are also reflected on the
    /// screen's error indicator.
    pub async fn load_catalog(&mut self) -> Result<usize> {
        self.begin_catalog_load();
        let result = self.source.fetch_listing().await;
        self.finish_catalog_load(result)
    }

    pub fn begin_catalog_load(&mut self) {
        self.screen.loading = true;
        self.screen.error = None;
        self.screen.cards.clear();
    }

    pub fn finish_catalog_load(&mut self, result: Result<Vec<EntitySummary>>) -> Result<usize> {
        self.screen.loading = false;
        match result {
            Ok(entries) => {
                let count = entries.len();
                self.catalog.replace(entries);
                let visible = self.catalog.filter(&self.screen.query);
                self.render(&visible);
                info!(count, "catalog loaded");
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, "catalog load failed");
                self.screen.error = Some(format!("Failed to load catalog: {}", err));
                Err(err)
            }
        }
    }

    /// Replaces the list view with one card per summary, in order. Warnings
    /// for skipped summaries replace those of the previous render.
    pub fn render(&mut self, summaries: &[EntitySummary]) {
        self.screen.cards.clear();
        self.screen.clear_messages();
        for summary in summaries {
            match Card::from_summary(summary, &self.sprite_base) {
                Ok(card) => self.screen.cards.push(card),
                Err(err) => {
                    warn!(name = %summary.name, error = %err, "summary skipped");
                    self.screen
                        .push_message(Message::warning(format!("Skipped {}: {}", summary.name, err)));
                }
            }
        }
    }

    /// Renders the catalog entries whose name contains `query`, ignoring case.
    pub fn filter(&mut self, query: &str) {
        self.screen.query = query.to_string();
        let visible = self.catalog.filter(query);
        debug!(query, matches = visible.len(), "filter applied");
        self.render(&visible);
    }

    pub async fn load_detail(&mut self, id: &str) -> DetailOutcome {
        let ticket = self.begin_detail(id);
        let result = self.source.fetch_detail(&ticket.id).await;
        self.finish_detail(ticket, result)
    }

    pub fn begin_detail(&mut self, id: &str) -> DetailTicket {
        self.detail_seq += 1;
        self.screen.detail = DetailPanel::Loading { id: id.to_string() };
        debug!(id, seq = self.detail_seq, "detail load issued");
        DetailTicket {
            seq: self.detail_seq,
            id: id.to_string(),
        }
    }

    pub fn finish_detail(
        &mut self,
        ticket: DetailTicket,
        result: Result<EntityDetail>,
    ) -> DetailOutcome {
        if ticket.seq != self.detail_seq {
            debug!(
                id = %ticket.id,
                seq = ticket.seq,
                latest = self.detail_seq,
                "stale detail response dropped"
            );
            return DetailOutcome::Stale;
        }

        self.screen.detail = match result {
            Ok(detail) => DetailPanel::Loaded(detail),
            Err(err) => {
                warn!(id = %ticket.id, error = %err, "detail load failed");
                DetailPanel::Failed {
                    message: format!("Failed to load #{}: {}", ticket.id, err),
                    id: ticket.id,
                }
            }
        };
        DetailOutcome::Applied
    }
}

impl<S: EntitySource + 'static> CatalogController<S> {
    /// Starts a detail load in the background. The reply arrives on `replies`
    /// and must be handed to [`CatalogController::finish_detail`].
    pub fn spawn_detail(&mut self, id: &str, replies: UnboundedSender<DetailReply>) -> DetailTicket {
        let ticket = self.begin_detail(id);
        let source = Arc::clone(&self.source);
        let task_ticket = ticket.clone();
        tokio::spawn(async move {
            let result = source.fetch_detail(&task_ticket.id).await;
            // Receiver gone means the client exited.
            let _ = replies.send((task_ticket, result));
        });
        ticket
    }
}
