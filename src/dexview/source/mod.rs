//! # Entity Sources
//!
//! The controller reads entities through the [`EntitySource`] trait, so the
//! catalog logic never depends on a particular transport.
//!
//! ## Implementations
//!
//! - [`http::HttpSource`]: production source talking to the REST API
//!   - Listing: `GET <base>?limit=<n>`
//!   - Detail: `GET <base>/<id>`
//!   - Any non-2xx status is an error; bodies are decoded with serde
//!
//! - [`memory::MemorySource`]: canned data for tests
//!   - No network
//!   - Records which detail ids were requested
//!
//! Sources are shared with background detail-load tasks, so they must be
//! `Send + Sync` and are held behind an `Arc`.

use crate::error::Result;
use crate::model::{EntityDetail, EntitySummary};
use async_trait::async_trait;
use std::sync::Arc;

pub mod http;
pub mod memory;

#[async_trait]
pub trait EntitySource: Send + Sync {
    /// Fetch the listing page (bounded by the source's configured limit).
    async fn fetch_listing(&self) -> Result<Vec<EntitySummary>>;

    /// Fetch the full record for one identifier.
    async fn fetch_detail(&self, id: &str) -> Result<EntityDetail>;
}

#[async_trait]
impl<T: EntitySource + ?Sized> EntitySource for Arc<T> {
    async fn fetch_listing(&self) -> Result<Vec<EntitySummary>> {
        (**self).fetch_listing().await
    }

    async fn fetch_detail(&self, id: &str) -> Result<EntityDetail> {
        (**self).fetch_detail(id).await
    }
}
