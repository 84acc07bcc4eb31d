use super::EntitySource;
use crate::error::{DexError, Result};
use crate::model::{EntityDetail, EntitySummary};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory source serving canned listings and details.
pub struct MemorySource {
    listing: std::result::Result<Vec<EntitySummary>, u16>,
    details: HashMap<String, EntityDetail>,
    detail_requests: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new(listing: Vec<EntitySummary>) -> Self {
        Self {
            listing: Ok(listing),
            details: HashMap::new(),
            detail_requests: Mutex::new(Vec::new()),
        }
    }

    /// A source whose listing always answers with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            listing: Err(status),
            details: HashMap::new(),
            detail_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_detail(mut self, id: impl Into<String>, detail: EntityDetail) -> Self {
        self.details.insert(id.into(), detail);
        self
    }

    /// Identifiers passed to `fetch_detail`, in call order.
    pub async fn detail_requests(&self) -> Vec<String> {
        self.detail_requests.lock().await.clone()
    }
}

#[async_trait]
impl EntitySource for MemorySource {
    async fn fetch_listing(&self) -> Result<Vec<EntitySummary>> {
        match &self.listing {
            Ok(entries) => Ok(entries.clone()),
            Err(status) => Err(DexError::Status {
                url: "memory://listing".to_string(),
                status: *status,
            }),
        }
    }

    async fn fetch_detail(&self, id: &str) -> Result<EntityDetail> {
        self.detail_requests.lock().await.push(id.to_string());
        self.details.get(id).cloned().ok_or_else(|| DexError::Status {
            url: format!("memory://detail/{}", id),
            status: 404,
        })
    }
}
