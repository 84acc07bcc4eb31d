//! The in-memory catalog of entity summaries.
//!
//! A [`Catalog`] holds the unfiltered result of the last successful listing
//! load. It is replaced wholesale by a load and is otherwise read-only:
//! filtering derives a new sequence and never touches the catalog itself.

use crate::model::EntitySummary;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<EntitySummary>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole catalog with freshly fetched summaries.
    pub fn replace(&mut self, entries: Vec<EntitySummary>) {
        self.entries = entries;
    }

    pub fn entries(&self) -> &[EntitySummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the summaries whose name contains `query`, ignoring case,
    /// in catalog order. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<EntitySummary> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|summary| summary.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}
