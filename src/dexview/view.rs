//! # Screen State
//!
//! The controller never draws anything. It mutates a [`Screen`], a plain data
//! model of what a UI should currently show:
//!
//! - a loading indicator and an error indicator for the catalog load
//! - the list view, as a sequence of [`Card`]s
//! - the detail panel, as a [`DetailPanel`]
//! - transient [`Message`]s (warnings, notices) for the client to surface
//!
//! Any client (the CLI here, but equally a web or TUI front end) renders a
//! `Screen` however it likes.

use crate::error::Result;
use crate::model::{sprite_url, EntityDetail, EntitySummary};

/// One selectable entry of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub sprite_url: String,
}

impl Card {
    pub fn from_summary(summary: &EntitySummary, sprite_base: &str) -> Result<Self> {
        let id = summary.id()?;
        Ok(Self {
            id: id.to_string(),
            name: summary.name.to_uppercase(),
            sprite_url: sprite_url(sprite_base, id),
        })
    }

    /// `#<id> <NAME>`, the caption shown under the sprite.
    pub fn label(&self) -> String {
        format!("#{} {}", self.id, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailPanel {
    #[default]
    Empty,
    Loading {
        id: String,
    },
    Loaded(EntityDetail),
    Failed {
        id: String,
        message: String,
    },
}

impl DetailPanel {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailPanel::Loading { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Screen {
    /// Catalog load in flight.
    pub loading: bool,
    /// Visible error indicator and its diagnostic.
    pub error: Option<String>,
    pub cards: Vec<Card>,
    pub detail: DetailPanel,
    /// Current search query as last passed to filter.
    pub query: String,
    /// Notices from the latest render. Each render replaces them.
    messages: Vec<Message>,
}

impl Screen {
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Hands pending messages to the caller, leaving none behind.
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn labels(&self) -> Vec<String> {
        self.cards.iter().map(Card::label).collect()
    }
}
