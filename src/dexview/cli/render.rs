//! # Rendering Module
//!
//! Turns [`Screen`] pieces into terminal text through the templates in
//! `templates.rs` and the theme in `styles.rs`.
//!
//! Layout calculations (label column width, truncation) stay in Rust because
//! they need Unicode-aware widths. Templates handle style selection and line
//! arrangement.
//!
//! Every function takes `use_color: Option<bool>`: `None` auto-detects from
//! stdout, `Some(_)` forces it (`--no-color`, tests).

use super::styles::{names, DEX_THEME};
use super::templates::{
    CARDS_TEMPLATE, CONFIG_TEMPLATE, DETAIL_TEMPLATE, MESSAGES_TEMPLATE, STATUS_TEMPLATE,
};
use super::theme::render_with_color;
use dexview::view::{Card, DetailPanel, Message, MessageLevel, Screen};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Labels longer than this are truncated with an ellipsis.
pub const MAX_LABEL_WIDTH: usize = 40;

#[derive(Serialize)]
struct CardLine {
    label: String,
    padding: String,
    sprite: String,
}

#[derive(Serialize)]
struct CardsData {
    header: Option<String>,
    cards: Vec<CardLine>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize, Default)]
struct DetailData {
    state: &'static str,
    name: String,
    sprite: String,
    height: String,
    weight: String,
    types: String,
    message: String,
}

#[derive(Serialize)]
struct StatusData {
    loading: bool,
    error: Option<String>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

/// Renders the list view. `query` is the active search, empty for none.
pub fn render_cards(cards: &[Card], query: &str, use_color: Option<bool>) -> String {
    let labels: Vec<String> = cards
        .iter()
        .map(|card| truncate_to_width(&card.label(), MAX_LABEL_WIDTH))
        .collect();
    let column = labels.iter().map(|label| label.width()).max().unwrap_or(0);

    let lines = cards
        .iter()
        .zip(labels)
        .map(|(card, label)| CardLine {
            padding: " ".repeat(column.saturating_sub(label.width())),
            label,
            sprite: card.sprite_url.clone(),
        })
        .collect();

    let (header, empty_message) = if query.is_empty() {
        (None, "No entries.".to_string())
    } else {
        (
            Some(format!("Matches for \"{}\": {}", query, cards.len())),
            format!("No matches for \"{}\".", query),
        )
    };

    let data = CardsData {
        header,
        cards: lines,
        empty: cards.is_empty(),
        empty_message,
    };

    render_with_color(CARDS_TEMPLATE, &data, &DEX_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the detail panel. An empty panel renders as an empty string.
pub fn render_detail(panel: &DetailPanel, use_color: Option<bool>) -> String {
    let data = match panel {
        DetailPanel::Empty => DetailData {
            state: "empty",
            ..Default::default()
        },
        DetailPanel::Loading { id } => DetailData {
            state: "loading",
            message: format!("Fetching #{}...", id),
            ..Default::default()
        },
        DetailPanel::Loaded(detail) => DetailData {
            state: "loaded",
            name: detail.name.to_uppercase(),
            sprite: detail.sprite_url.clone(),
            height: detail.height_meters(),
            weight: detail.weight_kilograms(),
            types: detail.type_list(),
            ..Default::default()
        },
        DetailPanel::Failed { message, .. } => DetailData {
            state: "failed",
            message: message.clone(),
            ..Default::default()
        },
    };

    render_with_color(DETAIL_TEMPLATE, &data, &DEX_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the loading and error indicators.
pub fn render_status(screen: &Screen, use_color: Option<bool>) -> String {
    let data = StatusData {
        loading: screen.loading,
        error: screen.error.clone(),
    };

    render_with_color(STATUS_TEMPLATE, &data, &DEX_THEME, use_color).unwrap_or_else(|_| {
        screen
            .error
            .as_ref()
            .map(|e| format!("{}\n", e))
            .unwrap_or_default()
    })
}

pub fn render_messages(messages: &[Message], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                }
                .to_string(),
            })
            .collect(),
    };

    render_with_color(MESSAGES_TEMPLATE, &data, &DEX_THEME, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_config(entries: &[(&str, String)], use_color: Option<bool>) -> String {
    let data = ConfigData {
        entries: entries
            .iter()
            .map(|(key, value)| ConfigEntry {
                key: key.to_string(),
                value: value.clone(),
            })
            .collect(),
    };

    render_with_color(CONFIG_TEMPLATE, &data, &DEX_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexview::model::EntityDetail;

    fn card(id: &str, name: &str) -> Card {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            sprite_url: format!("https://sprites.example/{}.png", id),
        }
    }

    #[test]
    fn test_render_cards_in_order() {
        let cards = vec![card("1", "BULBASAUR"), card("2", "IVYSAUR")];
        let output = render_cards(&cards, "", Some(false));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("#1 BULBASAUR"));
        assert!(lines[0].contains("https://sprites.example/1.png"));
        assert!(lines[1].contains("#2 IVYSAUR"));
    }

    #[test]
    fn test_render_cards_aligns_sprite_column() {
        let cards = vec![card("1", "BULBASAUR"), card("150", "MEWTWO")];
        let output = render_cards(&cards, "", Some(false));
        let columns: Vec<usize> = output
            .lines()
            .map(|line| line.find("https://").unwrap())
            .collect();
        assert_eq!(columns[0], columns[1]);
    }

    #[test]
    fn test_render_cards_empty() {
        let output = render_cards(&[], "", Some(false));
        assert_eq!(output.trim(), "No entries.");
    }

    #[test]
    fn test_render_cards_with_query_header() {
        let output = render_cards(&[card("2", "IVYSAUR")], "ivy", Some(false));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Matches for \"ivy\": 1");
        assert!(lines[1].contains("#2 IVYSAUR"));
    }

    #[test]
    fn test_render_cards_no_matches() {
        let output = render_cards(&[], "zzz", Some(false));
        assert!(output.contains("No matches for \"zzz\"."));
    }

    #[test]
    fn test_render_detail_loaded() {
        let panel = DetailPanel::Loaded(EntityDetail {
            name: "bulbasaur".into(),
            height: 7.0,
            weight: 69.0,
            types: vec!["grass".into(), "poison".into()],
            sprite_url: "https://img.example/1.png".into(),
        });
        let output = render_detail(&panel, Some(false));

        assert!(output.starts_with("BULBASAUR\n"));
        assert!(output.contains("Sprite: https://img.example/1.png"));
        assert!(output.contains("Height: 0.7 m"));
        assert!(output.contains("Weight: 6.9 kg"));
        assert!(output.contains("Types:  grass,poison"));
    }

    #[test]
    fn test_render_detail_loading_and_failed() {
        let loading = render_detail(&DetailPanel::Loading { id: "4".into() }, Some(false));
        assert_eq!(loading.trim(), "Fetching #4...");

        let failed = render_detail(
            &DetailPanel::Failed {
                id: "4".into(),
                message: "Failed to load #4: HTTP status 404".into(),
            },
            Some(false),
        );
        assert_eq!(failed.trim(), "Failed to load #4: HTTP status 404");
    }

    #[test]
    fn test_render_detail_empty() {
        assert!(render_detail(&DetailPanel::Empty, Some(false)).is_empty());
    }

    #[test]
    fn test_render_status() {
        let mut screen = Screen::default();
        assert!(render_status(&screen, Some(false)).is_empty());

        screen.loading = true;
        assert_eq!(render_status(&screen, Some(false)).trim(), "Loading catalog...");

        screen.loading = false;
        screen.error = Some("Failed to load catalog: boom".into());
        assert_eq!(
            render_status(&screen, Some(false)).trim(),
            "Failed to load catalog: boom"
        );
    }

    #[test]
    fn test_render_messages() {
        assert!(render_messages(&[], Some(false)).is_empty());

        let output = render_messages(
            &[Message::warning("Skipped x"), Message::success("saved")],
            Some(false),
        );
        assert_eq!(output, "Skipped x\nsaved\n");
    }

    #[test]
    fn test_render_config() {
        let entries = vec![("page-limit", "50".to_string()), ("timeout-secs", "none".to_string())];
        let output = render_config(&entries, Some(false));
        assert_eq!(output, "page-limit = 50\ntimeout-secs = none\n");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }
}
