//! Output templates, embedded at compile time.
//!
//! Templates live as standalone files under `templates/` so layout can be
//! edited and diffed without touching Rust code. Each template spells out its
//! own line breaks; loops and conditionals sit flush against the text they
//! guard so no stray blank lines leak into the output.
//!
//! Layout math (column widths, padding) is done in `render.rs` and passed in
//! as plain strings. Templates only pick styles and arrange lines.

pub const CARDS_TEMPLATE: &str = include_str!("templates/cards.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const STATUS_TEMPLATE: &str = include_str!("templates/status.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
