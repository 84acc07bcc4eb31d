use super::theme::Theme;
use console::Style;
use once_cell::sync::Lazy;

pub mod names {
    pub const CARD_LABEL: &str = "card_label";
    pub const SPRITE: &str = "sprite";
    pub const HEADER: &str = "header";
    pub const DETAIL_TITLE: &str = "detail_title";
    pub const FIELD: &str = "field";
    pub const MUTED: &str = "muted";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static DEX_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::CARD_LABEL, Style::new().bold())
        .add(names::SPRITE, Style::new().color256(245).italic())
        .add(names::HEADER, Style::new().cyan())
        .add(names::DETAIL_TITLE, Style::new().bold().yellow())
        .add(names::FIELD, Style::new().dim())
        .add(names::MUTED, Style::new().dim())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red().bold())
});
