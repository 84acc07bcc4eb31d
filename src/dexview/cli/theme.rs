//! Styled template rendering.
//!
//! Templates are minijinja templates that apply named styles through a
//! `style` filter: `{{ card.label | style("card_label") }}`. A [`Theme`] maps
//! those names to `console::Style`s. When color is off the filter returns the
//! plain text, so the same template serves terminals, pipes and tests.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

/// Prefix shown when a template asks for a style the theme does not define.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style. Returns self for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// Whether stdout should receive ANSI styling.
pub fn detect_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Renders `template` with `data`. `use_color: None` auto-detects from stdout.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: Option<bool>,
) -> Result<String, Error> {
    let use_color = use_color.unwrap_or_else(detect_color);
    let styles = theme.clone();

    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("inline", template)?;
    let tmpl = env.get_template("inline")?;
    tmpl.render(data)
}
