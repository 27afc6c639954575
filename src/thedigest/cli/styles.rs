//! Styles for the digest CLI.
//!
//! Templates never pick colors. They name what a piece of text *is* (a heading, a
//! tag, the active nav item) through the `style` filter:
//!
//! ```jinja
//! {{ issue.title | style("title") }}
//! ```
//!
//! and this module maps those semantic names to `console::Style`s. A name missing from
//! the theme is rendered with a `(!?)` prefix so typos show up in output instead of
//! silently losing their styling.
//!
//! With color disabled (`--no-color`, pipes, `TERM=dumb`) the filter returns the text
//! unchanged.

use console::Style;
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const BRAND: &str = "brand";
    pub const HEADING: &str = "heading";
    pub const SUBHEADING: &str = "subheading";
    pub const TITLE: &str = "title";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const HIGHLIGHT: &str = "highlight";
    pub const STAT: &str = "stat";
    pub const NAV: &str = "nav";
    pub const NAV_ACTIVE: &str = "nav-active";
    pub const CTA: &str = "cta";
    pub const LINK: &str = "link";
    pub const BADGE: &str = "badge";
    pub const FEATURED: &str = "featured";
    pub const TAG: &str = "tag";
    pub const CONFIG_KEY: &str = "config-key";
    pub const TOAST: &str = "toast";
    pub const TOAST_DESTRUCTIVE: &str = "toast-destructive";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    #[cfg(test)]
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static DIGEST_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let muted = Style::new().color256(245);
    let accent = Style::new().color256(33);

    Theme::new()
        .add(names::BRAND, accent.clone().bold())
        .add(names::HEADING, Style::new().bold().underlined())
        .add(names::SUBHEADING, Style::new().bold())
        .add(names::TITLE, Style::new().bold())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, Style::new().color256(240))
        .add(names::HIGHLIGHT, accent.clone())
        .add(names::STAT, accent.clone().bold())
        .add(names::NAV, muted.clone())
        .add(names::NAV_ACTIVE, accent.clone().bold())
        .add(names::CTA, Style::new().white().on_color256(33).bold())
        .add(names::LINK, accent.underlined())
        .add(names::BADGE, Style::new().color256(250).on_color256(236))
        .add(names::FEATURED, Style::new().black().on_yellow())
        .add(names::TAG, Style::new().cyan())
        .add(names::CONFIG_KEY, Style::new().yellow())
        .add(names::TOAST, Style::new().green().bold())
        .add(names::TOAST_DESTRUCTIVE, Style::new().red().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
}

/// Registers the `style` filter on a minijinja environment.
pub fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
}
