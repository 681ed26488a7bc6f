//! Styles for the coursedex CLI.
//!
//! Templates never carry colors. They name a semantic style (`code`, `credits`,
//! `badge-term`, ...) through the `style` filter, and the [`Theme`] here maps each
//! name to a `console::Style`. Unknown names are flagged with
//! [`MISSING_STYLE_INDICATOR`] so template typos show up in output.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const CODE: &str = "code";
    pub const CREDITS: &str = "credits";
    pub const TITLE: &str = "title";
    pub const DEPARTMENT: &str = "department";
    pub const DESCRIPTION: &str = "description";
    pub const BADGE_LEVEL: &str = "badge-level";
    pub const BADGE_TERM: &str = "badge-term";
    pub const BADGE_PREREQ: &str = "badge-prereq";
    pub const BADGE_NO_PREREQ: &str = "badge-no-prereq";
    pub const NOTICE: &str = "notice";
    pub const HINT: &str = "hint";
    pub const COUNT: &str = "count";
    pub const LABEL: &str = "label";
    pub const MUTED: &str = "muted";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
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

    /// Applies a named style, or returns the text untouched when `use_color` is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static CATALOG_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::CODE, Style::new().bold().cyan())
        .add(names::CREDITS, Style::new().dim())
        .add(names::TITLE, Style::new().bold())
        .add(names::DEPARTMENT, Style::new().magenta())
        .add(names::DESCRIPTION, Style::new())
        .add(names::BADGE_LEVEL, Style::new().blue())
        .add(names::BADGE_TERM, Style::new().green())
        .add(names::BADGE_PREREQ, Style::new().yellow())
        .add(names::BADGE_NO_PREREQ, Style::new().dim())
        .add(names::NOTICE, Style::new().bold())
        .add(names::HINT, Style::new().dim().italic())
        .add(names::COUNT, Style::new().bold().cyan())
        .add(names::LABEL, Style::new().bold())
        .add(names::MUTED, Style::new().dim())
        .add(names::ERROR, Style::new().bold().red())
        .add(names::WARNING, Style::new().yellow())
        .add(names::SUCCESS, Style::new().green())
});
