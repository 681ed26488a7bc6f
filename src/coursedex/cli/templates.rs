//! # CLI Templates
//!
//! Terminal output is produced from minijinja templates kept as standalone files, so
//! layout can be edited and diffed apart from the code. They are embedded here as
//! string constants.
//!
//! Conventions:
//!
//! 1. Line breaks are explicit. Block tags use `-%}` / `{%-` to trim the newline
//!    they would otherwise leave behind, so every emitted newline is visible in the
//!    template source.
//! 2. Templates choose *which* style a value gets by name (`style("code")`), never
//!    what it looks like. Visuals live in `styles.rs`.
//! 3. Width math (padding, wrapping) is done in Rust and handed to the template as
//!    ready strings.

pub const CARDS_TEMPLATE: &str = include_str!("templates/cards.tmp");
pub const NOTICE_TEMPLATE: &str = include_str!("templates/notice.tmp");
pub const COUNT_TEMPLATE: &str = include_str!("templates/count.tmp");
pub const OPTIONS_TEMPLATE: &str = include_str!("templates/options.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGE_TEMPLATE: &str = include_str!("templates/message.tmp");

/// Every template, keyed by the name it is registered under.
pub const ALL: &[(&str, &str)] = &[
    ("cards", CARDS_TEMPLATE),
    ("notice", NOTICE_TEMPLATE),
    ("count", COUNT_TEMPLATE),
    ("options", OPTIONS_TEMPLATE),
    ("text_list", TEXT_LIST_TEMPLATE),
    ("message", MESSAGE_TEMPLATE),
];
