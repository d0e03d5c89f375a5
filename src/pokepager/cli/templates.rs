//! # CLI Templates
//!
//! Terminal output goes through minijinja templates kept in `templates/` and
//! embedded at compile time. Layout math (card widths, truncation, grid rows)
//! stays in `render.rs`; templates only arrange pre-sized pieces and pick
//! styles through the `style` filter.
//!
//! Whitespace is significant: blocks are not trimmed, so every line break in
//! a template file ends up in the output (except the final one).

pub const PAGE_TEMPLATE: &str = include_str!("templates/page.tmp");
pub const INDEX_TEMPLATE: &str = include_str!("templates/index.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
