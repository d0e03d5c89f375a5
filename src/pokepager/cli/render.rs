//! # Rendering Module
//!
//! Card grid and status output, rendered through minijinja templates with the
//! styles from `styles.rs`.
//!
//! Layout calculations (card width, truncation, padding, grid rows) stay in
//! Rust because they need Unicode-aware widths. Templates receive pre-sized
//! cells plus a style name for each, and handle arrangement only.

use super::styles::{names, type_style, POKEPAGER_THEME};
use super::templates::{HELP_TEMPLATE, INDEX_TEMPLATE, PAGE_TEMPLATE};
use colored::Colorize;
use console::Term;
use minijinja::{Environment, Value};
use pokepager::card::{self, Card, CardSlot};
use pokepager::index::IndexSource;
use pokepager::model::{NameIndex, NavState};
use pokepager::pager::PageView;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const CARD_WIDTH: usize = 24;
const CARD_INNER: usize = CARD_WIDTH - 4;
const CARD_GAP: &str = " ";
pub const MAX_COLUMNS: usize = 5;
const EMPTY_MARKER: &str = "-";
const INDEX_PREVIEW: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub use_color: bool,
    pub columns: usize,
}

impl RenderOptions {
    /// Colors and grid width from the attached terminal.
    pub fn detect(no_color: bool) -> Self {
        let term = Term::stdout();
        let use_color = !no_color && term.features().colors_supported();
        let columns = term
            .size_checked()
            .map(|(_, width)| (width as usize + CARD_GAP.len()) / (CARD_WIDTH + CARD_GAP.len()))
            .unwrap_or(MAX_COLUMNS)
            .clamp(1, MAX_COLUMNS);
        Self { use_color, columns }
    }
}

#[derive(Clone, Serialize)]
struct Cell {
    text: String,
    style: String,
}

impl Cell {
    fn new(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
        }
    }
}

#[derive(Serialize)]
struct Button {
    label: &'static str,
    style: &'static str,
}

impl Button {
    fn new(label: &'static str, enabled: bool) -> Self {
        Self {
            label,
            style: if enabled {
                names::NAV_ON
            } else {
                names::NAV_OFF
            },
        }
    }
}

#[derive(Serialize)]
struct PageData {
    page_number: usize,
    page_count: usize,
    range: String,
    fallback: bool,
    lines: Vec<Vec<Cell>>,
    buttons: Vec<Button>,
}

#[derive(Serialize)]
struct IndexData {
    source: String,
    total_count: usize,
    identifier_count: usize,
    fallback: bool,
    meta_source: Option<String>,
    meta_count: Option<usize>,
    preview: Vec<String>,
}

#[derive(Serialize)]
struct HelpData {
    buttons: Vec<Button>,
}

/// Navigation buttons. Interactive sessions also show start and quit.
fn buttons(nav: NavState, interactive: bool) -> Vec<Button> {
    let mut buttons = Vec::with_capacity(4);
    if interactive {
        buttons.push(Button::new("[s] start", true));
    }
    buttons.push(Button::new("[p] ‹ prev", nav.can_prev));
    buttons.push(Button::new("[n] next ›", nav.can_next));
    if interactive {
        buttons.push(Button::new("[q] quit", true));
    }
    buttons
}

/// Renders the current page as a card grid with exactly `page_size` slots.
pub fn render_page(
    view: &PageView,
    fallback: bool,
    interactive: bool,
    opts: &RenderOptions,
) -> String {
    let slots = card::layout(&view.batch, view.page_size);
    let data = PageData {
        page_number: view.page_number,
        page_count: view.page_count,
        range: item_range(view),
        fallback,
        lines: grid_lines(&slots, opts.columns.max(1)),
        buttons: buttons(view.nav, interactive),
    };
    render_template("page", PAGE_TEMPLATE, &data, opts.use_color)
}

pub fn render_index(index: &NameIndex, source: &IndexSource, opts: &RenderOptions) -> String {
    let data = IndexData {
        source: source.to_string(),
        total_count: index.total_count(),
        identifier_count: index.identifiers().len(),
        fallback: index.is_fallback(),
        meta_source: index.meta().and_then(|m| m.source.clone()),
        meta_count: index.meta().and_then(|m| m.count),
        preview: index
            .identifiers()
            .iter()
            .take(INDEX_PREVIEW)
            .cloned()
            .collect(),
    };
    render_template("index", INDEX_TEMPLATE, &data, opts.use_color)
}

pub fn render_help(nav: NavState, opts: &RenderOptions) -> String {
    let data = HelpData {
        buttons: buttons(nav, true),
    };
    render_template("help", HELP_TEMPLATE, &data, opts.use_color)
}

fn render_template<T: Serialize>(
    name: &'static str,
    source: &'static str,
    data: &T,
    use_color: bool,
) -> String {
    let mut env = Environment::new();
    let theme = POKEPAGER_THEME.clone();
    env.add_filter("style", move |value: Value, style: String| -> String {
        theme.apply(&style, &value.to_string(), use_color)
    });

    let rendered = env
        .add_template(name, source)
        .and_then(|_| env.get_template(name))
        .and_then(|template| template.render(data));
    rendered.unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn item_range(view: &PageView) -> String {
    if view.total_count == 0 {
        return "no entries".to_string();
    }
    let first = view.offset + 1;
    let last = (view.offset + view.page_size).min(view.total_count);
    format!("#{}–{} of {}", first, last, view.total_count)
}

/// Card rows laid out side by side, a blank line between rows.
fn grid_lines(slots: &[CardSlot], columns: usize) -> Vec<Vec<Cell>> {
    let mut lines = Vec::new();
    for (row_idx, row) in slots.chunks(columns).enumerate() {
        if row_idx > 0 {
            lines.push(Vec::new());
        }
        let cards: Vec<Vec<Vec<Cell>>> = row.iter().map(card_lines).collect();
        let height = cards.first().map(Vec::len).unwrap_or(0);
        for line_no in 0..height {
            let mut line = Vec::new();
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    line.push(Cell::new(CARD_GAP, names::PLAIN));
                }
                line.extend(card[line_no].iter().cloned());
            }
            lines.push(line);
        }
    }
    lines
}

fn card_lines(slot: &CardSlot) -> Vec<Vec<Cell>> {
    let (frame, body) = match slot {
        CardSlot::Filled(card) => (type_style(&card.primary_type), filled_body(card)),
        CardSlot::Empty => (names::EMPTY.to_string(), empty_body()),
    };

    let horizontal = "─".repeat(CARD_WIDTH - 2);
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(vec![Cell::new(format!("┌{}┐", horizontal), frame.clone())]);
    for (text, style) in body {
        lines.push(vec![
            Cell::new("│ ", frame.clone()),
            Cell::new(pad_to_width(&text, CARD_INNER), style),
            Cell::new(" │", frame.clone()),
        ]);
    }
    lines.push(vec![Cell::new(format!("└{}┘", horizontal), frame)]);
    lines
}

fn filled_body(card: &Card) -> Vec<(String, &'static str)> {
    let image = match &card.image {
        Some(url) => format!("img {}", url.rsplit('/').next().unwrap_or(url)),
        None => "no image".to_string(),
    };
    vec![
        (card.name.clone(), names::NAME),
        (card.type_label.clone(), names::TYPES),
        (image, names::IMAGE),
    ]
}

fn empty_body() -> Vec<(String, &'static str)> {
    let left = (CARD_INNER - EMPTY_MARKER.width()) / 2;
    vec![
        (format!("{}{}", " ".repeat(left), EMPTY_MARKER), names::EMPTY),
        (String::new(), names::EMPTY),
        (String::new(), names::EMPTY),
    ]
}

fn pad_to_width(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

// --- Messages ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
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
}

pub fn print_messages(messages: &[Message]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
