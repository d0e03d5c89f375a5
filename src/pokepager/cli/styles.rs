use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Named terminal styles, applied through the `style` template filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Unknown style names leave the text untouched.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            _ => text.to_string(),
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

const TYPE_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("normal", (168, 168, 120)),
    ("fire", (240, 128, 48)),
    ("water", (104, 144, 240)),
    ("grass", (120, 200, 80)),
    ("electric", (248, 208, 48)),
    ("ice", (152, 216, 216)),
    ("fighting", (192, 48, 40)),
    ("poison", (160, 64, 160)),
    ("ground", (224, 192, 104)),
    ("flying", (168, 144, 240)),
    ("psychic", (248, 88, 136)),
    ("bug", (168, 184, 32)),
    ("rock", (184, 160, 56)),
    ("ghost", (112, 88, 152)),
    ("dragon", (112, 56, 248)),
    ("dark", (112, 88, 72)),
    ("steel", (184, 184, 208)),
    ("fairy", (238, 153, 172)),
];

/// Style name for a card's frame, keyed by its primary type.
pub fn type_style(primary_type: &str) -> String {
    let name = format!("type_{}", primary_type);
    if POKEPAGER_THEME.has(&name) {
        name
    } else {
        names::TYPE_UNKNOWN.to_string()
    }
}

pub mod names {
    pub const TITLE: &str = "title";
    pub const STATUS: &str = "status";
    pub const WARNING: &str = "warning";
    pub const NAME: &str = "name";
    pub const TYPES: &str = "types";
    pub const IMAGE: &str = "image";
    pub const EMPTY: &str = "empty";
    pub const PLAIN: &str = "plain";
    pub const NAV_ON: &str = "nav_on";
    pub const NAV_OFF: &str = "nav_off";
    pub const LABEL: &str = "label";
    pub const TYPE_UNKNOWN: &str = "type_unknown";
}

pub static POKEPAGER_THEME: Lazy<Theme> = Lazy::new(|| {
    let gray = Style::new().color256(rgb_to_ansi256((154, 154, 154)));
    let mut theme = Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::STATUS, gray.clone().italic())
        .add(names::WARNING, Style::new().yellow())
        .add(names::NAME, Style::new().bold())
        .add(names::TYPES, Style::new())
        .add(names::IMAGE, gray.clone())
        .add(names::EMPTY, gray.clone())
        .add(names::PLAIN, Style::new())
        .add(names::NAV_ON, Style::new().cyan().bold())
        .add(names::NAV_OFF, gray.clone().dim())
        .add(names::LABEL, gray.clone())
        .add(names::TYPE_UNKNOWN, gray);
    for (name, rgb) in TYPE_COLORS {
        theme = theme.add(
            &format!("type_{}", name),
            Style::new().color256(rgb_to_ansi256(*rgb)),
        );
    }
    theme
});
