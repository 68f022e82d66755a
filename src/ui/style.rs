//! Presentation rules for log rows
//!
//! A [`StyleSet`] is read-only configuration: built from the theme constants
//! by default, or loaded from a TOML file. The file is layered over the
//! defaults field by field, so `[hash] fg = "cyan"` recolors the hash and
//! keeps its margin and width.

use std::io;
use std::path::Path;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

/// Errors that can occur when loading a style set
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to read style file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse style file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Layout and emphasis for one visual role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StyleRule {
    /// Blank cells drawn before the text
    pub margin_left: u16,
    /// Minimum cells the text occupies, padded with spaces (0 = no padding)
    pub width: u16,
    /// Foreground color
    pub fg: Option<Color>,
    pub bold: bool,
}

impl StyleRule {
    pub const fn new() -> Self {
        Self {
            margin_left: 0,
            width: 0,
            fg: None,
            bold: false,
        }
    }

    pub const fn margin_left(self, margin_left: u16) -> Self {
        Self {
            margin_left,
            ..self
        }
    }

    pub const fn width(self, width: u16) -> Self {
        Self { width, ..self }
    }

    pub const fn fg(self, color: Color) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Copy of this rule with bold emphasis switched on or off
    pub const fn with_emphasis(self, bold: bool) -> Self {
        Self { bold, ..self }
    }

    /// Cells this rule reserves before any text longer than `width`
    pub fn reserved_width(&self) -> usize {
        usize::from(self.margin_left) + usize::from(self.width)
    }

    pub fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Render `text` as an unstyled margin followed by the padded, styled text
    pub fn render(&self, text: &str) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(2);
        if self.margin_left > 0 {
            spans.push(Span::raw(" ".repeat(usize::from(self.margin_left))));
        }

        let padding = usize::from(self.width).saturating_sub(text.width());
        let mut content = String::with_capacity(text.len() + padding);
        content.push_str(text);
        content.extend(std::iter::repeat_n(' ', padding));
        spans.push(Span::styled(content, self.style()));
        spans
    }
}

/// Rules for every role in a commit log row
///
/// The selector and hash rules are shared by active and inactive rows: the
/// selected row changes the selector glyph and renders the hash through
/// [`StyleRule::with_emphasis`]. Both title rules must keep the same
/// `margin_left`, since the title budget is computed once from the inactive
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StyleOverrides")]
pub struct StyleSet {
    pub selector: StyleRule,
    pub hash: StyleRule,
    pub title_active: StyleRule,
    pub title_inactive: StyleRule,
}

/// Fields of one role as written in a style file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RuleOverrides {
    margin_left: Option<u16>,
    width: Option<u16>,
    fg: Option<Color>,
    bold: Option<bool>,
}

impl RuleOverrides {
    fn apply(self, base: StyleRule) -> StyleRule {
        StyleRule {
            margin_left: self.margin_left.unwrap_or(base.margin_left),
            width: self.width.unwrap_or(base.width),
            fg: self.fg.or(base.fg),
            bold: self.bold.unwrap_or(base.bold),
        }
    }
}

/// A style file before it is layered over [`StyleSet::default`]
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleOverrides {
    selector: RuleOverrides,
    hash: RuleOverrides,
    title_active: RuleOverrides,
    title_inactive: RuleOverrides,
}

impl From<StyleOverrides> for StyleSet {
    fn from(overrides: StyleOverrides) -> Self {
        let base = Self::default();
        Self {
            selector: overrides.selector.apply(base.selector),
            hash: overrides.hash.apply(base.hash),
            title_active: overrides.title_active.apply(base.title_active),
            title_inactive: overrides.title_inactive.apply(base.title_inactive),
        }
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            selector: StyleRule::new().width(1).fg(theme::log_item::SELECTOR),
            hash: StyleRule::new()
                .margin_left(1)
                .width(7)
                .fg(theme::log_item::HASH),
            title_active: StyleRule::new()
                .margin_left(1)
                .fg(theme::log_item::TITLE_ACTIVE)
                .with_emphasis(true),
            title_inactive: StyleRule::new()
                .margin_left(1)
                .fg(theme::log_item::TITLE_INACTIVE),
        }
    }
}

impl StyleSet {
    /// Parse a TOML document; any role or field it leaves out keeps its
    /// default
    pub fn from_toml(source: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, StyleError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Load `path`, falling back to the defaults
    ///
    /// A missing file is silent; unreadable or malformed files are logged.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load(path) {
            Ok(styles) => styles,
            Err(e) => {
                tracing::warn!("Falling back to default styles for {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Cells consumed by the selector, hash and title margin before the title
    /// text starts
    ///
    /// Computed from the inactive title rule for every row, so an active title
    /// rule with a different `margin_left` would be mis-budgeted.
    pub fn title_offset(&self) -> usize {
        self.selector.reserved_width()
            + self.hash.reserved_width()
            + usize::from(self.title_inactive.margin_left)
    }
}
