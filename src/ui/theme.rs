//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for commit log rows
pub mod log_item {
    use super::*;

    /// Selector glyph color
    pub const SELECTOR: Color = Color::Magenta;
    /// Abbreviated commit id color
    pub const HASH: Color = Color::Yellow;
    /// Title color on the selected row
    pub const TITLE_ACTIVE: Color = Color::White;
    /// Title color on every other row
    pub const TITLE_INACTIVE: Color = Color::Gray;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_and_inactive_titles_differ() {
        assert_ne!(log_item::TITLE_ACTIVE, log_item::TITLE_INACTIVE);
    }

    #[test]
    fn test_hash_stands_out_from_titles() {
        assert_ne!(log_item::HASH, log_item::TITLE_ACTIVE);
        assert_ne!(log_item::HASH, log_item::TITLE_INACTIVE);
    }
}
