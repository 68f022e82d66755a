//! UI symbols (selector glyphs, truncation marker)
//!
//! ## Character Set Policy
//! - Selector glyphs are plain ASCII so the column is one cell wide on
//!   every terminal
//! - The truncation marker is Unicode (`…`, one cell)

/// Selector column glyphs in the log list
pub mod selector {
    /// Selected row
    pub const ACTIVE: &str = ">";
    /// Any other row
    pub const INACTIVE: &str = " ";
}

/// Appended to text cut short to fit its column
pub const ELLIPSIS: &str = "…";

/// Empty state labels
pub mod empty {
    /// Shown when a list has no entries
    pub const NO_ITEMS: &str = "Nothing to show.";
    /// Shown when the commit log has no entries
    pub const NO_COMMITS: &str = "No commits to show.";
}
