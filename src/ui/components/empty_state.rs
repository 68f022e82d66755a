//! Empty state components
//!
//! Display messages when there's no content to show.

use ratatui::{text::Line, widgets::Paragraph};

/// Create a centered empty state display, one blank line below the top edge
pub fn empty_state(title: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(title.to_string()).centered(),
    ])
}
