//! Rendering for ItemList

use std::iter;

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::ui::components;

use super::{ItemDelegate, ItemList};

impl<D: ItemDelegate> ItemList<D> {
    /// Draw the visible rows into `area`
    ///
    /// Each row gets a slot of `delegate.height()` lines, and slots are
    /// separated by `delegate.spacing()` blank lines. The delegate's line is
    /// drawn at the top of its slot.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.width = area.width;

        if self.items.is_empty() {
            frame.render_widget(components::empty_state(self.empty_text), area);
            return;
        }

        let height = usize::from(area.height);
        if height == 0 {
            return;
        }

        let row_height = usize::from(self.delegate.height().max(1));
        let spacing = usize::from(self.delegate.spacing());
        let visible_rows = ((height + spacing) / (row_height + spacing)).max(1);
        self.scroll_offset = self.calculate_scroll_offset(visible_rows);

        let context = self.context();
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(height);
        for (index, item) in self.items.iter().enumerate().skip(self.scroll_offset) {
            if lines.len() >= height {
                break;
            }
            if index > self.scroll_offset {
                lines.extend(iter::repeat_n(Line::default(), spacing));
            }

            let mut line = Line::default();
            self.delegate.render(&mut line, &context, index, &**item);
            lines.push(line);
            lines.extend(iter::repeat_n(Line::default(), row_height - 1));
        }
        lines.truncate(height);

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn calculate_scroll_offset(&self, visible_rows: usize) -> usize {
        let mut offset = self.scroll_offset;

        // Ensure selected item is visible
        if self.selected_index < offset {
            offset = self.selected_index;
        } else if self.selected_index >= offset + visible_rows {
            offset = self.selected_index - visible_rows + 1;
        }

        offset
    }
}
