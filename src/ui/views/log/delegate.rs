//! Row rendering for commit entries

use std::convert::Infallible;
use std::rc::Rc;

use crossterm::event::Event;
use ratatui::text::Line;

use crate::ui::list::{ItemDelegate, ListContext, ListItem};
use crate::ui::style::StyleSet;
use crate::ui::symbols;
use crate::ui::text::{sanitize, truncate_with_tail};

use super::CommitEntry;

/// Draws a [`CommitEntry`] as a single line
#[derive(Debug, Clone, Default)]
pub struct LogItemDelegate {
    styles: Rc<StyleSet>,
}

impl LogItemDelegate {
    pub fn new(styles: Rc<StyleSet>) -> Self {
        Self { styles }
    }
}

impl ItemDelegate for LogItemDelegate {
    type Action = Infallible;

    fn height(&self) -> u16 {
        1
    }

    fn spacing(&self) -> u16 {
        0
    }

    fn on_event(&self, _event: &Event, _list: &mut ListContext) -> Option<Infallible> {
        None
    }

    fn render(
        &self,
        out: &mut Line<'static>,
        list: &ListContext,
        index: usize,
        item: &dyn ListItem,
    ) {
        let Some(entry) = item.as_any().downcast_ref::<CommitEntry>() else {
            tracing::trace!(index, "skipping row: not a commit entry");
            return;
        };
        let Some(commit) = entry.commit() else {
            tracing::trace!(index, "skipping row: commit is absent");
            return;
        };

        let short_id = commit.id.short();
        let styles = &*self.styles;

        // Same budget for active and inactive rows; see StyleSet::title_offset
        let available = usize::from(list.width).saturating_sub(styles.title_offset());
        let title = sanitize(entry.title());
        let title = truncate_with_tail(&title, available, symbols::ELLIPSIS);

        if index == list.selected_index {
            out.spans.extend(styles.selector.render(symbols::selector::ACTIVE));
            out.spans.extend(styles.hash.with_emphasis(true).render(&short_id));
            out.spans.extend(styles.title_active.render(&title));
        } else {
            out.spans
                .extend(styles.selector.render(symbols::selector::INACTIVE));
            out.spans.extend(styles.hash.render(&short_id));
            out.spans.extend(styles.title_inactive.render(&title));
        }
    }
}
