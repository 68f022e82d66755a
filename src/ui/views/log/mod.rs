//! Log list entries - one row per commit
//!
//! [`CommitEntry`] adapts a commit to [`ListItem`]; [`LogItemDelegate`] draws
//! it as `<selector><short id> <title>`.

mod delegate;

use std::any::Any;
use std::rc::Rc;

use crate::model::Commit;
use crate::ui::list::{ItemList, ListItem};
use crate::ui::style::StyleSet;
use crate::ui::symbols;

pub use delegate::LogItemDelegate;

/// A commit as an entry in the log list
///
/// The commit may be absent; text accessors then return empty strings and
/// the delegate draws nothing for the row.
#[derive(Debug, Clone, Default)]
pub struct CommitEntry {
    commit: Option<Rc<Commit>>,
}

impl CommitEntry {
    pub fn new(commit: impl Into<Rc<Commit>>) -> Self {
        Self {
            commit: Some(commit.into()),
        }
    }

    /// An entry with no commit behind it
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn commit(&self) -> Option<&Commit> {
        self.commit.as_deref()
    }
}

impl From<Commit> for CommitEntry {
    fn from(commit: Commit) -> Self {
        Self::new(commit)
    }
}

impl ListItem for CommitEntry {
    /// Full lowercase hex id, or an empty string for an absent commit
    fn id(&self) -> String {
        self.commit
            .as_ref()
            .map(|commit| commit.id.to_hex())
            .unwrap_or_default()
    }

    fn title(&self) -> &str {
        self.commit().map_or("", Commit::summary)
    }

    fn description(&self) -> &str {
        ""
    }

    fn filter_value(&self) -> &str {
        self.title()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Build a log list over `commits`, newest first as given
pub fn commit_list<I>(commits: I, styles: Rc<StyleSet>) -> ItemList<LogItemDelegate>
where
    I: IntoIterator<Item = Commit>,
{
    let items = commits
        .into_iter()
        .map(|commit| Box::new(CommitEntry::from(commit)) as Box<dyn ListItem>)
        .collect();

    ItemList::new(LogItemDelegate::new(styles))
        .with_items(items)
        .with_empty_text(symbols::empty::NO_COMMITS)
}
