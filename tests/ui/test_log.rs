//! Snapshot tests for the commit log list
//!
//! Uses insta + ratatui TestBackend for visual regression testing.

use std::any::Any;
use std::rc::Rc;

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use commitrow::model::{Commit, CommitId};
use commitrow::ui::list::{ItemList, ListItem};
use commitrow::ui::style::StyleSet;
use commitrow::ui::views::{CommitEntry, LogItemDelegate, commit_list};

/// Helper: create a Commit from a hex id and message
fn make_commit(hex: &str, message: &str) -> Commit {
    Commit::new(CommitId::from_hex(hex).unwrap(), message)
}

fn sample_commits() -> Vec<Commit> {
    vec![
        make_commit(
            "3f786850e387550fdab836ed7e6dc881de23001b",
            "Add user authentication",
        ),
        make_commit(
            "e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f4",
            "Refactor database layer\n\nSplit the pool setup into its own module.",
        ),
        make_commit(
            "0123456789abcdef0123456789abcdef01234567",
            "Initial commit",
        ),
    ]
}

fn draw(list: &mut ItemList<LogItemDelegate>, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            list.render(frame, area);
        })
        .unwrap();
    terminal
}

/// Item kind the log delegate does not know how to draw
struct Separator;

impl ListItem for Separator {
    fn id(&self) -> String {
        "separator".to_string()
    }

    fn title(&self) -> &str {
        "----"
    }

    fn description(&self) -> &str {
        ""
    }

    fn filter_value(&self) -> &str {
        ""
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn test_log_list_with_commits() {
    let mut list = commit_list(sample_commits(), Rc::new(StyleSet::default()));

    let terminal = draw(&mut list, 30, 4);

    assert_snapshot!(terminal.backend(), @r#"
    "> 3f78685 Add user authentica…"
    "  e5f6a7b Refactor database l…"
    "  0123456 Initial commit      "
    "                              "
    "#);
}

#[test]
fn test_log_list_second_row_selected() {
    let mut list = commit_list(sample_commits(), Rc::new(StyleSet::default()));
    list.select(1);

    let terminal = draw(&mut list, 30, 3);

    assert_snapshot!(terminal.backend(), @r#"
    "  3f78685 Add user authentica…"
    "> e5f6a7b Refactor database l…"
    "  0123456 Initial commit      "
    "#);
}

#[test]
fn test_log_list_narrow() {
    let mut list = commit_list(sample_commits(), Rc::new(StyleSet::default()));

    let terminal = draw(&mut list, 12, 3);

    assert_snapshot!(terminal.backend(), @r#"
    "> 3f78685 A…"
    "  e5f6a7b R…"
    "  0123456 I…"
    "#);
}

#[test]
fn test_log_list_narrower_than_prefix() {
    let mut list = commit_list(sample_commits(), Rc::new(StyleSet::default()));

    let terminal = draw(&mut list, 8, 2);

    assert_snapshot!(terminal.backend(), @r#"
    "> 3f7868"
    "  e5f6a7"
    "#);
}

#[test]
fn test_log_list_scrolled() {
    let mut list = commit_list(sample_commits(), Rc::new(StyleSet::default()));
    list.select(2);

    let terminal = draw(&mut list, 30, 2);

    assert_snapshot!(terminal.backend(), @r#"
    "  e5f6a7b Refactor database l…"
    "> 0123456 Initial commit      "
    "#);
}

#[test]
fn test_log_list_skips_unrenderable_rows() {
    let [first, _, last] = <[Commit; 3]>::try_from(sample_commits()).unwrap();
    let items: Vec<Box<dyn ListItem>> = vec![
        Box::new(CommitEntry::from(first)),
        Box::new(CommitEntry::absent()),
        Box::new(Separator),
        Box::new(CommitEntry::from(last)),
    ];
    let mut list = ItemList::new(LogItemDelegate::new(Rc::new(StyleSet::default())))
        .with_items(items);
    list.select(3);

    let terminal = draw(&mut list, 30, 4);

    assert_snapshot!(terminal.backend(), @r#"
    "  3f78685 Add user authentica…"
    "                              "
    "                              "
    "> 0123456 Initial commit      "
    "#);
}

#[test]
fn test_log_list_empty() {
    let mut list = commit_list(Vec::new(), Rc::new(StyleSet::default()));

    let terminal = draw(&mut list, 30, 3);

    assert_snapshot!(terminal.backend(), @r#"
    "                              "
    "      No commits to show.     "
    "                              "
    "#);
}
