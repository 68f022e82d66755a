//! View components
//!
//! Each view supplies the list entries and row delegate for one kind of
//! content.

mod log;

pub use log::{CommitEntry, LogItemDelegate, commit_list};
