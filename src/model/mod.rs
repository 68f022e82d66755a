//! Data models
//!
//! UI-independent representation of the commits shown in the log list.

mod commit;

pub use commit::{Commit, CommitId, CommitIdError, SHORT_ID_LEN};
