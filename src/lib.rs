//! Commitrow - commit log rows for terminal list views
//!
//! Renders one version-control commit per list row: a selector glyph, the
//! abbreviated commit id, and the first line of the message truncated to
//! the available width.
//!
//! This library provides:
//! - [`model`]: Commit data model
//! - [`ui`]: List host, log row delegate, styles and text helpers

pub mod model;
pub mod ui;
