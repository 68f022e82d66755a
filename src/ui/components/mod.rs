//! Reusable UI components
//!
//! Common building blocks for lists and views.

pub mod empty_state;

pub use empty_state::*;
