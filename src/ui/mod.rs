//! UI layer
//!
//! Contains the list host, views, styles, symbols, and theme definitions.

pub mod components;
pub mod list;
pub mod style;
pub mod symbols;
pub mod text;
pub mod theme;
pub mod views;
