//! UI components built with Leptos.
//!
//! - [`icons`] - Icon definitions
//! - [`terminal`] - Terminal window, output history and input line

pub mod icons;
pub mod terminal;

pub use terminal::Terminal;
