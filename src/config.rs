//! Front-end configuration.
//!
//! Command texts (help, identity, banner) live in `cvterm_core::config`.

/// Id of the element the app mounts on (see `index.html`).
pub const ROOT_ELEMENT_ID: &str = "app";

/// Selector of the command input, focused when the terminal is clicked.
pub const INPUT_SELECTOR: &str = "input[data-terminal-input]";
