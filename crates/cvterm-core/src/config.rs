//! Compile-time configuration.
//!
//! Text assets are loaded with `include_str!` so the whole résumé ships
//! inside the binary.

// =============================================================================
// Text Assets
// =============================================================================

/// Résumé tree in TOML form, parsed by [`crate::VirtualFs::embedded`].
pub const CV_MANIFEST: &str = include_str!("../assets/cv.toml");

/// Help text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/help.txt");

// =============================================================================
// Identity
// =============================================================================

/// Output of the `whoami` command.
pub const WHOAMI: &str = "visitor - Guest User";

/// Banner shown above the output history.
pub const WELCOME_BANNER: &str =
    "Welcome to Samuel Lefcourt's Terminal CV!\nType 'help' for available commands.";

/// Window title of the terminal.
pub const APP_TITLE: &str = "Terminal CV";

// =============================================================================
// Paths
// =============================================================================

/// Name of the root segment (home directory).
pub const ROOT_SEGMENT: &str = "~";

/// Path separator.
pub const SEPARATOR: char = '/';

/// Prompt suffix printed after the current path.
pub const PROMPT_SYMBOL: &str = "$";
