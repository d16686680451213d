//! Command execution result type.

use crate::error::ShellError;
use crate::path::VirtualPath;

/// Directory listing entry produced by `ls`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub is_dir: bool,
}

impl ListEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// What a command prints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text, printed verbatim (help, pwd, whoami, file contents)
    Text(String),
    /// Immediate children of a directory
    Listing(Vec<ListEntry>),
    /// Error message (red)
    Error(ShellError),
    /// Nothing to print
    Empty,
}

impl CommandOutput {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Result of executing a command.
///
/// Handlers never touch the session; state changes are requested here and
/// applied by [`crate::Session`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Output to display
    pub output: CommandOutput,
    /// New working directory (e.g., for `cd`)
    pub navigate_to: Option<VirtualPath>,
    /// Drop the displayed history (`clear`)
    pub clear_screen: bool,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(output: CommandOutput) -> Self {
        Self {
            output,
            navigate_to: None,
            clear_screen: false,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::output(CommandOutput::Text(text.into()))
    }

    pub fn error(err: ShellError) -> Self {
        Self::output(CommandOutput::Error(err))
    }

    /// Change directory without printing anything.
    pub fn navigate(path: VirtualPath) -> Self {
        Self {
            output: CommandOutput::Empty,
            navigate_to: Some(path),
            clear_screen: false,
        }
    }

    /// Clear the screen without printing anything.
    pub fn clear() -> Self {
        Self {
            output: CommandOutput::Empty,
            navigate_to: None,
            clear_screen: true,
        }
    }

    /// Create an empty result (no output, no state change).
    pub fn empty() -> Self {
        Self::output(CommandOutput::Empty)
    }
}
