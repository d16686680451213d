//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` / `CommandOutput` for execution results
//! - `execute_command` for running a command against the filesystem
//!
//! # Architecture
//!
//! A submitted line is split on whitespace; the first word is looked up in
//! the closed `Command` enum and the rest become its arguments. Execution is
//! pure: it reads the filesystem and working directory and describes any
//! state change in the returned `CommandResult`.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::{CommandOutput, CommandResult, ListEntry};

use std::fmt;

use crate::error::ShellError;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd education`, `cat about.txt`).
///
/// Stored as typed; validation happens during execution against the
/// virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathArg {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    /// List a directory, the working directory by default
    Ls(Option<PathArg>),
    /// Print a file from the working directory
    Cat(PathArg),
    /// Change directory, home by default
    Cd(Option<PathArg>),
    Pwd,
    Whoami,
}

impl Command {
    /// All command names, sorted, for autocomplete.
    pub fn names() -> &'static [&'static str] {
        &["cat", "cd", "clear", "help", "ls", "pwd", "whoami"]
    }

    /// Parse command from name and arguments.
    ///
    /// Names are matched exactly. Arguments beyond the ones a command
    /// takes are ignored.
    pub fn parse(name: &str, args: &[&str]) -> Result<Self, ShellError> {
        let first = args.first().map(|arg| PathArg::new(*arg));
        match name {
            "help" => Ok(Self::Help),
            "clear" => Ok(Self::Clear),
            "ls" => Ok(Self::Ls(first)),
            "cat" => first
                .map(Self::Cat)
                .ok_or(ShellError::MissingArgument { command: "cat" }),
            "cd" => Ok(Self::Cd(first)),
            "pwd" => Ok(Self::Pwd),
            "whoami" => Ok(Self::Whoami),
            _ => Err(ShellError::UnknownCommand(name.to_string())),
        }
    }

    /// Parse a whole input line.
    ///
    /// Returns `None` for a blank line.
    pub fn parse_line(line: &str) -> Option<Result<Self, ShellError>> {
        let mut words = line.split_whitespace();
        let name = words.next()?;
        let args: Vec<&str> = words.collect();
        Some(Self::parse(name, &args))
    }

    /// The name the command was invoked with.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Ls(_) => "ls",
            Self::Cat(_) => "cat",
            Self::Cd(_) => "cd",
            Self::Pwd => "pwd",
            Self::Whoami => "whoami",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
