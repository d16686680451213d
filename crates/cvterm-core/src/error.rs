//! Error types.
//!
//! - [`ShellError`] - recoverable command failures, rendered inline
//! - [`ManifestError`] - failures building the filesystem from the manifest
//!
//! The `Display` output of [`ShellError`] is exactly what the terminal prints.

use thiserror::Error;

/// Failure of a single command.
///
/// None of these are fatal: they become an error entry in the output
/// history and leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// The first word of the line is not a known command.
    #[error("Command not found: {0}")]
    UnknownCommand(String),

    /// A required operand was not supplied.
    #[error("Usage: {command} <filename>")]
    MissingArgument { command: &'static str },

    /// The target does not exist.
    #[error("{}", not_found_message(.command, .target))]
    NotFound {
        command: &'static str,
        target: String,
    },

    /// The target exists but is a file.
    #[error("{}", not_a_directory_message(.command, .target))]
    NotADirectory {
        command: &'static str,
        target: String,
    },

    /// The target exists but is a directory.
    #[error("Error: {target} is a directory")]
    IsADirectory { target: String },
}

fn not_found_message(command: &str, target: &str) -> String {
    match command {
        "ls" => format!("ls: directory not found: {}", target),
        "cd" => format!("Directory not found: {}", target),
        _ => format!("File not found: {}", target),
    }
}

fn not_a_directory_message(command: &str, target: &str) -> String {
    match command {
        "ls" => format!("ls: not a directory: {}", target),
        _ => format!("Not a directory: {}", target),
    }
}

/// Failure to build the virtual filesystem.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest is not valid TOML or does not match the schema.
    #[error("invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// A path needs a directory where a file already exists.
    #[error("manifest conflict: '{path}' blocked by existing file")]
    Conflict { path: String },

    /// The same file path appears twice.
    #[error("duplicate manifest entry: '{path}'")]
    Duplicate { path: String },

    /// A path has an empty segment or is empty.
    #[error("invalid manifest path: '{path}'")]
    InvalidPath { path: String },
}
