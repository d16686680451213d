//! Core logic for the terminal CV.
//!
//! This crate provides:
//! - [`VirtualFs`] built from the embedded résumé manifest
//! - [`VirtualPath`] navigation with the `~` root sentinel
//! - [`Command`] parsing and execution producing a [`CommandOutput`]
//! - [`Session`] owning the working directory and both histories
//! - [`autocomplete`] for Tab completion
//!
//! Nothing here touches the browser; the web front-end and the CLI both
//! drive a [`Session`].

mod autocomplete;
mod commands;
pub mod config;
pub mod error;
mod filesystem;
mod history;
mod path;
mod session;

pub use autocomplete::{AutocompleteResult, Candidate, autocomplete};
pub use commands::{Command, CommandOutput, CommandResult, ListEntry, PathArg, execute_command};
pub use error::{ManifestError, ShellError};
pub use filesystem::{DirectoryEntry, FileEntry, Manifest, Node, VirtualFs};
pub use history::{CommandHistory, Recall};
pub use path::VirtualPath;
pub use session::{HistoryEntry, Session};
