//! Interactive session state.

use std::sync::Arc;

use tracing::debug;

use crate::autocomplete::{AutocompleteResult, autocomplete};
use crate::commands::{Command, CommandOutput, CommandResult, execute_command};
use crate::filesystem::VirtualFs;
use crate::history::{CommandHistory, Recall};
use crate::path::VirtualPath;

/// One submitted line as it appears in the output history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Unique ID for keyed rendering
    pub id: usize,
    /// Prompt path at the time of submission (e.g. `~/education`)
    pub prompt: String,
    /// The trimmed input line
    pub input: String,
    pub output: CommandOutput,
}

/// Everything one terminal owns: working directory, displayed entries,
/// and the recall history.
///
/// The filesystem is shared and never mutated. All state changes go through
/// [`Session::submit`], [`Session::recall_previous`] and
/// [`Session::recall_next`].
#[derive(Clone, Debug)]
pub struct Session {
    fs: Arc<VirtualFs>,
    cwd: VirtualPath,
    entries: Vec<HistoryEntry>,
    history: CommandHistory,
    next_id: usize,
}

impl Session {
    /// Fresh session at the home directory.
    pub fn new(fs: Arc<VirtualFs>) -> Self {
        Self {
            fs,
            cwd: VirtualPath::home(),
            entries: Vec::new(),
            history: CommandHistory::new(),
            next_id: 0,
        }
    }

    /// Current working directory.
    pub fn cwd(&self) -> &VirtualPath {
        &self.cwd
    }

    /// Prompt path for the next line.
    pub fn prompt(&self) -> String {
        self.cwd.display()
    }

    /// Displayed entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Submitted lines (survives `clear`).
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Run one input line.
    ///
    /// Blank lines are ignored and return `None`. Otherwise the line is
    /// recorded for recall, executed, its state change applied, and an entry
    /// appended to the display. `clear` empties the display first, so its
    /// own line is the only entry left.
    pub fn submit(&mut self, line: &str) -> Option<CommandResult> {
        let input = line.trim();
        let parsed = Command::parse_line(input)?;
        self.history.push(input);

        let prompt = self.prompt();
        let result = match parsed {
            Ok(cmd) => {
                debug!(command = cmd.name(), cwd = %self.cwd, "dispatch");
                execute_command(cmd, &self.fs, &self.cwd)
            }
            Err(err) => {
                debug!(%err, "rejected");
                CommandResult::error(err)
            }
        };

        if let Some(path) = &result.navigate_to {
            self.cwd = path.clone();
        }

        if result.clear_screen {
            self.entries.clear();
        }
        self.entries.push(HistoryEntry {
            id: self.next_id,
            prompt,
            input: input.to_string(),
            output: result.output.clone(),
        });
        self.next_id += 1;

        Some(result)
    }

    /// ArrowUp.
    pub fn recall_previous(&mut self) -> Recall {
        self.history.previous()
    }

    /// ArrowDown.
    pub fn recall_next(&mut self) -> Recall {
        self.history.next()
    }

    /// Tab.
    pub fn complete(&self, input: &str) -> AutocompleteResult {
        autocomplete(input, &self.fs, &self.cwd)
    }
}
