//! Tab completion for command names and their arguments.
//!
//! - Command names: `"l"` -> `"ls "`, `"c"` -> candidates `cat`, `cd`, `clear`
//! - `cd` / `ls` arguments: directories of the working directory
//! - `cat` arguments: files of the working directory
//!
//! A single match fills the input; several matches are returned as
//! candidates and the input is left as typed.

use crate::commands::Command;
use crate::config::SEPARATOR;
use crate::filesystem::{Node, VirtualFs};
use crate::path::VirtualPath;

// ============================================================================
// Public Types
// ============================================================================

/// A completion offered when several entries match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Text shown in the suggestion list (`education/` for directories).
    pub label: String,
    /// Full input line when this candidate is picked.
    pub completion: String,
}

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Single match - replace the input with this value.
    Single(String),
    /// Multiple matches - show them without touching the input.
    Multiple(Vec<Candidate>),
    /// No matches found.
    None,
}

impl AutocompleteResult {
    /// Labels of the candidates, empty unless `Multiple`.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::Multiple(candidates) => candidates.iter().map(|c| c.label.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

// ============================================================================
// Completion Context
// ============================================================================

/// Determines what kind of completion an input needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompletionMode {
    /// Complete command names.
    Command,
    /// Directories, with nested paths allowed (`ls`).
    DirectoryPath,
    /// Immediate child directories (`cd`).
    ChildDirectory,
    /// Immediate child files (`cat`).
    ChildFile,
    /// No completion available.
    None,
}

impl CompletionMode {
    fn from_command(name: &str) -> Self {
        match name {
            "ls" => Self::DirectoryPath,
            "cd" => Self::ChildDirectory,
            "cat" => Self::ChildFile,
            _ => Self::None,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
pub fn autocomplete(input: &str, fs: &VirtualFs, cwd: &VirtualPath) -> AutocompleteResult {
    let input = input.trim_start();

    let Some((cmd, partial)) = input.split_once(' ') else {
        return complete_command(input);
    };

    let partial = partial.trim_start();
    match CompletionMode::from_command(cmd) {
        CompletionMode::DirectoryPath => complete_path(cmd, partial, fs, cwd),
        mode @ (CompletionMode::ChildDirectory | CompletionMode::ChildFile) => {
            complete_child(cmd, partial, fs, cwd, mode)
        }
        CompletionMode::Command | CompletionMode::None => AutocompleteResult::None,
    }
}

// ============================================================================
// Command Completion
// ============================================================================

fn complete_command(partial: &str) -> AutocompleteResult {
    let matches: Vec<&str> = Command::names()
        .iter()
        .copied()
        .filter(|name| name.starts_with(partial))
        .collect();

    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [only] => AutocompleteResult::Single(format!("{} ", only)),
        _ => AutocompleteResult::Multiple(
            matches
                .iter()
                .map(|name| Candidate {
                    label: name.to_string(),
                    completion: format!("{} ", name),
                })
                .collect(),
        ),
    }
}

// ============================================================================
// Argument Completion
// ============================================================================

/// Complete an immediate child of the working directory (`cd`, `cat`).
fn complete_child(
    cmd: &str,
    partial: &str,
    fs: &VirtualFs,
    cwd: &VirtualPath,
    mode: CompletionMode,
) -> AutocompleteResult {
    if partial.contains(SEPARATOR) {
        return AutocompleteResult::None;
    }
    let Some(dir) = fs.get(cwd) else {
        return AutocompleteResult::None;
    };

    let want_dirs = mode == CompletionMode::ChildDirectory;
    build_result(matching_entries(dir, partial, want_dirs), |name, _| {
        format!("{} {} ", cmd, name)
    })
}

/// Complete a directory path relative to the working directory (`ls`).
fn complete_path(cmd: &str, partial: &str, fs: &VirtualFs, cwd: &VirtualPath) -> AutocompleteResult {
    let (dir_part, name_part) = match partial.rfind(SEPARATOR) {
        Some(idx) => (&partial[..=idx], &partial[idx + 1..]),
        None => ("", partial),
    };

    let search_dir = if dir_part.is_empty() {
        fs.get(cwd)
    } else {
        fs.resolve(cwd, dir_part)
    };
    let Some(dir) = search_dir else {
        return AutocompleteResult::None;
    };

    build_result(matching_entries(dir, name_part, true), |name, _| {
        format!("{} {}{}{}", cmd, dir_part, name, SEPARATOR)
    })
}

/// Children of `dir` whose names start with `prefix`, directories when
/// `want_dirs` is set and files otherwise.
fn matching_entries<'a>(dir: &'a Node, prefix: &str, want_dirs: bool) -> Vec<(&'a str, bool)> {
    dir.children()
        .unwrap_or_default()
        .iter()
        .filter(|(name, node)| name.starts_with(prefix) && node.is_directory() == want_dirs)
        .map(|(name, node)| (name.as_str(), node.is_directory()))
        .collect()
}

fn build_result(
    matches: Vec<(&str, bool)>,
    complete: impl Fn(&str, bool) -> String,
) -> AutocompleteResult {
    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [(name, is_dir)] => AutocompleteResult::Single(complete(name, *is_dir)),
        _ => AutocompleteResult::Multiple(
            matches
                .iter()
                .map(|(name, is_dir)| Candidate {
                    label: if *is_dir {
                        format!("{}{}", name, SEPARATOR)
                    } else {
                        name.to_string()
                    },
                    completion: complete(name, *is_dir),
                })
                .collect(),
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fs() -> VirtualFs {
        VirtualFs::parse(
            r#"
            [[files]]
            path = "about.txt"
            content = ""

            [[files]]
            path = "archive.txt"
            content = ""

            [[files]]
            path = "education/phd.txt"
            content = ""

            [[files]]
            path = "education/masters.txt"
            content = ""

            [[directories]]
            path = "events"

            [[directories]]
            path = "events/2023"
            "#,
        )
        .unwrap()
    }

    fn complete(input: &str) -> AutocompleteResult {
        autocomplete(input, &fs(), &VirtualPath::home())
    }

    #[test]
    fn test_command_completion_single() {
        assert_eq!(complete("l"), AutocompleteResult::Single("ls ".into()));
        assert_eq!(complete("cle"), AutocompleteResult::Single("clear ".into()));
        assert_eq!(complete("who"), AutocompleteResult::Single("whoami ".into()));
    }

    #[test]
    fn test_command_completion_multiple() {
        let result = complete("c");
        assert_eq!(result.labels(), ["cat", "cd", "clear"]);
        match result {
            AutocompleteResult::Multiple(candidates) => {
                assert_eq!(candidates[1].completion, "cd ");
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_command_completion_empty_input_lists_all() {
        assert_eq!(complete("").labels(), Command::names());
    }

    #[test]
    fn test_no_match() {
        assert_eq!(complete("xyz"), AutocompleteResult::None);
        assert_eq!(complete("L"), AutocompleteResult::None);
    }

    #[test]
    fn test_exact_name_still_fills_separator() {
        assert_eq!(complete("pwd"), AutocompleteResult::Single("pwd ".into()));
    }

    #[test]
    fn test_cd_completes_directories_only() {
        assert_eq!(
            complete("cd ed"),
            AutocompleteResult::Single("cd education ".into())
        );
        assert_eq!(complete("cd a"), AutocompleteResult::None);
        assert_eq!(complete("cd e").labels(), ["education/", "events/"]);
    }

    #[test]
    fn test_cat_completes_entries() {
        assert_eq!(complete("cat a").labels(), ["about.txt", "archive.txt"]);
        assert_eq!(
            complete("cat ab"),
            AutocompleteResult::Single("cat about.txt ".into())
        );
    }

    #[test]
    fn test_cat_skips_directories() {
        assert_eq!(complete("cat ed"), AutocompleteResult::None);
        assert_eq!(complete("cat e"), AutocompleteResult::None);
    }

    #[test]
    fn test_cat_does_not_descend() {
        assert_eq!(complete("cat education/p"), AutocompleteResult::None);
    }

    #[test]
    fn test_ls_completes_nested_paths() {
        assert_eq!(
            complete("ls events/2"),
            AutocompleteResult::Single("ls events/2023/".into())
        );
        assert_eq!(complete("ls education/"), AutocompleteResult::None);
    }

    #[test]
    fn test_arguments_of_other_commands() {
        assert_eq!(complete("pwd x"), AutocompleteResult::None);
    }

    #[test]
    fn test_relative_to_working_directory() {
        let result = autocomplete("cat p", &fs(), &VirtualPath::from_segments(["education"]));
        assert_eq!(result, AutocompleteResult::Single("cat phd.txt ".into()));
    }
}
