//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use crate::config::{HELP_TEXT, ROOT_SEGMENT, WHOAMI};
use crate::error::ShellError;
use crate::filesystem::{Node, VirtualFs};
use crate::path::VirtualPath;

use super::{Command, CommandOutput, CommandResult, ListEntry, PathArg};

/// Execute a parsed command.
///
/// Has no side effects: a new working directory or a cleared screen is
/// returned in the [`CommandResult`] for the caller to apply.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `fs` - Virtual filesystem
/// * `cwd` - Current working directory
pub fn execute_command(cmd: Command, fs: &VirtualFs, cwd: &VirtualPath) -> CommandResult {
    match cmd {
        Command::Help => CommandResult::text(HELP_TEXT),
        Command::Clear => CommandResult::clear(),
        Command::Ls(path) => execute_ls(path, fs, cwd),
        Command::Cat(file) => execute_cat(file, fs, cwd),
        Command::Cd(path) => execute_cd(path, fs, cwd),
        Command::Pwd => CommandResult::text(cwd.absolute()),
        Command::Whoami => CommandResult::text(WHOAMI),
    }
}

/// Children of the working directory.
///
/// A session path always names a directory; an empty filesystem still
/// has its root, so this only fails if the caller hands in a stale path.
fn current_dir<'a>(fs: &'a VirtualFs, cwd: &VirtualPath) -> &'a [(String, Node)] {
    fs.get(cwd).and_then(Node::children).unwrap_or_default()
}

/// Execute `ls` command.
fn execute_ls(path: Option<PathArg>, fs: &VirtualFs, cwd: &VirtualPath) -> CommandResult {
    let target = match &path {
        Some(path) => fs.resolve(cwd, path.as_str()),
        None => fs.get(cwd),
    };
    let shown = path.as_ref().map(PathArg::to_string).unwrap_or_default();

    match target.map(Node::children) {
        Some(Some(children)) => {
            let entries = children
                .iter()
                .map(|(name, node)| {
                    if node.is_directory() {
                        ListEntry::dir(name)
                    } else {
                        ListEntry::file(name)
                    }
                })
                .collect();
            CommandResult::output(CommandOutput::Listing(entries))
        }
        Some(None) => CommandResult::error(ShellError::NotADirectory {
            command: "ls",
            target: shown,
        }),
        None => CommandResult::error(ShellError::NotFound {
            command: "ls",
            target: shown,
        }),
    }
}

/// Execute `cat` command.
///
/// Only immediate children of the working directory are readable.
fn execute_cat(file: PathArg, fs: &VirtualFs, cwd: &VirtualPath) -> CommandResult {
    let entry = current_dir(fs, cwd)
        .iter()
        .find(|(name, _)| name == file.as_str())
        .map(|(_, node)| node);

    match entry {
        Some(Node::File { content }) => CommandResult::text(content.clone()),
        Some(Node::Directory { .. }) => CommandResult::error(ShellError::IsADirectory {
            target: file.to_string(),
        }),
        None => CommandResult::error(ShellError::NotFound {
            command: "cat",
            target: file.to_string(),
        }),
    }
}

/// Execute `cd` command.
///
/// `~` and `/` go home, `..` goes up one level; anything else must be an
/// immediate child directory of the working directory.
fn execute_cd(path: Option<PathArg>, fs: &VirtualFs, cwd: &VirtualPath) -> CommandResult {
    let Some(path) = path else {
        return CommandResult::navigate(VirtualPath::home());
    };

    match path.as_str() {
        ROOT_SEGMENT | "/" => return CommandResult::navigate(VirtualPath::home()),
        ".." => return CommandResult::navigate(cwd.parent()),
        _ => {}
    }

    let entry = current_dir(fs, cwd)
        .iter()
        .find(|(name, _)| name == path.as_str())
        .map(|(_, node)| node);

    match entry {
        Some(node) if node.is_directory() => CommandResult::navigate(cwd.join(path.as_str())),
        Some(_) => CommandResult::error(ShellError::NotADirectory {
            command: "cd",
            target: path.to_string(),
        }),
        None => CommandResult::error(ShellError::NotFound {
            command: "cd",
            target: path.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fs() -> VirtualFs {
        VirtualFs::embedded().expect("embedded manifest")
    }

    fn run(line: &str, cwd: &VirtualPath) -> CommandResult {
        let cmd = Command::parse_line(line)
            .expect("non-empty line")
            .expect("known command");
        execute_command(cmd, &fs(), cwd)
    }

    fn education() -> VirtualPath {
        VirtualPath::from_segments(["education"])
    }

    #[test]
    fn test_help() {
        let result = run("help", &VirtualPath::home());
        match result.output {
            CommandOutput::Text(text) => {
                assert!(text.starts_with("Available Commands:"));
                assert!(text.ends_with("pwd"));
            }
            other => panic!("Expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_clear() {
        let result = run("clear", &VirtualPath::home());
        assert!(result.clear_screen);
        assert_eq!(result.output, CommandOutput::Empty);
        assert!(result.navigate_to.is_none());
    }

    #[test]
    fn test_ls_root() {
        let result = run("ls", &VirtualPath::home());
        assert_eq!(
            result.output,
            CommandOutput::Listing(vec![
                ListEntry::file("about.txt"),
                ListEntry::dir("education"),
                ListEntry::file("skills.txt"),
                ListEntry::dir("publications"),
            ])
        );
        assert!(result.navigate_to.is_none());
    }

    #[test]
    fn test_ls_directory_argument() {
        let result = run("ls education", &VirtualPath::home());
        assert_eq!(
            result.output,
            CommandOutput::Listing(vec![
                ListEntry::file("phd.txt"),
                ListEntry::file("masters.txt"),
            ])
        );
    }

    #[test]
    fn test_ls_absolute_from_subdirectory() {
        let result = run("ls ~/publications", &education());
        assert_eq!(
            result.output,
            CommandOutput::Listing(vec![ListEntry::file("paper1.txt")])
        );
    }

    #[test]
    fn test_ls_file_is_not_a_directory() {
        let result = run("ls about.txt", &VirtualPath::home());
        assert_eq!(
            result.output,
            CommandOutput::Error(ShellError::NotADirectory {
                command: "ls",
                target: "about.txt".to_string(),
            })
        );
    }

    #[test]
    fn test_ls_nested_file_path() {
        let result = run("ls education/phd.txt", &VirtualPath::home());
        assert!(matches!(
            result.output,
            CommandOutput::Error(ShellError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_ls_missing() {
        let result = run("ls nowhere", &VirtualPath::home());
        assert_eq!(
            result.output,
            CommandOutput::Error(ShellError::NotFound {
                command: "ls",
                target: "nowhere".to_string(),
            })
        );
    }

    #[test]
    fn test_cat_file() {
        let result = run("cat phd.txt", &education());
        match result.output {
            CommandOutput::Text(text) => {
                assert!(text.starts_with("PhD in Computer Science (AI Focus)"));
            }
            other => panic!("Expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_cat_directory() {
        let result = run("cat education", &VirtualPath::home());
        assert_eq!(
            result.output,
            CommandOutput::Error(ShellError::IsADirectory {
                target: "education".to_string()
            })
        );
    }

    #[test]
    fn test_cat_only_reads_immediate_children() {
        let result = run("cat education/phd.txt", &VirtualPath::home());
        assert!(matches!(
            result.output,
            CommandOutput::Error(ShellError::NotFound { command: "cat", .. })
        ));
    }

    #[test]
    fn test_cd_child() {
        let result = run("cd education", &VirtualPath::home());
        assert_eq!(result.navigate_to, Some(education()));
        assert_eq!(result.output, CommandOutput::Empty);
    }

    #[test]
    fn test_cd_home_variants() {
        for line in ["cd", "cd ~", "cd /"] {
            let result = run(line, &education());
            assert_eq!(result.navigate_to, Some(VirtualPath::home()), "{}", line);
        }
    }

    #[test]
    fn test_cd_parent() {
        assert_eq!(
            run("cd ..", &education()).navigate_to,
            Some(VirtualPath::home())
        );
        assert_eq!(
            run("cd ..", &VirtualPath::home()).navigate_to,
            Some(VirtualPath::home())
        );
    }

    #[test]
    fn test_cd_errors() {
        assert_eq!(
            run("cd about.txt", &VirtualPath::home()).output,
            CommandOutput::Error(ShellError::NotADirectory {
                command: "cd",
                target: "about.txt".to_string(),
            })
        );
        let missing = run("cd phd.txt", &VirtualPath::home());
        assert!(missing.navigate_to.is_none());
        assert!(missing.output.is_error());
    }

    #[test]
    fn test_pwd_and_whoami() {
        assert_eq!(
            run("pwd", &education()).output,
            CommandOutput::Text("/~/education".to_string())
        );
        assert_eq!(
            run("whoami", &education()).output,
            CommandOutput::Text("visitor - Guest User".to_string())
        );
    }
}
