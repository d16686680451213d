//! Text rendering of command output.

use cvterm_core::CommandOutput;

use crate::color::Palette;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Lines printed for one command output.
pub fn render(output: &CommandOutput, palette: Palette) -> Vec<String> {
    match output {
        CommandOutput::Text(text) => text.lines().map(str::to_string).collect(),
        CommandOutput::Listing(entries) => entries
            .iter()
            .map(|entry| {
                if entry.is_dir {
                    palette.directory(&format!("{}/", entry.name))
                } else {
                    entry.name.clone()
                }
            })
            .collect(),
        CommandOutput::Error(err) => vec![palette.error(&err.to_string())],
        CommandOutput::Empty => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorMode;
    use cvterm_core::{ListEntry, ShellError};

    fn plain() -> Palette {
        Palette::new(ColorMode::Never)
    }

    #[test]
    fn test_render_listing_marks_directories() {
        let output = CommandOutput::Listing(vec![
            ListEntry::file("about.txt"),
            ListEntry::dir("education"),
        ]);
        assert_eq!(render(&output, plain()), ["about.txt", "education/"]);
    }

    #[test]
    fn test_render_text_splits_lines() {
        let output = CommandOutput::Text("a\nb".into());
        assert_eq!(render(&output, plain()), ["a", "b"]);
    }

    #[test]
    fn test_render_error_and_empty() {
        let output = CommandOutput::Error(ShellError::UnknownCommand("x".into()));
        assert_eq!(render(&output, plain()), ["Command not found: x"]);
        assert!(render(&CommandOutput::Empty, plain()).is_empty());
    }
}
