//! Command recall for ArrowUp / ArrowDown.

/// What the input field should show after a recall request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recall {
    /// Replace the input with this earlier line.
    Line(String),
    /// Empty the input (stepped past the newest line).
    Blank,
    /// Leave the input alone.
    Unchanged,
}

/// Append-only list of submitted lines with a recall cursor.
///
/// The cursor stays within `[0, len]`; `len` means "not recalling".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandHistory {
    lines: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and park the cursor after it.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        self.cursor = self.lines.len();
    }

    /// Step back (ArrowUp). A no-op at the oldest line.
    pub fn previous(&mut self) -> Recall {
        if self.cursor == 0 {
            return Recall::Unchanged;
        }
        self.cursor -= 1;
        Recall::Line(self.lines[self.cursor].clone())
    }

    /// Step forward (ArrowDown). Past the newest line the input is cleared.
    pub fn next(&mut self) -> Recall {
        if self.cursor + 1 < self.lines.len() {
            self.cursor += 1;
            Recall::Line(self.lines[self.cursor].clone())
        } else {
            self.cursor = self.lines.len();
            Recall::Blank
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(lines: &[&str]) -> CommandHistory {
        let mut h = CommandHistory::new();
        for line in lines {
            h.push(*line);
        }
        h
    }

    #[test]
    fn test_previous_walks_back_then_stops() {
        let mut h = history(&["pwd", "whoami"]);
        assert_eq!(h.previous(), Recall::Line("whoami".into()));
        assert_eq!(h.previous(), Recall::Line("pwd".into()));
        assert_eq!(h.previous(), Recall::Unchanged);
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn test_next_walks_forward_then_blanks() {
        let mut h = history(&["a", "b", "c"]);
        h.previous();
        h.previous();
        h.previous();
        assert_eq!(h.next(), Recall::Line("b".into()));
        assert_eq!(h.next(), Recall::Line("c".into()));
        assert_eq!(h.next(), Recall::Blank);
        assert_eq!(h.cursor(), 3);
        assert_eq!(h.next(), Recall::Blank);
        assert_eq!(h.cursor(), 3);
    }

    #[test]
    fn test_empty_history() {
        let mut h = CommandHistory::new();
        assert_eq!(h.previous(), Recall::Unchanged);
        assert_eq!(h.next(), Recall::Blank);
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn test_push_resets_cursor() {
        let mut h = history(&["a", "b"]);
        h.previous();
        h.previous();
        h.push("c");
        assert_eq!(h.cursor(), 3);
        assert_eq!(h.previous(), Recall::Line("c".into()));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let h = history(&["ls", "ls"]);
        assert_eq!(h.len(), 2);
    }
}
