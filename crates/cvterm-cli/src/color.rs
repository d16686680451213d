use std::env;

use owo_colors::OwoColorize;

/// Color mode for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Color when stdout is a color-capable terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve color mode from the CLI flag and environment.
    ///
    /// Priority: `--color`, then `NO_COLOR`, then `TERM=dumb`, then `Auto`.
    #[must_use]
    pub fn resolve(cli_mode: Option<Self>) -> Self {
        if let Some(mode) = cli_mode {
            return mode;
        }
        if env::var_os("NO_COLOR").is_some() {
            return Self::Never;
        }
        if env::var("TERM").is_ok_and(|term| term == "dumb") {
            return Self::Never;
        }
        Self::Auto
    }

    #[must_use]
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Auto => supports_color::on_cached(supports_color::Stream::Stdout).is_some(),
            Self::Never => false,
        }
    }
}

/// Styles for the pieces of a transcript.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: mode.should_colorize(),
        }
    }

    pub fn directory(self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold().to_string())
    }

    pub fn error(self, text: &str) -> String {
        self.paint(text, |t| t.red().to_string())
    }

    pub fn prompt(self, text: &str) -> String {
        self.paint(text, |t| t.purple().to_string())
    }

    pub fn banner(self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    fn paint(self, text: &str, style: impl Fn(&str) -> String) -> String {
        if self.enabled {
            style(text)
        } else {
            text.to_string()
        }
    }
}
