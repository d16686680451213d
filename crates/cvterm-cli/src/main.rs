mod cli;
mod color;
mod render;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use cvterm_core::config::{PROMPT_SYMBOL, WELCOME_BANNER};
use cvterm_core::{Session, VirtualFs};

use cli::Cli;
use color::{ColorMode, Palette};
use render::{CLEAR_SCREEN, render};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(&cli);
    debug!("Parsed CLI arguments: {cli:?}");

    let palette = Palette::new(ColorMode::resolve(cli.color));
    let fs = VirtualFs::embedded().context("failed to load the embedded CV")?;
    let mut session = Session::new(Arc::new(fs));
    let mut out = io::stdout().lock();

    if cli.commands.is_empty() {
        run_interactive(&mut session, palette, &mut out)
    } else {
        for line in &cli.commands {
            run_line(&mut session, line, palette, &mut out)?;
        }
        Ok(())
    }
}

fn setup_tracing(cli: &Cli) {
    if let Some(level) = cli.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

/// Read lines from stdin until EOF.
fn run_interactive(session: &mut Session, palette: Palette, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", palette.banner(WELCOME_BANNER))?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(
            out,
            "{} {} ",
            palette.prompt(&session.prompt()),
            PROMPT_SYMBOL
        )?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line.context("failed to read from stdin")?;
        run_line(session, &line, palette, out)?;
    }
}

fn run_line(
    session: &mut Session,
    line: &str,
    palette: Palette,
    out: &mut impl Write,
) -> Result<()> {
    let Some(result) = session.submit(line) else {
        return Ok(());
    };

    if result.clear_screen {
        write!(out, "{}", CLEAR_SCREEN)?;
    }
    if result.output.is_error() {
        warn!(line, "command failed");
    }
    for rendered in render(&result.output, palette) {
        writeln!(out, "{}", rendered)?;
    }
    Ok(())
}
