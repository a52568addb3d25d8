//! Terminal chess
//!
//! Play against another person or a random-move AI. Every accepted move is
//! printed with a short explanation, and the move history is kept for the
//! session.

mod cli;
mod config;
mod render;
mod session;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::PlayConfig;
use session::{Command, Flow, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => PlayConfig::load(path)?,
        None => PlayConfig::default(),
    };
    cli.apply_overrides(&mut config);
    info!(mode = %config.mode, ai_level = %config.ai_level, "starting session");

    let mut session = Session::new(config, cli.fen.clone())?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.greet(&mut stdout)?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if session.execute(Command::parse(&line), &mut stdout)? == Flow::Quit {
            break;
        }
        prompt(&mut stdout)?;
    }

    info!(moves = session.history().len(), "session ended");
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Logs go to stderr so they never mix with the board on stdout.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}
