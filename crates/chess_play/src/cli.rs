//! Command-line interface for chess_play.

use std::path::PathBuf;

use chess_core::AiLevel;
use clap::{ArgAction, Parser};

use crate::config::{Mode, PlayConfig};

/// Play chess in the terminal, with a short explanation of every move
#[derive(Parser, Debug)]
#[command(name = "chess_play")]
#[command(version)]
pub struct Cli {
    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who plays the moves
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Strength of the AI opponent
    #[arg(long)]
    pub ai_level: Option<AiLevel>,

    /// Let the AI answer every accepted human move
    #[arg(long)]
    pub auto_reply: bool,

    /// Draw the board from Black's side
    #[arg(long)]
    pub flipped: bool,

    /// Start (and restart) from this position instead of the initial one
    #[arg(long)]
    pub fen: Option<String>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flags given on the command line win over the settings file.
    pub fn apply_overrides(&self, config: &mut PlayConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(level) = self.ai_level {
            config.ai_level = level;
        }
        if self.auto_reply {
            config.auto_reply = true;
        }
        if self.flipped {
            config.flipped = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file() {
        let cli = Cli::parse_from([
            "chess_play",
            "--mode",
            "human-vs-human",
            "--auto-reply",
            "-vv",
        ]);
        let mut config = PlayConfig::default();

        cli.apply_overrides(&mut config);

        assert_eq!(config.mode, Mode::HumanVsHuman);
        assert!(config.auto_reply);
        assert!(!config.flipped);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_ai_level_flag() {
        let cli = Cli::parse_from(["chess_play", "--ai-level", "random"]);
        assert_eq!(cli.ai_level, Some(AiLevel::Random));
        assert!(Cli::try_parse_from(["chess_play", "--ai-level", "perfect"]).is_err());
    }
}
