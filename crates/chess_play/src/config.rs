//! Session settings, loaded from TOML

use std::fmt;
use std::path::Path;

use anyhow::Context;
use chess_core::{AiLevel, GameConfig};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Who plays the moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Both sides typed in by people
    HumanVsHuman,
    /// The AI can be asked to move for either side
    #[default]
    HumanVsAi,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::HumanVsHuman => write!(f, "Human vs Human"),
            Mode::HumanVsAi => write!(f, "Human vs AI"),
        }
    }
}

/// Settings for a play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub mode: Mode,
    pub ai_level: AiLevel,
    /// In human-vs-ai mode, answer every accepted human move automatically
    pub auto_reply: bool,
    /// Print the legal moves after each turn
    pub show_legal_moves: bool,
    /// Draw the board from Black's side
    pub flipped: bool,
    pub game: GameConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: Mode::HumanVsAi,
            ai_level: AiLevel::Random,
            auto_reply: false,
            show_legal_moves: true,
            flipped: false,
            game: GameConfig::default(),
        }
    }
}

impl PlayConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(PlayConfig::from_toml("").unwrap(), PlayConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config = PlayConfig::from_toml(
            r#"
            mode = "human-vs-human"
            ai_level = "random"
            auto_reply = true
            show_legal_moves = false
            flipped = true

            [game]
            fifty_move_rule = false
            repetition_limit = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.mode, Mode::HumanVsHuman);
        assert!(config.auto_reply);
        assert!(!config.show_legal_moves);
        assert!(config.flipped);
        assert!(!config.game.fifty_move_rule);
        assert_eq!(config.game.repetition_limit, 5);
    }

    #[test]
    fn test_partial_game_table_keeps_other_defaults() {
        let config = PlayConfig::from_toml("[game]\nrepetition_limit = 0\n").unwrap();
        assert_eq!(config.game.repetition_limit, 0);
        assert!(config.game.fifty_move_rule);
        assert_eq!(config.mode, Mode::HumanVsAi);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        assert!(PlayConfig::from_toml("ai_level = \"grandmaster\"").is_err());
    }
}
