//! Finished-game results

use std::fmt;

use crate::types::Color;

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
    Repetition,
}

impl Termination {
    fn describe(self) -> &'static str {
        match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::InsufficientMaterial => "insufficient material",
            Termination::FiftyMoveRule => "the fifty-move rule",
            Termination::Repetition => "repetition",
        }
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// `None` for a draw
    pub winner: Option<Color>,
    pub termination: Termination,
}

impl Outcome {
    pub fn checkmate(loser: Color) -> Self {
        Self {
            winner: Some(loser.other()),
            termination: Termination::Checkmate,
        }
    }

    pub fn draw(termination: Termination) -> Self {
        Self {
            winner: None,
            termination,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// PGN score string
    pub fn score(&self) -> &'static str {
        match self.winner {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(color) => write!(
                f,
                "{color} wins by {} ({})",
                self.termination.describe(),
                self.score()
            ),
            None => write!(
                f,
                "Draw by {} ({})",
                self.termination.describe(),
                self.score()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(
            Outcome::checkmate(Color::White).to_string(),
            "Black wins by checkmate (0-1)"
        );
        assert_eq!(
            Outcome::draw(Termination::Stalemate).to_string(),
            "Draw by stalemate (1/2-1/2)"
        );
        assert!(Outcome::draw(Termination::Repetition).is_draw());
    }
}
