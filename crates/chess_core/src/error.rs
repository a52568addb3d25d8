//! Error types for move input and game progression

use thiserror::Error;

use crate::outcome::Outcome;

/// Why a piece of text is not UCI move notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UciParseError {
    #[error("expected 4 or 5 characters, got {0}")]
    Length(usize),

    #[error("'{0}' is not a square")]
    Square(String),

    #[error("'{0}' is not a promotion piece, use q, r, b or n")]
    Promotion(char),

    #[error("a move must leave its starting square")]
    NullMove,
}

/// Errors reported by [`GameController`](crate::GameController).
///
/// None of these leave the game in a modified state. The `Display` text is
/// meant to be shown to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The text could not be read as a move at all.
    #[error("Could not understand '{text}' as a move ({source}). Use UCI notation such as e2e4 or e7e8q.")]
    Parse {
        text: String,
        source: UciParseError,
    },

    /// Well-formed move that the current position does not allow.
    #[error("{uci} is not a legal move in this position.")]
    IllegalMove { uci: String },

    #[error("There are no legal moves left to choose from.")]
    NoLegalMoves,

    #[error("The game is still in progress, there is no result yet.")]
    GameInProgress,

    /// The game has ended and accepts no more moves.
    #[error("The game is over: {0}. Start a new game to keep playing.")]
    GameOver(Outcome),

    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("unknown AI level '{0}', available: random")]
    UnknownLevel(String),
}
