//! Game-state controller: the single owner and mutator of a game's board

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Position;
use crate::engine::{AiLevel, MoveSelector};
use crate::error::GameError;
use crate::explain::{explain, CheckState};
use crate::outcome::{Outcome, Termination};
use crate::random::RandomMover;
use crate::rules::RulesEngine;
use crate::uci::UciMove;

/// Draw rules applied on top of checkmate, stalemate and insufficient material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// End the game once 100 half-moves pass without a capture or pawn move.
    pub fifty_move_rule: bool,
    /// End the game when a position occurs this many times; 0 disables.
    pub repetition_limit: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fifty_move_rule: true,
            repetition_limit: 3,
        }
    }
}

/// A move the controller accepted, with its explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    /// The move in UCI notation
    pub uci: String,
    pub explanation: String,
}

/// Owns one game's position and is the only thing that changes it.
///
/// Front ends keep one controller per game session, call
/// [`push_move`](Self::push_move) / [`ai_move`](Self::ai_move) in response to
/// the player, and read [`legal_moves`](Self::legal_moves),
/// [`is_game_over`](Self::is_game_over) and [`result`](Self::result) to
/// render. Once a game ends its outcome is fixed and further moves are
/// refused. Restarting a game means building a new controller.
#[derive(Debug, Clone)]
pub struct GameController<R: RulesEngine = Position> {
    board: R,
    config: GameConfig,
    /// Position keys since the game started, current position last
    position_history: Vec<u64>,
    /// Set when the game first reaches a terminal state, never cleared
    outcome: Option<Outcome>,
}

impl GameController<Position> {
    /// New game from the standard starting position.
    pub fn new() -> Self {
        Self::with_board(Position::startpos(), GameConfig::default())
    }

    pub fn from_fen(fen: &str, config: GameConfig) -> Result<Self, GameError> {
        Ok(Self::with_board(Position::from_fen(fen)?, config))
    }
}

impl Default for GameController<Position> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RulesEngine> GameController<R> {
    pub fn with_board(board: R, config: GameConfig) -> Self {
        let position_history = vec![board.position_key()];
        let mut game = Self {
            board,
            config,
            position_history,
            outcome: None,
        };
        game.outcome = game.detect_outcome();
        game
    }

    /// The current position, read-only.
    pub fn board(&self) -> &R {
        &self.board
    }

    pub fn move_number(&self) -> u32 {
        self.board.fullmove_number()
    }

    /// Every legal move in UCI notation, in the rules engine's order.
    pub fn legal_moves(&self) -> Vec<String> {
        self.board
            .legal_moves()
            .into_iter()
            .map(|mv| self.board.to_uci(mv).to_string())
            .collect()
    }

    /// Play a move typed by a player.
    ///
    /// The text is trimmed, parsed as UCI and matched against the legal
    /// moves. Unparseable text and illegal moves are reported as distinct
    /// errors, and in both cases the position is left untouched. A finished
    /// game refuses every move with [`GameError::GameOver`].
    pub fn push_move(&mut self, text: &str) -> Result<PlayedMove, GameError> {
        self.ensure_in_progress()?;
        let text = text.trim();
        let wanted: UciMove = text.parse().map_err(|source| {
            debug!(input = text, %source, "rejected unparseable move");
            GameError::Parse {
                text: text.to_string(),
                source,
            }
        })?;

        let Some(mv) = self.resolve(&wanted) else {
            debug!(uci = %wanted, "rejected illegal move");
            return Err(GameError::IllegalMove {
                uci: wanted.to_string(),
            });
        };

        self.apply(mv)
    }

    /// Let the built-in AI at `level` play for the side to move.
    pub fn ai_move(&mut self, level: AiLevel) -> Result<PlayedMove, GameError> {
        match level {
            AiLevel::Random => self.ai_move_with(&mut RandomMover::new()),
        }
    }

    /// Let any [`MoveSelector`] play for the side to move.
    ///
    /// Fails with [`GameError::NoLegalMoves`] if the side to move has no
    /// legal moves and with [`GameError::GameOver`] once a draw rule has
    /// ended the game. A selector returning a move outside the legal set is
    /// rejected like an illegal player move.
    pub fn ai_move_with<S>(&mut self, selector: &mut S) -> Result<PlayedMove, GameError>
    where
        S: MoveSelector<R> + ?Sized,
    {
        let legal = self.board.legal_moves();
        if legal.is_empty() {
            return Err(GameError::NoLegalMoves);
        }
        self.ensure_in_progress()?;

        let mv = selector
            .select_move(&self.board)
            .ok_or(GameError::NoLegalMoves)?;
        if !legal.contains(&mv) {
            return Err(GameError::IllegalMove {
                uci: self.board.to_uci(mv).to_string(),
            });
        }

        debug!(selector = selector.name(), "AI chose a move");
        self.apply(mv)
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// How the game ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Result of a finished game; [`GameError::GameInProgress`] otherwise.
    pub fn result(&self) -> Result<Outcome, GameError> {
        self.outcome.ok_or(GameError::GameInProgress)
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.outcome {
            Some(outcome) => Err(GameError::GameOver(outcome)),
            None => Ok(()),
        }
    }

    /// Terminal state of the current position, checked in priority order.
    fn detect_outcome(&self) -> Option<Outcome> {
        if self.board.legal_moves().is_empty() {
            return Some(if self.board.in_check() {
                Outcome::checkmate(self.board.side_to_move())
            } else {
                Outcome::draw(Termination::Stalemate)
            });
        }

        if self.board.is_insufficient_material() {
            return Some(Outcome::draw(Termination::InsufficientMaterial));
        }

        if self.config.fifty_move_rule && self.board.halfmove_clock() >= 100 {
            return Some(Outcome::draw(Termination::FiftyMoveRule));
        }

        if self.is_repetition() {
            return Some(Outcome::draw(Termination::Repetition));
        }

        None
    }

    fn is_repetition(&self) -> bool {
        let limit = self.config.repetition_limit as usize;
        if limit == 0 {
            return false;
        }
        let current = self.board.position_key();
        let count = self
            .position_history
            .iter()
            .filter(|&&key| key == current)
            .count();
        count >= limit
    }

    fn resolve(&self, wanted: &UciMove) -> Option<R::Move> {
        self.board
            .legal_moves()
            .into_iter()
            .find(|&mv| self.board.to_uci(mv) == *wanted)
    }

    /// Apply a move known to be legal and describe it.
    fn apply(&mut self, mv: R::Move) -> Result<PlayedMove, GameError> {
        let uci = self.board.to_uci(mv).to_string();
        let facts = self
            .board
            .inspect(mv)
            .ok_or_else(|| GameError::IllegalMove { uci: uci.clone() })?;

        self.board.play(mv);
        self.position_history.push(self.board.position_key());

        let check = if !self.board.in_check() {
            CheckState::None
        } else if self.board.legal_moves().is_empty() {
            CheckState::Checkmate
        } else {
            CheckState::Check
        };
        let explanation = explain(&facts, check);
        debug!(%uci, %explanation, "move applied");

        self.outcome = self.detect_outcome();
        if let Some(outcome) = self.outcome {
            info!(%outcome, "game over");
        }

        Ok(PlayedMove { uci, explanation })
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
