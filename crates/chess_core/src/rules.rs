//! The seam between the game controller and a chess rules implementation

use std::fmt::Debug;

use crate::explain::MoveFacts;
use crate::types::Color;
use crate::uci::UciMove;

/// Everything the controller needs from a rules implementation.
///
/// [`Position`](crate::Position) is the production implementation; tests
/// can substitute a scripted position to exercise the controller alone.
pub trait RulesEngine: Clone {
    /// The implementation's native move type.
    type Move: Copy + PartialEq + Debug;

    /// Every legal move, in the implementation's generation order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Standard UCI form of a move legal in this position.
    fn to_uci(&self, mv: Self::Move) -> UciMove;

    /// Facts about a legal move, read before it is played.
    /// Returns `None` if the move does not fit the position.
    fn inspect(&self, mv: Self::Move) -> Option<MoveFacts>;

    /// Apply a move taken from [`legal_moves`](Self::legal_moves).
    fn play(&mut self, mv: Self::Move);

    fn side_to_move(&self) -> Color;

    /// Whether the side to move is in check.
    fn in_check(&self) -> bool;

    fn halfmove_clock(&self) -> u32;

    fn fullmove_number(&self) -> u32;

    fn is_insufficient_material(&self) -> bool;

    /// Identifies the position for repetition counting: piece placement,
    /// side to move, castling rights and en-passant square.
    fn position_key(&self) -> u64;
}
