//! Chess game-state controller
//!
//! Owns a game's position, validates and applies moves typed in UCI
//! notation, detects finished games, lets a simple AI move, and explains
//! every move in a short sentence. Chess rules come from `cozy-chess`
//! behind the [`RulesEngine`] trait.

pub mod board;
pub mod controller;
pub mod engine;
pub mod error;
pub mod explain;
pub mod outcome;
pub mod random;
pub mod rules;
pub mod types;
pub mod uci;

pub use board::Position;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use explain::{explain, CheckState, Motif, MoveFacts};
pub use outcome::*;
pub use random::RandomMover;
pub use rules::RulesEngine;
pub use types::*;
pub use uci::UciMove;
