//! Random move selection
//!
//! Picks moves uniformly at random from all legal moves. It is the baseline
//! opponent: any real strategy should easily beat it.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::engine::MoveSelector;
use crate::rules::RulesEngine;

/// Plays a uniformly random legal move.
///
/// The default generator is the thread-local, OS-seeded `ThreadRng`, so
/// successive games are not replayable. Inject a seeded generator with
/// [`RandomMover::with_rng`] when reproducibility matters.
#[derive(Debug, Clone)]
pub struct RandomMover<G = ThreadRng> {
    rng: G,
}

impl RandomMover {
    pub fn new() -> Self {
        Self { rng: thread_rng() }
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Rng> RandomMover<G> {
    pub fn with_rng(rng: G) -> Self {
        Self { rng }
    }
}

impl<R: RulesEngine, G: Rng> MoveSelector<R> for RandomMover<G> {
    fn select_move(&mut self, pos: &R) -> Option<R::Move> {
        pos.legal_moves().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod random_tests;
