//! AI move selection
//!
//! Strategies implement [`MoveSelector`]; [`AiLevel`] names the ones a
//! front end can offer. Only uniform random play exists today, but stronger
//! selectors plug in behind the same trait without touching the controller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::rules::RulesEngine;

/// Trait that all move-choosing strategies implement.
pub trait MoveSelector<R: RulesEngine> {
    /// Choose one of the legal moves of `pos`, or `None` if there are none.
    fn select_move(&mut self, pos: &R) -> Option<R::Move>;

    /// Returns the strategy's display name
    fn name(&self) -> &str;
}

/// Built-in AI strengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiLevel {
    /// Uniformly random legal move
    #[default]
    Random,
}

impl AiLevel {
    pub const ALL: [AiLevel; 1] = [AiLevel::Random];

    pub fn as_str(self) -> &'static str {
        match self {
            AiLevel::Random => "random",
        }
    }
}

impl fmt::Display for AiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiLevel {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AiLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownLevel(wanted.to_string()))
    }
}
