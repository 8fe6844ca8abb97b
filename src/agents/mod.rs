//! Computer opponents.
//!
//! Both opponents satisfy one contract: hand in a position, get back an
//! optional move. `None` means the agent found no legal move, which the
//! caller reads as the end of the match.

pub mod minimax;

pub use minimax::{MinimaxAgent, MinimaxConfig};

use serde::{Deserialize, Serialize};

use crate::board::MoveOption;
use crate::graph::Node;
use crate::rules::GameRules;

/// A move an agent wants to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlannedMove {
    pub origin: Node,
    pub target: Node,
}

impl From<MoveOption> for PlannedMove {
    fn from(option: MoveOption) -> Self {
        Self { origin: option.origin, target: option.target }
    }
}

/// Decision contract every computer opponent satisfies.
pub trait Agent {
    /// Pick a move for the current position, or `None` when no legal move
    /// exists.
    fn choose_move(&mut self, state: &GameRules) -> Option<PlannedMove>;
}
