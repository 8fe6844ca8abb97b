//! Arena node for the search tree.

use smallvec::SmallVec;

use crate::board::MoveOption;
use crate::core::Player;
use crate::rules::GameRules;

/// Index of a node in the arena. `NONE` is the null sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for "no node" (the root's parent).
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// One explored position.
///
/// The node owns a full `GameRules` snapshot (cheap: the board is a `Copy`
/// array), the move that produced it, and the moves still waiting to be
/// expanded. The winner is resolved once at construction; a decided node
/// never expands.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub state: GameRules,
    pub parent: NodeId,
    /// The move applied to the parent's state to reach this node. `None`
    /// only at the root.
    pub produced_by: Option<MoveOption>,
    pub children: SmallVec<[NodeId; 8]>,
    /// Legal moves of the side to move, not yet expanded into children.
    pub untried: Vec<MoveOption>,
    pub winner: Option<Player>,
    pub visits: u32,
    pub reward: f64,
    pub depth: u16,
}

impl SearchNode {
    /// Build a node around `state`, resolving its winner and untried moves.
    pub(crate) fn from_state(
        state: GameRules,
        parent: NodeId,
        produced_by: Option<MoveOption>,
        depth: u16,
    ) -> Self {
        let winner = state.resolve_winner();
        let untried = if winner.is_some() {
            Vec::new()
        } else {
            state.legal_moves_for(state.to_move())
        };

        Self {
            state,
            parent,
            produced_by,
            children: SmallVec::new(),
            untried,
            winner,
            visits: 0,
            reward: 0.0,
            depth,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Mean reward across all visits, 0.0 before the first visit.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.reward / f64::from(self.visits)
        }
    }
}
