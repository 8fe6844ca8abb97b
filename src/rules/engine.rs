//! The turn engine.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::{BoardState, MoveError, MoveOption, MoveResult};
use crate::core::Player;
use crate::graph::Node;

/// Whose turn it is, and whether a capture chain is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    to_move: Player,
    pending_capture_from: Option<Node>,
}

impl TurnState {
    /// Fresh turn state: green opens, no chain pending.
    #[must_use]
    pub fn new() -> Self {
        Self { to_move: Player::Green, pending_capture_from: None }
    }

    #[must_use]
    pub const fn to_move(self) -> Player {
        self.to_move
    }

    /// The node an open capture chain must continue from.
    #[must_use]
    pub const fn pending_capture_from(self) -> Option<Node> {
        self.pending_capture_from
    }

    fn swap(&mut self) {
        self.pending_capture_from = None;
        self.to_move = self.to_move.opponent();
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

/// One match: board occupancy plus turn bookkeeping, mutated atomically.
///
/// The only mutating entry point is [`GameRules::apply_player_move`]; board
/// and turn state never drift apart. Search agents take a shared reference
/// and clone: a clone is a complete, disposable match, and the borrow
/// guarantees the live instance stays untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    board: BoardState,
    turn: TurnState,
    winner: Option<Player>,
}

impl GameRules {
    /// A fresh match on the starting layout, green to move.
    #[must_use]
    pub fn new() -> Self {
        Self { board: BoardState::new(), turn: TurnState::new(), winner: None }
    }

    /// Start from an arbitrary position (endgames, puzzles, tests).
    #[must_use]
    pub fn with_position(board: BoardState, to_move: Player) -> Self {
        let winner = board.winner_by_pieces();
        Self { board, turn: TurnState { to_move, pending_capture_from: None }, winner }
    }

    /// Restart the match in place.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = TurnState::new();
        self.winner = None;
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    #[must_use]
    pub fn to_move(&self) -> Player {
        self.turn.to_move()
    }

    #[must_use]
    pub fn pending_capture_from(&self) -> Option<Node> {
        self.turn.pending_capture_from()
    }

    /// The recorded winner, once a move has decided the match.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[must_use]
    pub fn remaining(&self, player: Player) -> usize {
        self.board.remaining(player)
    }

    /// Apply `player`'s move from `origin` to `target`, advancing the turn.
    ///
    /// Chain continuation is mandatory: after a capture that leaves another
    /// capture open from the landing node, the same player stays to move and
    /// only moves from that node are accepted. Every rejection comes back as
    /// a `MoveResult` value with the reason; nothing here panics.
    pub fn apply_player_move(&mut self, player: Player, origin: Node, target: Node) -> MoveResult {
        if self.winner.is_some() {
            return MoveResult::rejected(MoveError::MatchAlreadyOver);
        }
        if player != self.turn.to_move() {
            return MoveResult::rejected(MoveError::NotYourTurn);
        }

        let pending = self.turn.pending_capture_from();
        if let Some(required) = pending {
            if origin != required {
                return MoveResult::rejected(MoveError::MustContinueCapture);
            }
        }

        let result = self.board.apply_move(player, origin, target, pending.is_some());
        if !result.legal {
            return result;
        }

        if result.captured.is_some() && result.must_continue {
            self.turn.pending_capture_from = Some(target);
        } else {
            self.turn.swap();
        }

        if result.winner.is_some() {
            self.turn.pending_capture_from = None;
            self.winner = result.winner;
        }

        trace!(
            player = %player,
            origin = %origin,
            target = %target,
            captured = ?result.captured.map(Node::index),
            must_continue = result.must_continue,
            "move applied"
        );

        result
    }

    /// Every legal move for `player` under the current turn state.
    ///
    /// While a capture chain is open and `player` is the side to move, only
    /// captures from the pending node qualify. Otherwise origins scan in
    /// ascending order and each origin lists captures before simple moves.
    /// Enumeration order is stable and part of the contract: both agents'
    /// tie-breaks rely on it.
    #[must_use]
    pub fn legal_moves_for(&self, player: Player) -> Vec<MoveOption> {
        if player == self.turn.to_move() {
            if let Some(pending) = self.turn.pending_capture_from() {
                return self.board.legal_moves(pending, player, true).into_vec();
            }
        }

        let mut moves = Vec::new();
        for origin in Node::all() {
            moves.extend(self.board.legal_moves(origin, player, false));
        }
        moves
    }

    /// Terminal test shared by the search agents.
    ///
    /// A side with zero pieces has lost; failing that, a side to move with
    /// no legal move loses. Move starvation is detected here by enumeration,
    /// never inside [`GameRules::apply_player_move`].
    #[must_use]
    pub fn resolve_winner(&self) -> Option<Player> {
        if let Some(winner) = self.board.winner_by_pieces() {
            return Some(winner);
        }
        let to_move = self.turn.to_move();
        if self.legal_moves_for(to_move).is_empty() {
            return Some(to_move.opponent());
        }
        None
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::new()
    }
}
