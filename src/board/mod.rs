//! Occupancy and move generation.
//!
//! `BoardState` holds one `Option<Player>` per node in a fixed 37-slot
//! array, so a full position copies in a few dozen bytes. Search agents
//! snapshot entire matches by plain `Clone`; nothing here is reference
//! counted or persistent.
//!
//! Move legality is purely local: a simple move slides along an edge to an
//! empty neighbor, a capture jumps an adjacent opponent onto the empty
//! landing node behind it. Whether captures are forced is turn-state
//! business and lives in [`rules`](crate::rules).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Player;
use crate::graph::{self, Node, NODE_COUNT};

/// Per-origin move list, inline up to the board's maximum degree.
pub type MoveList = SmallVec<[MoveOption; 8]>;

/// How a move relocates a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Slide to an empty neighbor.
    Simple,
    /// Jump the adjacent `captured` piece onto the landing node behind it.
    Capture { captured: Node },
}

/// A single legal move from one origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOption {
    pub origin: Node,
    pub target: Node,
    pub kind: MoveKind,
}

impl MoveOption {
    /// A non-capturing slide.
    #[must_use]
    pub const fn simple(origin: Node, target: Node) -> Self {
        Self { origin, target, kind: MoveKind::Simple }
    }

    /// A capturing jump.
    #[must_use]
    pub const fn capture(origin: Node, target: Node, captured: Node) -> Self {
        Self { origin, target, kind: MoveKind::Capture { captured } }
    }

    /// The captured node, when this is a capture.
    #[must_use]
    pub const fn captured(&self) -> Option<Node> {
        match self.kind {
            MoveKind::Simple => None,
            MoveKind::Capture { captured } => Some(captured),
        }
    }

    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture { .. })
    }
}

/// Why a move request was rejected.
///
/// Serializes as the snake_case reason strings move records carry:
/// `illegal_move`, `not_your_turn`, `must_continue_capture`,
/// `match_already_over`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum MoveError {
    /// The origin/target pair is not among the legal options.
    #[error("move is not among the legal options")]
    IllegalMove,
    /// The mover is not the side to move.
    #[error("not this player's turn")]
    NotYourTurn,
    /// An open capture chain must continue from its landing node.
    #[error("capture chain must continue from its landing node")]
    MustContinueCapture,
    /// The match already has a winner.
    #[error("match already has a winner")]
    MatchAlreadyOver,
}

/// Outcome of one move request.
///
/// Rule violations are values, never panics: callers check `legal` (and
/// `error`) before trusting the rest of the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub legal: bool,
    pub captured: Option<Node>,
    pub must_continue: bool,
    pub winner: Option<Player>,
    pub error: Option<MoveError>,
}

impl MoveResult {
    pub(crate) fn applied(
        captured: Option<Node>,
        must_continue: bool,
        winner: Option<Player>,
    ) -> Self {
        Self { legal: true, captured, must_continue, winner, error: None }
    }

    pub(crate) fn rejected(error: MoveError) -> Self {
        Self { legal: false, captured: None, must_continue: false, winner: None, error: Some(error) }
    }
}

/// Occupancy of the whole board.
///
/// Serializes as the indexed occupancy map `snapshot()` returns, so a board
/// and its snapshot produce the same payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardState {
    slots: [Option<Player>; NODE_COUNT],
}

impl Serialize for BoardState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(Node::all().map(|node| (node.index(), self.occupant(node))))
    }
}

impl<'de> Deserialize<'de> for BoardState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let occupants = BTreeMap::<u8, Option<Player>>::deserialize(deserializer)?;
        let mut board = Self { slots: [None; NODE_COUNT] };
        for (index, occupant) in occupants {
            let node = Node::new(index).map_err(serde::de::Error::custom)?;
            board.slots[node.offset()] = occupant;
        }
        Ok(board)
    }
}

impl BoardState {
    /// Starting layout: green on nodes 1-16, red on nodes 22-37.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self { slots: [None; NODE_COUNT] };
        board.reset();
        board
    }

    /// Restore the starting layout in place.
    pub fn reset(&mut self) {
        for node in Node::all() {
            self.slots[node.offset()] = match node.index() {
                1..=16 => Some(Player::Green),
                22..=37 => Some(Player::Red),
                _ => None,
            };
        }
    }

    /// Build an arbitrary position; nodes not named stay empty.
    ///
    /// This is the only sanctioned way to set up positions by hand: a live
    /// board changes through [`BoardState::apply_move`] alone.
    #[must_use]
    pub fn from_layout(pieces: impl IntoIterator<Item = (Node, Player)>) -> Self {
        let mut board = Self { slots: [None; NODE_COUNT] };
        for (node, player) in pieces {
            board.slots[node.offset()] = Some(player);
        }
        board
    }

    #[must_use]
    pub fn occupant(&self, node: Node) -> Option<Player> {
        self.slots[node.offset()]
    }

    /// Number of pieces `player` still has on the board.
    #[must_use]
    pub fn remaining(&self, player: Player) -> usize {
        self.slots.iter().filter(|&&slot| slot == Some(player)).count()
    }

    /// Non-capturing slides from `origin`, in edge order.
    ///
    /// Empty when `origin` does not hold a piece of `player`.
    #[must_use]
    pub fn simple_moves(&self, origin: Node, player: Player) -> MoveList {
        let mut moves = MoveList::new();
        if self.occupant(origin) != Some(player) {
            return moves;
        }
        for edge in graph::neighbors(origin) {
            if self.occupant(edge.neighbor).is_none() {
                moves.push(MoveOption::simple(origin, edge.neighbor));
            }
        }
        moves
    }

    /// Capturing jumps from `origin`, in edge order: the neighbor holds the
    /// opponent and the landing node behind it exists and is empty.
    #[must_use]
    pub fn capture_moves(&self, origin: Node, player: Player) -> MoveList {
        let mut moves = MoveList::new();
        if self.occupant(origin) != Some(player) {
            return moves;
        }
        for edge in graph::neighbors(origin) {
            let Some(landing) = edge.landing else { continue };
            if self.occupant(edge.neighbor) == Some(player.opponent())
                && self.occupant(landing).is_none()
            {
                moves.push(MoveOption::capture(origin, landing, edge.neighbor));
            }
        }
        moves
    }

    /// Every legal move from `origin` for `player`.
    ///
    /// Captures are never globally forced: when both kinds exist, captures
    /// come first but simple moves stay available. `require_capture`
    /// restricts the list to captures (used while a capture chain is open).
    #[must_use]
    pub fn legal_moves(&self, origin: Node, player: Player, require_capture: bool) -> MoveList {
        let mut moves = self.capture_moves(origin, player);
        if require_capture {
            return moves;
        }
        moves.extend(self.simple_moves(origin, player));
        moves
    }

    /// Apply `player`'s move from `origin` to `target`.
    ///
    /// An illegal request returns `legal: false` with the reason and leaves
    /// the board untouched.
    pub fn apply_move(
        &mut self,
        player: Player,
        origin: Node,
        target: Node,
        require_capture: bool,
    ) -> MoveResult {
        let options = self.legal_moves(origin, player, require_capture);
        let Some(option) = options.iter().find(|m| m.target == target).copied() else {
            return MoveResult::rejected(MoveError::IllegalMove);
        };

        self.slots[origin.offset()] = None;
        self.slots[target.offset()] = Some(player);
        let captured = option.captured();
        if let Some(victim) = captured {
            self.slots[victim.offset()] = None;
        }

        let winner = self.winner_by_pieces();
        let must_continue = captured.is_some()
            && winner.is_none()
            && !self.capture_moves(target, player).is_empty();

        MoveResult::applied(captured, must_continue, winner)
    }

    /// Winner by elimination: a side with zero pieces has lost.
    pub(crate) fn winner_by_pieces(&self) -> Option<Player> {
        let red = self.remaining(Player::Red);
        let green = self.remaining(Player::Green);
        if red == 0 && green > 0 {
            Some(Player::Green)
        } else if green == 0 && red > 0 {
            Some(Player::Red)
        } else {
            None
        }
    }

    /// Full-board view keyed by 1-based node index.
    ///
    /// Serializes to the board payload shape consumers render from:
    /// `{"1": 2, ..., "17": null, ..., "37": 1}`.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<u8, Option<Player>> {
        Node::all().map(|node| (node.index(), self.occupant(node))).collect()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(index: u8) -> Node {
        Node::new(index).unwrap()
    }

    #[test]
    fn test_starting_layout() {
        let board = BoardState::new();
        assert_eq!(board.remaining(Player::Green), 16);
        assert_eq!(board.remaining(Player::Red), 16);
        assert_eq!(board.occupant(n(1)), Some(Player::Green));
        assert_eq!(board.occupant(n(16)), Some(Player::Green));
        for index in 17..=21 {
            assert_eq!(board.occupant(n(index)), None);
        }
        assert_eq!(board.occupant(n(22)), Some(Player::Red));
        assert_eq!(board.occupant(n(37)), Some(Player::Red));
    }

    #[test]
    fn test_reset_restores_layout() {
        let mut board = BoardState::new();
        let result = board.apply_move(Player::Green, n(13), n(17), false);
        assert!(result.legal);
        assert_ne!(board, BoardState::new());

        board.reset();
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_from_layout() {
        let board = BoardState::from_layout([(n(9), Player::Green), (n(4), Player::Red)]);
        assert_eq!(board.occupant(n(9)), Some(Player::Green));
        assert_eq!(board.occupant(n(4)), Some(Player::Red));
        assert_eq!(board.remaining(Player::Green), 1);
        assert_eq!(board.remaining(Player::Red), 1);
        assert_eq!(board.occupant(n(1)), None);
    }

    #[test]
    fn test_simple_moves_only_from_own_piece() {
        let board = BoardState::new();
        assert!(board.simple_moves(n(13), Player::Red).is_empty());
        assert!(board.simple_moves(n(17), Player::Green).is_empty());

        let from_13: Vec<Node> =
            board.simple_moves(n(13), Player::Green).iter().map(|m| m.target).collect();
        assert_eq!(from_13, vec![n(19), n(18), n(17)]);
    }

    #[test]
    fn test_capture_requires_opponent_and_empty_landing() {
        // green on 9 jumps red on 4 onto empty 1
        let board = BoardState::from_layout([(n(9), Player::Green), (n(4), Player::Red)]);
        let captures = board.capture_moves(n(9), Player::Green);
        assert_eq!(captures.as_slice(), &[MoveOption::capture(n(9), n(1), n(4))]);

        // blocked landing kills the jump
        let blocked = BoardState::from_layout([
            (n(9), Player::Green),
            (n(4), Player::Red),
            (n(1), Player::Red),
        ]);
        assert!(blocked.capture_moves(n(9), Player::Green).is_empty());

        // own piece is never jumped
        let own = BoardState::from_layout([(n(9), Player::Green), (n(4), Player::Green)]);
        assert!(own.capture_moves(n(9), Player::Green).is_empty());
    }

    #[test]
    fn test_legal_moves_orders_captures_first() {
        let board = BoardState::from_layout([(n(9), Player::Green), (n(4), Player::Red)]);
        let moves = board.legal_moves(n(9), Player::Green, false);
        assert!(moves.len() > 1);
        assert_eq!(moves[0], MoveOption::capture(n(9), n(1), n(4)));
        assert!(moves[1..].iter().all(|m| !m.is_capture()));

        let forced = board.legal_moves(n(9), Player::Green, true);
        assert_eq!(forced.len(), 1);
        assert!(forced[0].is_capture());
    }

    #[test]
    fn test_apply_move_rejects_without_mutation() {
        let mut board = BoardState::new();
        let before = board;

        let result = board.apply_move(Player::Green, n(13), n(9), false);
        assert!(!result.legal);
        assert_eq!(result.error, Some(MoveError::IllegalMove));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_capture_clears_victim() {
        let mut board = BoardState::from_layout([(n(9), Player::Green), (n(4), Player::Red)]);
        let result = board.apply_move(Player::Green, n(9), n(1), false);

        assert!(result.legal);
        assert_eq!(result.captured, Some(n(4)));
        assert_eq!(result.winner, Some(Player::Green));
        assert!(!result.must_continue);
        assert_eq!(board.occupant(n(9)), None);
        assert_eq!(board.occupant(n(4)), None);
        assert_eq!(board.occupant(n(1)), Some(Player::Green));
    }

    #[test]
    fn test_must_continue_when_chain_remains() {
        // after 9 -> 1 over 4, a second jump 1 -> 3 over 2 stays open
        let mut board = BoardState::from_layout([
            (n(9), Player::Green),
            (n(4), Player::Red),
            (n(2), Player::Red),
        ]);
        let result = board.apply_move(Player::Green, n(9), n(1), false);

        assert!(result.legal);
        assert_eq!(result.captured, Some(n(4)));
        assert!(result.winner.is_none());
        assert!(result.must_continue);
        assert_eq!(
            board.capture_moves(n(1), Player::Green).as_slice(),
            &[MoveOption::capture(n(1), n(3), n(2))]
        );
    }

    #[test]
    fn test_winner_by_pieces() {
        let board = BoardState::from_layout([(n(9), Player::Green)]);
        assert_eq!(board.winner_by_pieces(), Some(Player::Green));

        let board = BoardState::from_layout([(n(25), Player::Red)]);
        assert_eq!(board.winner_by_pieces(), Some(Player::Red));

        assert_eq!(BoardState::new().winner_by_pieces(), None);
    }

    #[test]
    fn test_snapshot_covers_all_nodes() {
        let snapshot = BoardState::new().snapshot();
        assert_eq!(snapshot.len(), NODE_COUNT);
        assert_eq!(snapshot[&1], Some(Player::Green));
        assert_eq!(snapshot[&17], None);
        assert_eq!(snapshot[&37], Some(Player::Red));
    }

    #[test]
    fn test_board_serializes_as_occupancy_map() {
        let board = BoardState::from_layout([(n(9), Player::Green), (n(4), Player::Red)]);
        let value = serde_json::to_value(board).unwrap();
        assert_eq!(value["9"], serde_json::json!(2));
        assert_eq!(value["4"], serde_json::json!(1));
        assert_eq!(value["17"], serde_json::json!(null));

        let back: BoardState = serde_json::from_value(value).unwrap();
        assert_eq!(back, board);

        // unknown node indices are rejected, not silently dropped
        assert!(serde_json::from_str::<BoardState>(r#"{"38": 1}"#).is_err());
    }
}
