//! Board integration tests: opening layout, move generation, captures.

use serde_json::json;
use shologuti::board::{BoardState, MoveError, MoveKind, MoveOption};
use shologuti::core::Player;
use shologuti::graph::{self, Node, NODE_COUNT};

fn n(index: u8) -> Node {
    Node::new(index).unwrap()
}

// =============================================================================
// Opening Layout
// =============================================================================

#[test]
fn test_opening_layout() {
    let board = BoardState::new();

    assert_eq!(board.remaining(Player::Green), 16);
    assert_eq!(board.remaining(Player::Red), 16);
    for index in 1..=16 {
        assert_eq!(board.occupant(n(index)), Some(Player::Green));
    }
    for index in 17..=21 {
        assert_eq!(board.occupant(n(index)), None);
    }
    for index in 22..=37 {
        assert_eq!(board.occupant(n(index)), Some(Player::Red));
    }
}

#[test]
fn test_opening_has_no_captures() {
    // the empty band separates the armies, so nobody can jump yet
    let board = BoardState::new();

    for node in Node::all() {
        for player in [Player::Green, Player::Red] {
            assert!(
                board.capture_moves(node, player).is_empty(),
                "unexpected opening capture from node {node}"
            );
        }
    }
}

#[test]
fn test_opening_moves_slide_to_empty_neighbors() {
    let board = BoardState::new();

    for node in Node::all() {
        for player in [Player::Green, Player::Red] {
            for mv in board.simple_moves(node, player) {
                assert_eq!(mv.origin, node);
                assert_eq!(mv.kind, MoveKind::Simple);
                assert_eq!(board.occupant(mv.target), None);
                let adjacent = graph::neighbors(node).iter().any(|e| e.neighbor == mv.target);
                assert!(adjacent, "move {} -> {} is not along an edge", mv.origin, mv.target);
            }
        }
    }
}

#[test]
fn test_opening_mobility_is_nine_per_side() {
    // only the rank facing the empty band can move at the start
    let board = BoardState::new();

    for player in [Player::Green, Player::Red] {
        let total: usize =
            Node::all().map(|node| board.legal_moves(node, player, false).len()).sum();
        assert_eq!(total, 9);
    }
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_capture_lands_behind_victim() {
    // red on 9 jumps the green piece on 13 onto the empty 17
    let board = BoardState::from_layout([(n(9), Player::Red), (n(13), Player::Green)]);

    let captures = board.capture_moves(n(9), Player::Red);
    assert_eq!(captures.as_slice(), &[MoveOption::capture(n(9), n(17), n(13))]);
}

#[test]
fn test_capture_line_works_both_ways() {
    // the same line reversed: green on 17 jumps red on 13 back onto 9
    let board = BoardState::from_layout([(n(17), Player::Green), (n(13), Player::Red)]);

    let captures = board.capture_moves(n(17), Player::Green);
    assert_eq!(captures.as_slice(), &[MoveOption::capture(n(17), n(9), n(13))]);
}

#[test]
fn test_occupied_landing_blocks_capture() {
    let board = BoardState::from_layout([
        (n(9), Player::Red),
        (n(13), Player::Green),
        (n(17), Player::Green),
    ]);

    assert!(board.capture_moves(n(9), Player::Red).is_empty());
    // the slide into 13 is gone too, but other slides remain
    let slides = board.simple_moves(n(9), Player::Red);
    assert!(!slides.is_empty());
    assert!(slides.iter().all(|m| m.target != n(13)));
}

#[test]
fn test_apply_capture_updates_three_nodes() {
    let mut board = BoardState::from_layout([
        (n(9), Player::Red),
        (n(13), Player::Green),
        (n(1), Player::Green),
    ]);

    let result = board.apply_move(Player::Red, n(9), n(17), false);
    assert!(result.legal);
    assert_eq!(result.captured, Some(n(13)));
    assert!(!result.must_continue);
    assert_eq!(result.winner, None);

    assert_eq!(board.occupant(n(9)), None);
    assert_eq!(board.occupant(n(13)), None);
    assert_eq!(board.occupant(n(17)), Some(Player::Red));
    assert_eq!(board.remaining(Player::Green), 1);
}

#[test]
fn test_illegal_request_is_a_value_not_a_panic() {
    let mut board = BoardState::new();
    let before = board;

    // a jump with nothing to jump over
    let result = board.apply_move(Player::Green, n(13), n(25), false);
    assert!(!result.legal);
    assert_eq!(result.error, Some(MoveError::IllegalMove));
    assert_eq!(result.captured, None);
    assert_eq!(board, before);

    // restricting to captures rejects a slide that was otherwise fine
    let result = board.apply_move(Player::Green, n(13), n(17), true);
    assert!(!result.legal);
    assert_eq!(board, before);
}

// =============================================================================
// Snapshot Payload
// =============================================================================

#[test]
fn test_snapshot_serializes_to_indexed_map() {
    let value = serde_json::to_value(BoardState::new().snapshot()).unwrap();
    let map = value.as_object().unwrap();

    assert_eq!(map.len(), NODE_COUNT);
    assert_eq!(value["1"], json!(2));
    assert_eq!(value["16"], json!(2));
    assert_eq!(value["17"], json!(null));
    assert_eq!(value["21"], json!(null));
    assert_eq!(value["22"], json!(1));
    assert_eq!(value["37"], json!(1));
}

#[test]
fn test_snapshot_tracks_applied_moves() {
    let mut board = BoardState::new();
    assert!(board.apply_move(Player::Green, n(13), n(17), false).legal);

    let value = serde_json::to_value(board.snapshot()).unwrap();
    assert_eq!(value["13"], json!(null));
    assert_eq!(value["17"], json!(2));
}
