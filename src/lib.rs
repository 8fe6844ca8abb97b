//! # shologuti
//!
//! A self-contained engine for Sixteen (Shologuti): a two-player
//! forced-capture board game on a fixed 37-node graph, with two computer
//! opponents: depth-limited minimax with alpha-beta pruning, and
//! Monte-Carlo tree search.
//!
//! ## Design Principles
//!
//! - **One authority**: [`GameRules`] alone decides legality, capture
//!   chains, turn order, and winners. UIs, network layers, and search
//!   agents all observe bit-for-bit identical outcomes.
//! - **Rejections are data**: a bad move comes back as a [`MoveResult`]
//!   value carrying the reason, never as a panic.
//! - **Cheap snapshots**: the board is a 37-slot `Copy` array; cloning a
//!   whole match for search costs a few dozen bytes.
//! - **Deterministic search**: both agents reproduce exactly, built on
//!   stable move enumeration, strictly-greater tie-breaks, and a seeded
//!   forkable stream for all MCTS randomness.
//!
//! ## Modules
//!
//! - [`graph`]: the static 37-node adjacency table
//! - [`core`]: player tags and the deterministic RNG
//! - [`board`]: occupancy, move generation, move application
//! - [`rules`]: the turn engine
//! - [`agents`]: the [`Agent`] contract and [`MinimaxAgent`]
//! - [`mcts`]: [`MCTSAgent`] and its arena search tree
//!
//! ## Quick Start
//!
//! ```
//! use shologuti::{GameRules, MinimaxAgent, Player};
//!
//! let mut game = GameRules::new();
//! let agent = MinimaxAgent::new(Player::Green);
//!
//! let plan = agent.choose_move(&game).expect("green has opening moves");
//! let result = game.apply_player_move(Player::Green, plan.origin, plan.target);
//! assert!(result.legal);
//! ```

pub mod agents;
pub mod board;
pub mod core;
pub mod graph;
pub mod mcts;
pub mod rules;

// Game surface
pub use crate::board::{BoardState, MoveError, MoveKind, MoveList, MoveOption, MoveResult};
pub use crate::core::{InvalidPlayer, Player, SearchRng};
pub use crate::graph::{Edge, Node, UnknownNode, NODE_COUNT};
pub use crate::rules::{GameRules, TurnState};

// Agents
pub use crate::agents::{Agent, MinimaxAgent, MinimaxConfig, PlannedMove};
pub use crate::mcts::{MCTSAgent, MCTSConfig, SearchStats};
