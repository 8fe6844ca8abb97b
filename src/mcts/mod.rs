//! Monte-Carlo tree search opponent.
//!
//! ## Architecture
//!
//! - `config`: iterations, exploration constant, rollout cap, seed, budget
//! - `node` / `tree`: flat arena addressed by `NodeId`; no `Rc` or
//!   `RefCell`, children point back to parents by id
//! - `search`: UCB1 selection, random expansion, uniform rollouts,
//!   backpropagation
//! - `stats`: counters from the last decision
//!
//! Every random choice flows from one seeded stream (rollouts fork it), so
//! a search reproduces bit-for-bit for a given seed, position, and config.

pub mod config;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::MCTSConfig;
pub use node::{NodeId, SearchNode};
pub use search::MCTSAgent;
pub use stats::SearchStats;
pub use tree::SearchTree;
