//! MCTS search parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Parameters for [`MCTSAgent`](crate::mcts::MCTSAgent).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// Search iterations per decision.
    pub iterations: u32,
    /// UCB1 exploration constant.
    pub exploration_constant: f64,
    /// Rollouts stop undecided after this many plies and score 0.5.
    pub rollout_limit: u32,
    /// Seed for all search randomness.
    pub seed: u64,
    /// Optional wall-clock budget, checked after each iteration; on expiry
    /// the most-visited move so far is returned, so a tight budget still
    /// yields a move whenever one exists.
    pub time_limit: Option<Duration>,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            exploration_constant: std::f64::consts::SQRT_2,
            rollout_limit: 200,
            seed: 42,
            time_limit: None,
        }
    }
}

impl MCTSConfig {
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_exploration(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    #[must_use]
    pub fn with_rollout_limit(mut self, plies: u32) -> Self {
        self.rollout_limit = plies;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}
