//! Search statistics.

use serde::{Deserialize, Serialize};

/// Counters from the last search, reset at the start of each decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Iterations actually run (short of the configured count when a time
    /// limit fires).
    pub iterations: u32,
    /// Nodes allocated in the tree, root included.
    pub nodes_created: u32,
    /// Rollouts played.
    pub rollouts: u32,
    /// Rollouts stopped undecided at the ply cap.
    pub rollout_cutoffs: u32,
    /// Depth of the deepest node created.
    pub max_depth: u16,
    /// Wall-clock time of the whole decision, in microseconds.
    pub time_us: u64,
}

impl SearchStats {
    /// Iterations per second of the last search.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.iterations) * 1_000_000.0 / self.time_us as f64
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
