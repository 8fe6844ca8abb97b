//! Depth-limited minimax with alpha-beta pruning.
//!
//! The evaluation is material-dominated: ten points per piece of material
//! difference, one per move-count difference, one for holding an open
//! capture chain. Decided positions score infinite either way.
//!
//! The agent is fully deterministic: candidates are scored in the engine's
//! stable enumeration order and only a strictly better score displaces the
//! current best, so ties keep the earliest candidate.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agents::{Agent, PlannedMove};
use crate::core::Player;
use crate::rules::GameRules;

/// Search parameters for [`MinimaxAgent`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Search depth in plies.
    pub depth: u32,
    /// Optional wall-clock budget, checked after each root candidate; on
    /// expiry the best move found so far is returned, so a tight budget
    /// still yields a move whenever one exists.
    pub time_limit: Option<Duration>,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self { depth: 3, time_limit: None }
    }
}

impl MinimaxConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// Depth-limited minimax opponent with alpha-beta pruning.
#[derive(Clone, Debug)]
pub struct MinimaxAgent {
    player: Player,
    config: MinimaxConfig,
}

impl MinimaxAgent {
    /// Agent for `player` with the default configuration (depth 3).
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self::with_config(player, MinimaxConfig::default())
    }

    #[must_use]
    pub fn with_config(player: Player, config: MinimaxConfig) -> Self {
        Self { player, config }
    }

    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Pick the best move for this agent from `state`.
    ///
    /// Returns `None` when the agent has no legal move, or when a completed
    /// scan finds every line already lost. An expired time budget never
    /// resigns: some legal move comes back whenever one exists.
    #[must_use]
    pub fn choose_move(&self, state: &GameRules) -> Option<PlannedMove> {
        let start = Instant::now();
        let moves = state.legal_moves_for(self.player);

        let mut nodes = 0u64;
        let mut best: Option<PlannedMove> = None;
        let mut best_score = f64::NEG_INFINITY;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut expired = false;

        for option in &moves {
            let mut child = state.clone();
            let result = child.apply_player_move(self.player, option.origin, option.target);
            if !result.legal {
                // illegal candidates are pruned, never fatal
                continue;
            }

            let score =
                self.minimax(&child, self.config.depth.saturating_sub(1), alpha, beta, &mut nodes);
            if score > best_score {
                best_score = score;
                best = Some(PlannedMove::from(*option));
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
            if self.out_of_time(start) {
                expired = true;
                break;
            }
        }

        if expired && best.is_none() {
            // the clock ran out before any candidate scored finite; expiry
            // must still yield a move whenever one exists
            best = moves.first().map(|option| PlannedMove::from(*option));
        }

        debug!(
            player = %self.player,
            depth = self.config.depth,
            nodes,
            elapsed_us = start.elapsed().as_micros() as u64,
            chosen = ?best,
            "minimax decision"
        );
        best
    }

    fn minimax(
        &self,
        state: &GameRules,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        nodes: &mut u64,
    ) -> f64 {
        *nodes += 1;

        if let Some(winner) = state.resolve_winner() {
            return if winner == self.player { f64::INFINITY } else { f64::NEG_INFINITY };
        }
        if depth == 0 {
            return self.evaluate(state);
        }

        let to_move = state.to_move();
        let moves = state.legal_moves_for(to_move);
        if moves.is_empty() {
            return self.evaluate(state);
        }

        let maximizing = to_move == self.player;
        let mut best = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };

        for option in &moves {
            let mut child = state.clone();
            let result = child.apply_player_move(to_move, option.origin, option.target);
            if !result.legal {
                continue;
            }

            let score = self.minimax(&child, depth - 1, alpha, beta, nodes);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }

    /// Static evaluation from this agent's perspective.
    fn evaluate(&self, state: &GameRules) -> f64 {
        let me = self.player;
        let opp = me.opponent();

        let material = state.remaining(me) as f64 - state.remaining(opp) as f64;
        let mobility =
            state.legal_moves_for(me).len() as f64 - state.legal_moves_for(opp).len() as f64;
        let chain_bonus = if state.pending_capture_from().is_some() && state.to_move() == me {
            1.0
        } else {
            0.0
        };

        material * 10.0 + mobility + chain_bonus
    }

    fn out_of_time(&self, start: Instant) -> bool {
        self.config.time_limit.is_some_and(|limit| start.elapsed() >= limit)
    }
}

impl Agent for MinimaxAgent {
    fn choose_move(&mut self, state: &GameRules) -> Option<PlannedMove> {
        MinimaxAgent::choose_move(self, state)
    }
}
