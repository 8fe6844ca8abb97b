//! UCT search over the rules engine.
//!
//! Each decision builds a fresh arena tree rooted at the handed-in
//! position. One iteration: select a leaf by UCB1, expand one untried move
//! chosen at random, roll the new position out with uniformly-random play
//! on a forked stream, then credit the reward back up to the root. The
//! final pick is the most-visited root child, first created on ties.

use std::time::Instant;

use tracing::debug;

use crate::agents::{Agent, PlannedMove};
use crate::board::MoveOption;
use crate::core::{Player, SearchRng};
use crate::mcts::config::MCTSConfig;
use crate::mcts::node::{NodeId, SearchNode};
use crate::mcts::stats::SearchStats;
use crate::mcts::tree::SearchTree;
use crate::rules::GameRules;

/// Monte-Carlo tree search opponent.
pub struct MCTSAgent {
    player: Player,
    config: MCTSConfig,
    rng: SearchRng,
    stats: SearchStats,
}

impl MCTSAgent {
    /// Agent for `player` with the default configuration.
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self::with_config(player, MCTSConfig::default())
    }

    #[must_use]
    pub fn with_config(player: Player, config: MCTSConfig) -> Self {
        Self { player, config, rng: SearchRng::new(config.seed), stats: SearchStats::default() }
    }

    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Counters from the most recent [`MCTSAgent::choose_move`].
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick a move by UCT search.
    ///
    /// Returns `None` off turn or when no legal move exists.
    pub fn choose_move(&mut self, state: &GameRules) -> Option<PlannedMove> {
        let start = Instant::now();
        self.stats.reset();

        if state.to_move() != self.player {
            // plans exist only for the side to move
            return None;
        }

        let mut tree = SearchTree::with_capacity(self.config.iterations as usize + 1);
        let root = tree.alloc(SearchNode::from_state(state.clone(), NodeId::NONE, None, 0));
        self.stats.nodes_created = 1;

        if tree.get(root).untried.is_empty() {
            // terminal or starved position: nothing to search
            return None;
        }

        for _ in 0..self.config.iterations {
            self.iteration(&mut tree, root);
            self.stats.iterations += 1;
            if self.out_of_time(start) {
                break;
            }
        }

        let chosen = self.most_visited_child(&tree, root);
        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            player = %self.player,
            iterations = self.stats.iterations,
            nodes = self.stats.nodes_created,
            rollouts = self.stats.rollouts,
            chosen = ?chosen,
            "mcts decision"
        );
        chosen
    }

    fn iteration(&mut self, tree: &mut SearchTree, root: NodeId) {
        let leaf = self.select(tree, root);
        let expanded = self.expand(tree, leaf);
        let reward = self.rollout(tree, expanded);
        Self::backpropagate(tree, expanded, reward);
    }

    /// Descend while the node is fully expanded, undecided, and has
    /// children, always to the child maximizing UCB1.
    fn select(&self, tree: &SearchTree, root: NodeId) -> NodeId {
        let mut current = root;
        loop {
            let node = tree.get(current);
            if node.is_terminal() || !node.is_fully_expanded() || node.children.is_empty() {
                return current;
            }
            current = self.best_ucb_child(tree, current);
        }
    }

    fn best_ucb_child(&self, tree: &SearchTree, parent: NodeId) -> NodeId {
        let node = tree.get(parent);
        let ln_parent = f64::from(node.visits.max(1)).ln();

        let mut best = node.children[0];
        let mut best_score = f64::NEG_INFINITY;
        for &child_id in &node.children {
            let child = tree.get(child_id);
            let score = if child.visits == 0 {
                f64::INFINITY
            } else {
                child.mean_reward()
                    + self.config.exploration_constant
                        * (ln_parent / f64::from(child.visits)).sqrt()
            };
            if score > best_score {
                best_score = score;
                best = child_id;
            }
        }
        best
    }

    /// Pop one untried move at random and allocate the resulting child.
    ///
    /// Terminal and exhausted nodes come back unchanged; an illegal option
    /// is pruned, never fatal.
    fn expand(&mut self, tree: &mut SearchTree, leaf: NodeId) -> NodeId {
        let (terminal, untried_len, mover, parent_depth) = {
            let node = tree.get(leaf);
            (node.is_terminal(), node.untried.len(), node.state.to_move(), node.depth)
        };
        if terminal || untried_len == 0 {
            return leaf;
        }

        let pick = self.rng.gen_range_usize(0..untried_len);
        let option = tree.get_mut(leaf).untried.swap_remove(pick);

        let mut child_state = tree.get(leaf).state.clone();
        let result = child_state.apply_player_move(mover, option.origin, option.target);
        if !result.legal {
            return leaf;
        }

        let depth = parent_depth + 1;
        let child_id =
            tree.alloc(SearchNode::from_state(child_state, leaf, Some(option), depth));
        tree.get_mut(leaf).children.push(child_id);

        self.stats.nodes_created += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        child_id
    }

    /// Play uniformly-random legal moves on a forked stream until the
    /// position decides or the ply cap stops it.
    fn rollout(&mut self, tree: &SearchTree, from: NodeId) -> f64 {
        self.stats.rollouts += 1;
        let mut rng = self.rng.fork();
        let mut state = tree.get(from).state.clone();

        for _ in 0..self.config.rollout_limit {
            if let Some(winner) = state.resolve_winner() {
                return self.reward_for(winner);
            }
            let mover = state.to_move();
            let moves = state.legal_moves_for(mover);
            let Some(&option) = rng.choose(&moves) else { break };
            let result = state.apply_player_move(mover, option.origin, option.target);
            if !result.legal {
                break;
            }
        }

        if let Some(winner) = state.resolve_winner() {
            return self.reward_for(winner);
        }
        self.stats.rollout_cutoffs += 1;
        0.5
    }

    fn reward_for(&self, winner: Player) -> f64 {
        if winner == self.player {
            1.0
        } else {
            0.0
        }
    }

    /// Credit the reward to every node from `from` up to and including the
    /// root.
    fn backpropagate(tree: &mut SearchTree, from: NodeId, reward: f64) {
        let mut current = from;
        while !current.is_none() {
            let node = tree.get_mut(current);
            node.visits += 1;
            node.reward += reward;
            current = node.parent;
        }
    }

    /// Root child with the highest visit count; ties keep the first
    /// created, so results never depend on how a maximum scan resolves.
    fn most_visited_child(&self, tree: &SearchTree, root: NodeId) -> Option<PlannedMove> {
        let mut best: Option<(u32, MoveOption)> = None;
        for &child_id in &tree.get(root).children {
            let child = tree.get(child_id);
            let Some(option) = child.produced_by else { continue };
            let better = match best {
                None => true,
                Some((best_visits, _)) => child.visits > best_visits,
            };
            if better {
                best = Some((child.visits, option));
            }
        }
        best.map(|(_, option)| PlannedMove::from(option))
    }

    fn out_of_time(&self, start: Instant) -> bool {
        self.config.time_limit.is_some_and(|limit| start.elapsed() >= limit)
    }
}

impl Agent for MCTSAgent {
    fn choose_move(&mut self, state: &GameRules) -> Option<PlannedMove> {
        MCTSAgent::choose_move(self, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardState;
    use crate::graph::Node;

    fn n(index: u8) -> Node {
        Node::new(index).unwrap()
    }

    #[test]
    fn test_single_iteration_expands_one_child() {
        let game = GameRules::new();
        let mut agent =
            MCTSAgent::with_config(Player::Green, MCTSConfig::default().with_iterations(1));

        let plan = agent.choose_move(&game).unwrap();
        assert!(game
            .legal_moves_for(Player::Green)
            .iter()
            .any(|m| m.origin == plan.origin && m.target == plan.target));

        let stats = agent.stats();
        assert_eq!(stats.iterations, 1);
        assert_eq!(stats.nodes_created, 2);
        assert_eq!(stats.rollouts, 1);
        assert_eq!(stats.max_depth, 1);
    }

    #[test]
    fn test_terminal_position_yields_none() {
        let board = BoardState::from_layout([(n(9), Player::Green)]);
        let game = GameRules::with_position(board, Player::Red);

        let mut agent = MCTSAgent::new(Player::Red);
        assert_eq!(agent.choose_move(&game), None);
    }

    #[test]
    fn test_same_seed_same_move() {
        let game = GameRules::new();
        let config = MCTSConfig::default().with_iterations(60).with_seed(11);

        let mut first = MCTSAgent::with_config(Player::Green, config);
        let mut second = MCTSAgent::with_config(Player::Green, config);

        assert_eq!(first.choose_move(&game), second.choose_move(&game));
        assert_eq!(first.stats().nodes_created, second.stats().nodes_created);
        assert_eq!(first.stats().rollout_cutoffs, second.stats().rollout_cutoffs);
    }
}
