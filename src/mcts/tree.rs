//! Flat arena for the search tree.
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]; nothing
//! is reference counted and the whole tree frees in one drop. A tree is
//! built fresh for every decision.

use crate::mcts::node::{NodeId, SearchNode};

/// Node arena. The root is always the first allocation.
#[derive(Clone, Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Arena pre-sized for roughly one node per planned iteration.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity) }
    }

    /// Add a node, returning its id.
    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.raw() as usize]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.raw() as usize]
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GameRules;

    #[test]
    fn test_alloc_and_lookup() {
        let mut tree = SearchTree::with_capacity(4);
        assert!(tree.is_empty());

        let root = tree.alloc(SearchNode::from_state(GameRules::new(), NodeId::NONE, None, 0));
        assert_eq!(root, tree.root());
        assert_eq!(tree.len(), 1);
        assert!(tree.get(root).parent.is_none());

        let child_state = GameRules::new();
        let child = tree.alloc(SearchNode::from_state(child_state, root, None, 1));
        tree.get_mut(root).children.push(child);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(child).parent, root);
        assert_eq!(tree.get(root).children.as_slice(), &[child]);
    }
}
