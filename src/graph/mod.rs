//! The fixed 37-node Sixteen board graph.
//!
//! The board is a lattice of 37 intersections: a 5x5 core with diagonals and
//! a triangular camp of six nodes on each end. Nodes are numbered 1..=37 from
//! the top-left corner down.
//!
//! ## Edges
//!
//! Every adjacency entry pairs a reachable neighbor with the landing node a
//! jump over that neighbor would reach, when the three nodes are collinear.
//! A missing landing means the line does not continue past the neighbor, so
//! no capture is possible in that direction.
//!
//! Edge order within a node's slice is part of the engine contract: move
//! enumeration (and therefore agent tie-breaking) follows table order.

use serde::{Deserialize, Serialize};

/// Number of nodes on the board.
pub const NODE_COUNT: usize = 37;

/// A node index on the board, guaranteed in 1..=37.
///
/// `Node` is the only index type the engine accepts, so out-of-range
/// integers are rejected at construction and never reach the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Node(u8);

impl Node {
    /// Validate a raw 1-based index.
    pub fn new(index: u8) -> Result<Self, UnknownNode> {
        if index >= 1 && index <= NODE_COUNT as u8 {
            Ok(Self(index))
        } else {
            Err(UnknownNode(index))
        }
    }

    /// The 1-based index, as printed and serialized.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Iterate over all nodes in ascending order.
    pub fn all() -> impl Iterator<Item = Node> {
        (1..=NODE_COUNT as u8).map(Node)
    }

    /// 0-based slot offset for array storage.
    pub(crate) const fn offset(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl From<Node> for u8 {
    fn from(node: Node) -> u8 {
        node.0
    }
}

impl TryFrom<u8> for Node {
    type Error = UnknownNode;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Node::new(index)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for a node index outside the board. Valid nodes are 1..=37.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown node index {0}: valid nodes are 1..=37")]
pub struct UnknownNode(pub u8);

/// One adjacency entry: a neighbor reachable by a simple move, plus the
/// landing node a jump over that neighbor reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// The adjacent node.
    pub neighbor: Node,
    /// Where a capturing jump over `neighbor` lands, if the line continues.
    pub landing: Option<Node>,
}

const fn step(neighbor: u8) -> Edge {
    Edge { neighbor: Node(neighbor), landing: None }
}

const fn jump(neighbor: u8, landing: u8) -> Edge {
    Edge { neighbor: Node(neighbor), landing: Some(Node(landing)) }
}

/// Adjacency for every node, indexed by `Node::offset`.
#[rustfmt::skip]
static ADJACENCY: [&[Edge]; NODE_COUNT] = [
    &[jump(2, 3), jump(4, 9)],                                                // 1
    &[step(1), jump(5, 9), step(3)],                                          // 2
    &[jump(2, 1), jump(6, 9)],                                                // 3
    &[step(1), jump(5, 6), jump(9, 15)],                                      // 4
    &[step(2), step(4), step(6), jump(9, 14)],                                // 5
    &[step(3), jump(9, 13), jump(5, 4)],                                      // 6
    &[jump(8, 9), jump(13, 19), jump(12, 17)],                                // 7
    &[step(7), jump(13, 18), jump(9, 10)],                                    // 8
    &[jump(4, 1), jump(5, 2), jump(6, 3), jump(8, 7), jump(13, 17),
      jump(14, 19), jump(15, 21), jump(10, 11)],                              // 9
    &[jump(9, 8), jump(15, 20), step(11)],                                    // 10
    &[jump(10, 9), jump(15, 19), jump(16, 21)],                               // 11
    &[step(7), jump(13, 14), jump(17, 22)],                                   // 12
    &[step(7), step(8), jump(9, 6), jump(14, 15), jump(19, 25),
      jump(18, 23), step(17), step(12)],                                      // 13
    &[jump(9, 5), jump(15, 16), jump(19, 24), jump(13, 12)],                  // 14
    &[jump(9, 4), step(10), step(11), step(16), step(21),
      jump(20, 25), jump(19, 23), jump(14, 13)],                              // 15
    &[step(11), jump(15, 14), jump(21, 26)],                                  // 16
    &[jump(12, 7), jump(13, 9), jump(18, 19), jump(23, 29), jump(22, 27)],    // 17
    &[jump(13, 8), jump(19, 20), jump(23, 28), step(17)],                     // 18
    &[jump(13, 7), jump(14, 9), jump(15, 11), jump(20, 21), jump(25, 31),
      jump(24, 29), jump(23, 27), jump(18, 17)],                              // 19
    &[jump(15, 10), step(21), jump(25, 30), jump(19, 18)],                    // 20
    &[jump(16, 11), jump(15, 9), jump(20, 19), jump(25, 29), jump(26, 31)],   // 21
    &[jump(17, 12), jump(23, 24), step(27)],                                  // 22
    &[step(17), jump(18, 13), jump(19, 15), jump(24, 25), jump(29, 34),
      step(28), step(27), step(22)],                                          // 23
    &[jump(19, 14), jump(25, 26), jump(29, 33), jump(23, 22)],                // 24
    &[jump(19, 13), jump(20, 15), step(21), step(26), step(31),
      step(30), jump(29, 32), jump(24, 23)],                                  // 25
    &[jump(21, 16), jump(25, 24), step(31)],                                  // 26
    &[jump(22, 17), jump(23, 19), jump(28, 29)],                              // 27
    &[jump(23, 18), jump(29, 30), step(27)],                                  // 28
    &[jump(28, 27), jump(23, 17), jump(24, 19), jump(25, 21), jump(30, 31),
      jump(32, 35), jump(33, 36), jump(34, 37)],                              // 29
    &[jump(29, 28), jump(25, 20), step(31)],                                  // 30
    &[jump(30, 29), jump(25, 19), jump(26, 21)],                              // 31
    &[jump(29, 25), jump(33, 34), step(35)],                                  // 32
    &[step(32), jump(29, 24), step(34), step(36)],                            // 33
    &[jump(29, 23), jump(33, 32), step(37)],                                  // 34
    &[jump(32, 29), jump(36, 37)],                                            // 35
    &[step(35), jump(33, 29), step(37)],                                      // 36
    &[jump(36, 35), jump(34, 29)],                                            // 37
];

/// Ordered adjacency of `node`.
#[must_use]
pub fn neighbors(node: Node) -> &'static [Edge] {
    ADJACENCY[node.offset()]
}

/// Adjacency lookup for a raw index, rejecting indices off the board.
pub fn try_neighbors(index: u8) -> Result<&'static [Edge], UnknownNode> {
    Node::new(index).map(neighbors)
}

/// Every directed edge on the board, in node order.
pub fn all_edges() -> impl Iterator<Item = (Node, Edge)> {
    Node::all().flat_map(|node| neighbors(node).iter().map(move |&edge| (node, edge)))
}
