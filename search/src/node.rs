//! Search node and path types.

use std::fmt;

/// One frontier entry, stored in the search arena.
///
/// The path-so-far is not copied into each entry. It is shared through
/// `parent_id` links and rebuilt once, for the goal only
/// (see [`crate::frontier::FifoFrontier::path_to`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNodeV1<N> {
    /// Arena index; also the enqueue order (root = 0).
    pub node_id: u64,
    /// Entry this one was enqueued from (`None` for the root).
    pub parent_id: Option<u64>,
    /// The graph node this entry stands for.
    pub state: N,
    /// Edges from the start node (root = 0).
    pub depth: u32,
}

/// An ordered sequence of nodes from start to goal, inclusive.
///
/// Never empty. A path of one node means start and goal coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<N> {
    nodes: Vec<N>,
}

impl<N> Path<N> {
    /// Wrap a node sequence. Returns `None` for an empty sequence.
    #[must_use]
    pub fn from_nodes(nodes: Vec<N>) -> Option<Self> {
        if nodes.is_empty() {
            None
        } else {
            Some(Self { nodes })
        }
    }

    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// First node.
    #[must_use]
    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    /// Last node.
    #[must_use]
    pub fn goal(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges traversed (`node_count - 1`).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Consecutive `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> {
        self.nodes.windows(2).map(|w| (&w[0], &w[1]))
    }
}

/// Renders as `[A, C, F]`.
impl<N: fmt::Display> fmt::Display for Path<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{node}")?;
        }
        f.write_str("]")
    }
}
