//! `ReferenceGraph`: the six-node example graph.
//!
//! ```text
//! A → B, C
//! B → D, E
//! C → F
//! D → ∅
//! E → F
//! F → ∅
//! ```
//!
//! The default run asks for `A → F`, whose shortest path is `[A, C, F]`.

use waypoint_kernel::graph::AdjacencyGraph;

use crate::contract::WorldV1;

/// Adjacency lists of the reference graph, in neighbor order.
pub const REFERENCE_EDGES: &[(&str, &[&str])] = &[
    ("A", &["B", "C"]),
    ("B", &["D", "E"]),
    ("C", &["F"]),
    ("D", &[]),
    ("E", &["F"]),
    ("F", &[]),
];

/// The reference graph with a chosen start and goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceGraph {
    start: String,
    goal: String,
}

impl ReferenceGraph {
    /// `A → F`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoints("A", "F")
    }

    #[must_use]
    pub fn with_endpoints(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

impl Default for ReferenceGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldV1 for ReferenceGraph {
    fn world_id(&self) -> &str {
        "reference_graph"
    }

    fn graph(&self) -> AdjacencyGraph<String> {
        AdjacencyGraph::from_literal(REFERENCE_EDGES)
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn goal(&self) -> &str {
        &self.goal
    }
}
