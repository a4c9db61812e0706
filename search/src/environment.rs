//! Graph-backed environment.

use waypoint_kernel::graph::{AdjacencyGraph, NodeId};

use crate::contract::EnvironmentV1;
use crate::error::EnvironmentError;
use crate::policy::MissingNodePolicyV1;

/// An environment that answers neighbor queries from a fixed
/// [`AdjacencyGraph`].
///
/// Borrows the graph, so the graph cannot change while any agent holds the
/// environment.
#[derive(Debug, Clone, Copy)]
pub struct GraphEnvironment<'g, N> {
    graph: &'g AdjacencyGraph<N>,
    missing_node: MissingNodePolicyV1,
}

impl<'g, N: NodeId> GraphEnvironment<'g, N> {
    /// Environment that fails on unknown nodes.
    #[must_use]
    pub fn new(graph: &'g AdjacencyGraph<N>) -> Self {
        Self::with_missing_node_policy(graph, MissingNodePolicyV1::Fail)
    }

    #[must_use]
    pub fn with_missing_node_policy(
        graph: &'g AdjacencyGraph<N>,
        missing_node: MissingNodePolicyV1,
    ) -> Self {
        Self {
            graph,
            missing_node,
        }
    }

    #[must_use]
    pub fn graph(&self) -> &'g AdjacencyGraph<N> {
        self.graph
    }

    #[must_use]
    pub fn missing_node_policy(&self) -> MissingNodePolicyV1 {
        self.missing_node
    }
}

impl<N: NodeId> EnvironmentV1 for GraphEnvironment<'_, N> {
    type Node = N;

    fn neighbors(&self, node: &N) -> Result<&[N], EnvironmentError> {
        match (self.graph.neighbors(node), self.missing_node) {
            (Some(neighbors), _) => Ok(neighbors),
            (None, MissingNodePolicyV1::TreatAsEmpty) => Ok(&[]),
            (None, MissingNodePolicyV1::Fail) => Err(EnvironmentError::NodeNotFound {
                node: node.to_string(),
            }),
        }
    }
}
