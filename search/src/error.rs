//! Typed search errors.
//!
//! "No path exists" is not an error: it is `Ok(None)` from
//! [`crate::search::Agent::find_path`]. The types here cover failures that
//! abort a search without a result.

/// Failure reported by an environment's neighbor lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvironmentError {
    /// The node is not a key of the environment's graph.
    #[error("node {node:?} not found in graph")]
    NodeNotFound { node: String },
}

/// Failure of a whole search invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A neighbor lookup failed. The search stopped at that point and
    /// produced no partial result.
    #[error("neighbor lookup failed: {0}")]
    Environment(#[from] EnvironmentError),
    /// The policy was rejected before any node was dequeued.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}

impl SearchError {
    /// The missing node, if this error is a failed lookup.
    #[must_use]
    pub fn missing_node(&self) -> Option<&str> {
        match self {
            Self::Environment(EnvironmentError::NodeNotFound { node }) => Some(node),
            Self::InvalidPolicy { .. } => None,
        }
    }
}
