//! World contract: the minimal trait a world must implement.
//!
//! Worlds provide graph data and a start/goal pair. Worlds may NOT run
//! searches, hash artifacts, or choose a policy: those are runner concerns.

use waypoint_kernel::graph::AdjacencyGraph;

/// Typed failure for world construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// Constructor parameters cannot describe a world.
    #[error("invalid world parameters: {detail}")]
    InvalidParameters { detail: String },
}

/// The contract a world must implement to be run by the harness runner.
///
/// A world provides:
/// - A unique identifier
/// - A directed graph over string node names
/// - The start and goal nodes
///
/// The start and goal need not be keys of the graph. What happens when the
/// search reaches an unknown node is decided by the run policy.
pub trait WorldV1 {
    /// Unique world identifier (e.g., `"reference_graph"`).
    fn world_id(&self) -> &str;

    /// The world's graph. Built fresh on each call; must be deterministic.
    fn graph(&self) -> AdjacencyGraph<String>;

    fn start(&self) -> &str;

    fn goal(&self) -> &str;
}
