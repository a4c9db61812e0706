//! Environment contract trait.

use waypoint_kernel::graph::NodeId;

use crate::error::EnvironmentError;

/// A passive source of adjacency information.
///
/// # Contract
///
/// - `neighbors` is a pure read: same node → same neighbors in the same
///   order, for the lifetime of the environment.
/// - An environment must not mutate itself in response to queries; the
///   agent relies on this for idempotent searches.
/// - Whether an unknown node is an error or a dead end is the
///   environment's decision (see [`crate::policy::MissingNodePolicyV1`]).
pub trait EnvironmentV1 {
    /// Node identifier type.
    type Node: NodeId;

    /// Ordered neighbors of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::NodeNotFound`] if the environment does
    /// not know `node` and treats that as a failure.
    fn neighbors(&self, node: &Self::Node) -> Result<&[Self::Node], EnvironmentError>;
}
