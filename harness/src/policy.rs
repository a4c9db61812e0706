//! Run policy and its snapshot: the auditable declaration of the
//! conditions under which a bundle was produced.
//!
//! The runner derives a policy snapshot deterministically from the world id
//! and the [`RunPolicy`]. Worlds do NOT declare policy.
//!
//! The snapshot is a normative artifact (`policy.json`), so the bundle
//! digest commits to the policy.

use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_search::{MissingNodePolicyV1, SearchPolicyV1};

/// Everything the runner needs besides the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunPolicy {
    /// Budget handed to the agent.
    pub search: SearchPolicyV1,
    /// Unknown-node behavior handed to the environment.
    pub missing_node: MissingNodePolicyV1,
}

impl RunPolicy {
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.search = SearchPolicyV1::with_max_expansions(max_expansions);
        self
    }

    #[must_use]
    pub fn with_missing_node(mut self, missing_node: MissingNodePolicyV1) -> Self {
        self.missing_node = missing_node;
        self
    }
}

/// Build canonical policy snapshot bytes for `world_id`.
///
/// # Errors
///
/// Returns [`CanonError`] if canonical JSON serialization fails.
pub fn build_policy_snapshot(world_id: &str, policy: &RunPolicy) -> Result<Vec<u8>, CanonError> {
    let snapshot = serde_json::json!({
        "max_expansions": policy.search.max_expansions,
        "missing_node": policy.missing_node.as_str(),
        "schema_version": "policy.v1",
        "world_id": world_id,
    });
    canonical_json_bytes(&snapshot)
}
