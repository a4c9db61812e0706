//! Harness runner: runs a world's search and packages the result as a
//! bundle.
//!
//! The runner uses the search crate's public API only. It does not
//! implement any search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! validate policy → world.graph() → dangling-edge scan
//!   → GraphEnvironment + Agent::search()
//!   → canonical artifacts → build_bundle()
//! ```
//!
//! # Artifacts
//!
//! | name                | normative | content                          |
//! |---------------------|-----------|----------------------------------|
//! | `graph.json`        | yes       | canonical adjacency lists        |
//! | `policy.json`       | yes       | policy snapshot                  |
//! | `search_audit.json` | yes       | dequeue events and counters      |
//! | `report.json`       | no        | path, outcome, and digests       |

use waypoint_kernel::graph::AdjacencyGraph;
use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_search::{Agent, GraphEnvironment, Path, SearchAuditV1, SearchError};

use crate::bundle::{build_bundle, SearchBundleV1};
use crate::config::{ConfigError, RunConfig};
use crate::contract::WorldV1;
use crate::policy::{build_policy_snapshot, RunPolicy};

pub const GRAPH_ARTIFACT: &str = "graph.json";
pub const POLICY_ARTIFACT: &str = "policy.json";
pub const AUDIT_ARTIFACT: &str = "search_audit.json";
pub const REPORT_ARTIFACT: &str = "report.json";

/// Error from a harness run.
///
/// Not-found is not an error: it is a bundle whose
/// [`SearchBundleV1::path`] is `None`.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
    #[error("canonical JSON error: {0}")]
    Canon(#[from] CanonError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Run `world` under `policy` and build its bundle.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the policy is rejected or a neighbor
/// lookup fails (by default: the search reached a node absent from the
/// graph). No bundle is produced in that case.
pub fn run_search(world: &dyn WorldV1, policy: &RunPolicy) -> Result<SearchBundleV1, RunError> {
    let world_id = world.world_id();

    // Phase 1: policy and graph.
    policy.search.validate()?;
    let graph = world.graph();
    let dangling = graph.dangling_neighbors();
    for (from, to) in &dangling {
        tracing::warn!(world = world_id, %from, %to, "edge to a node with no adjacency entry");
    }
    tracing::info!(
        world = world_id,
        nodes = graph.len(),
        edges = graph.edge_count(),
        start = world.start(),
        goal = world.goal(),
        "run started"
    );

    // Phase 2: search.
    let environment = GraphEnvironment::with_missing_node_policy(&graph, policy.missing_node);
    let agent = Agent::new(
        &environment,
        world.start().to_string(),
        world.goal().to_string(),
    )
    .with_policy(policy.search);
    let result = agent.search()?;

    // Phase 3: artifacts.
    let graph_bytes = graph.canonical_bytes()?;
    let policy_bytes = build_policy_snapshot(world_id, policy)?;
    let audit_bytes = result.audit.to_canonical_json_bytes()?;
    let report_bytes = build_report(
        world_id,
        &graph,
        &dangling,
        result.path.as_ref(),
        &result.audit,
    )?;

    let bundle = build_bundle(vec![
        (GRAPH_ARTIFACT.into(), graph_bytes, true),
        (POLICY_ARTIFACT.into(), policy_bytes, true),
        (AUDIT_ARTIFACT.into(), audit_bytes, true),
        (REPORT_ARTIFACT.into(), report_bytes, false),
    ])?;

    tracing::info!(
        world = world_id,
        outcome = result.audit.metadata.termination_reason.as_str(),
        path = ?result.path.as_ref().map(ToString::to_string),
        digest = %bundle.digest,
        "run finished"
    );

    Ok(SearchBundleV1 {
        world_id: world_id.to_string(),
        bundle,
        path: result.path,
        audit: result.audit,
    })
}

/// Run the world and policy described by a config file.
///
/// # Errors
///
/// Returns [`RunError::Config`] if the config's policy or world is
/// invalid, or any [`run_search`] error.
pub fn run_config(config: &RunConfig) -> Result<SearchBundleV1, RunError> {
    let world = config.to_world()?;
    let policy = config.run_policy()?;
    run_search(&world, &policy)
}

fn build_report(
    world_id: &str,
    graph: &AdjacencyGraph<String>,
    dangling: &[(String, String)],
    path: Option<&Path<String>>,
    audit: &SearchAuditV1,
) -> Result<Vec<u8>, CanonError> {
    let report = serde_json::json!({
        "dangling_edges": dangling
            .iter()
            .map(|(from, to)| serde_json::json!([from, to]))
            .collect::<Vec<_>>(),
        "goal": audit.metadata.goal,
        "graph_digest": graph.digest()?.as_str(),
        "path": path.map(Path::nodes),
        "path_edges": path.map(Path::edge_count),
        "schema_version": "report.v1",
        "search_audit_digest": audit.digest()?.as_str(),
        "start": audit.metadata.start,
        "termination_reason": audit.metadata.termination_reason.as_str(),
        "world_id": world_id,
    });
    canonical_json_bytes(&report)
}
