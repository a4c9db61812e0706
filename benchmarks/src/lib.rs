//! Shared regimes and helpers for waypoint benchmark suites.

use waypoint_harness::contract::WorldV1;
use waypoint_harness::policy::RunPolicy;
use waypoint_harness::worlds::{CustomGraph, Grid, ReferenceGraph, Ring};
use waypoint_kernel::graph::AdjacencyGraph;
use waypoint_kernel::proof::canon::canonical_json_bytes;
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use waypoint_search::{
    breadth_first_search, GraphEnvironment, MissingNodePolicyV1, SearchPolicyV1, SearchResult,
};

/// A named world + policy pair with its graph built once up front.
pub struct Regime {
    pub name: &'static str,
    pub world: CustomGraph,
    pub policy: RunPolicy,
}

impl Regime {
    fn from_world(name: &'static str, world: &dyn WorldV1, policy: RunPolicy) -> Self {
        let world = CustomGraph::new(world.world_id(), world.graph(), world.start(), world.goal())
            .expect("built-in worlds have non-empty ids");
        Self {
            name,
            world,
            policy,
        }
    }
}

/// The benchmark regimes, smallest first.
///
/// # Panics
///
/// Panics if a built-in world rejects its parameters.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    let ring = Ring::new(2_000).expect("ring");
    let grid = Grid::new(60, 60).expect("grid");
    let dead_end_graph = ring.graph();
    let dead_end = CustomGraph::new("ring_dead_end", dead_end_graph, "r0", "absent")
        .expect("dead end world");

    vec![
        Regime::from_world("reference", &ReferenceGraph::new(), RunPolicy::default()),
        Regime::from_world("ring_2000", &ring, RunPolicy::default()),
        Regime::from_world("grid_60x60", &grid, RunPolicy::default()),
        Regime::from_world(
            "grid_budget_limited",
            &grid,
            RunPolicy::default().with_max_expansions(500),
        ),
        Regime {
            name: "ring_exhaustive_dead_end",
            world: dead_end,
            policy: RunPolicy::default().with_missing_node(MissingNodePolicyV1::TreatAsEmpty),
        },
    ]
}

/// Graph built once for engine-only timing.
#[must_use]
pub fn prepare_graph(regime: &Regime) -> AdjacencyGraph<String> {
    regime.world.graph()
}

/// Run the search engine alone (no artifacts, no bundle).
///
/// # Panics
///
/// Panics if the search fails. Benchmark runs are expected to succeed.
#[must_use]
pub fn run_search_only(graph: &AdjacencyGraph<String>, regime: &Regime) -> SearchResult<String> {
    let environment = GraphEnvironment::with_missing_node_policy(graph, regime.policy.missing_node);
    breadth_first_search(
        &environment,
        &regime.world.start().to_string(),
        &regime.world.goal().to_string(),
        &regime.policy.search,
    )
    .expect("search should succeed in benchmarks")
}

/// Fingerprint of a regime's inputs, printed next to results so numbers
/// from different machines can be matched to the same workload.
///
/// # Panics
///
/// Panics if the graph cannot be canonicalized.
#[must_use]
pub fn regime_fingerprint(regime: &Regime) -> ContentHash {
    let input = serde_json::json!({
        "goal": regime.world.goal(),
        "graph_digest": regime.world.graph().digest().expect("graph digest").as_str(),
        "max_expansions": regime.policy.search.max_expansions,
        "missing_node": regime.policy.missing_node.as_str(),
        "start": regime.world.start(),
    });
    let bytes = canonical_json_bytes(&input).expect("canon");
    canonical_hash(HashDomain::BenchInput, &bytes)
}

/// Unbounded search policy (engine micro-benchmarks).
#[must_use]
pub fn unbounded() -> SearchPolicyV1 {
    SearchPolicyV1::default()
}
