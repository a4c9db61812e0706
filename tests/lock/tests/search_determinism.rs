//! Determinism: N=10 in-process runs must produce identical audit bytes,
//! artifact bytes, and bundle digests.

use lock_tests::random_graph;
use waypoint_harness::policy::RunPolicy;
use waypoint_harness::runner::run_search;
use waypoint_harness::worlds::{CustomGraph, Grid, ReferenceGraph};
use waypoint_search::{Agent, GraphEnvironment};

// ---------------------------------------------------------------------------
// Search layer
// ---------------------------------------------------------------------------

#[test]
fn audit_bytes_deterministic_n10() {
    let graph = random_graph(42, 60, 3);
    let environment = GraphEnvironment::new(&graph);
    let agent = Agent::new(&environment, "n0".to_string(), "n59".to_string());

    let first = agent.search().unwrap().audit.to_canonical_json_bytes().unwrap();
    for i in 1..10 {
        let bytes = agent.search().unwrap().audit.to_canonical_json_bytes().unwrap();
        assert_eq!(first, bytes, "audit bytes differed on run {i}");
    }
}

#[test]
fn grid_tie_break_is_stable() {
    // Right edges come first, so BFS commits to the first-found route.
    let grid = Grid::new(3, 3).unwrap();
    let first = run_search(&grid, &RunPolicy::default()).unwrap();
    assert_eq!(
        first.path().unwrap().to_string(),
        "[g0_0, g1_0, g2_0, g2_1, g2_2]"
    );
    for i in 1..10 {
        let again = run_search(&grid, &RunPolicy::default()).unwrap();
        assert_eq!(first.path(), again.path(), "path differed on run {i}");
    }
}

// ---------------------------------------------------------------------------
// Harness layer
// ---------------------------------------------------------------------------

#[test]
fn bundle_digest_deterministic_n10() {
    let world = ReferenceGraph::new();
    let first = run_search(&world, &RunPolicy::default()).unwrap();
    for i in 1..10 {
        let result = run_search(&world, &RunPolicy::default()).unwrap();
        assert_eq!(first.digest(), result.digest(), "bundle digest differed on run {i}");
    }
}

#[test]
fn all_artifact_bytes_deterministic_n10() {
    let world = CustomGraph::new("random", random_graph(3, 40, 2), "n1", "n30").unwrap();
    let first = run_search(&world, &RunPolicy::default()).unwrap();
    for i in 1..10 {
        let result = run_search(&world, &RunPolicy::default()).unwrap();
        for (name, artifact) in &first.artifacts().artifacts {
            let other = result
                .artifacts()
                .get(name)
                .unwrap_or_else(|| panic!("missing artifact {name} on run {i}"));
            assert_eq!(artifact.content, other.content, "artifact {name} differed on run {i}");
        }
        assert_eq!(first.artifacts().manifest, result.artifacts().manifest);
    }
}

#[test]
fn insertion_order_does_not_matter() {
    let forward = random_graph(9, 30, 2);
    let mut entries: Vec<(String, Vec<String>)> = forward
        .iter()
        .map(|(node, neighbors)| (node.clone(), neighbors.to_vec()))
        .collect();
    entries.reverse();
    let reversed = entries.into_iter().collect();

    let a = CustomGraph::new("w", forward, "n0", "n29").unwrap();
    let b = CustomGraph::new("w", reversed, "n0", "n29").unwrap();
    assert_eq!(
        run_search(&a, &RunPolicy::default()).unwrap().digest(),
        run_search(&b, &RunPolicy::default()).unwrap().digest()
    );
}
