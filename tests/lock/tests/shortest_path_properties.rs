//! Shortest-path properties on seeded random graphs, checked against the
//! independent distance oracle in `lock_tests`.

use lock_tests::{is_walk, random_graph, reference_distance};
use waypoint_kernel::graph::AdjacencyGraph;
use waypoint_search::{Agent, GraphEnvironment, SearchPolicyV1};

const SEEDS: u64 = 40;
const NODES: u64 = 24;

fn endpoints(node_count: u64) -> impl Iterator<Item = (String, String)> {
    (0..node_count).step_by(5).flat_map(move |s| {
        (0..node_count)
            .step_by(3)
            .map(move |g| (format!("n{s}"), format!("n{g}")))
    })
}

fn find(graph: &AdjacencyGraph<String>, start: &str, goal: &str) -> Option<Vec<String>> {
    let environment = GraphEnvironment::new(graph);
    Agent::new(&environment, start.to_string(), goal.to_string())
        .find_path()
        .unwrap()
        .map(waypoint_search::Path::into_nodes)
}

// ---------------------------------------------------------------------------
// Path shape
// ---------------------------------------------------------------------------

#[test]
fn found_paths_are_walks_from_start_to_goal() {
    for seed in 0..SEEDS {
        let graph = random_graph(seed, NODES, 2);
        for (start, goal) in endpoints(NODES) {
            let Some(path) = find(&graph, &start, &goal) else {
                continue;
            };
            assert_eq!(path.first(), Some(&start), "seed {seed}");
            assert_eq!(path.last(), Some(&goal), "seed {seed}");
            assert!(is_walk(&graph, &path), "seed {seed}: {path:?} is not a walk");
        }
    }
}

#[test]
fn found_paths_have_no_repeated_nodes() {
    for seed in 0..SEEDS {
        let graph = random_graph(seed, NODES, 3);
        for (start, goal) in endpoints(NODES) {
            if let Some(path) = find(&graph, &start, &goal) {
                let mut sorted = path.clone();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), path.len(), "seed {seed}: {path:?}");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Optimality and completeness
// ---------------------------------------------------------------------------

#[test]
fn path_length_matches_oracle_distance() {
    for seed in 0..SEEDS {
        let graph = random_graph(seed, NODES, 2);
        for (start, goal) in endpoints(NODES) {
            let expected = reference_distance(&graph, &start, &goal);
            let actual = find(&graph, &start, &goal).map(|p| p.len() - 1);
            assert_eq!(
                actual, expected,
                "seed {seed}: {start} -> {goal} disagrees with oracle"
            );
        }
    }
}

#[test]
fn sparse_graphs_have_unreachable_pairs() {
    let mut unreachable = 0;
    for seed in 0..SEEDS {
        let graph = random_graph(seed, NODES, 1);
        for (start, goal) in endpoints(NODES) {
            if reference_distance(&graph, &start, &goal).is_none() {
                unreachable += 1;
                assert_eq!(find(&graph, &start, &goal), None, "seed {seed}");
            }
        }
    }
    assert!(unreachable > 0, "fixture never exercised not-found");
}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

#[test]
fn generous_budget_changes_nothing() {
    for seed in 0..10 {
        let graph = random_graph(seed, NODES, 2);
        let environment = GraphEnvironment::new(&graph);
        for (start, goal) in endpoints(NODES) {
            let unbounded = Agent::new(&environment, start.clone(), goal.clone())
                .find_path()
                .unwrap();
            let bounded = Agent::new(&environment, start, goal)
                .with_policy(SearchPolicyV1::with_max_expansions(NODES))
                .find_path()
                .unwrap();
            assert_eq!(unbounded, bounded, "seed {seed}");
        }
    }
}

#[test]
fn expansions_never_exceed_budget() {
    for seed in 0..10 {
        let graph = random_graph(seed, NODES, 3);
        let environment = GraphEnvironment::new(&graph);
        for budget in 1..6 {
            let result = Agent::new(&environment, "n0".to_string(), "n23".to_string())
                .with_policy(SearchPolicyV1::with_max_expansions(budget))
                .search()
                .unwrap();
            assert!(result.audit.metadata.total_expansions <= budget);
        }
    }
}

#[test]
fn budgeted_paths_are_still_shortest() {
    for seed in 0..10 {
        let graph = random_graph(seed, NODES, 3);
        let environment = GraphEnvironment::new(&graph);
        for (start, goal) in endpoints(NODES) {
            for budget in 1..4 {
                let Some(path) = Agent::new(&environment, start.clone(), goal.clone())
                    .with_policy(SearchPolicyV1::with_max_expansions(budget))
                    .find_path()
                    .unwrap()
                else {
                    continue;
                };
                assert_eq!(
                    Some(path.edge_count()),
                    reference_distance(&graph, &start, &goal),
                    "seed {seed}, budget {budget}, {start} -> {goal}"
                );
            }
        }
    }
}
