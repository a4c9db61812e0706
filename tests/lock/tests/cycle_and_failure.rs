//! Cycle safety and lookup-failure propagation.

use waypoint_harness::contract::WorldV1;
use waypoint_harness::worlds::Ring;
use waypoint_kernel::graph::AdjacencyGraph;
use waypoint_search::audit::DequeueOutcomeV1;
use waypoint_search::{
    Agent, EnvironmentError, EnvironmentV1, GraphEnvironment, SearchError, TerminationReasonV1,
};

// ---------------------------------------------------------------------------
// Cycles
// ---------------------------------------------------------------------------

#[test]
fn self_loop_and_two_cycle_terminate() {
    let graph = AdjacencyGraph::from_literal(&[("A", &["A", "B"]), ("B", &["A"])]);
    let environment = GraphEnvironment::new(&graph);
    let result = Agent::new(&environment, "A".to_string(), "C".to_string())
        .search()
        .unwrap();
    assert!(result.path.is_none());
    assert_eq!(
        result.audit.metadata.termination_reason,
        TerminationReasonV1::FrontierExhausted
    );
    // Each node is expanded once, however often it is enqueued.
    assert_eq!(result.audit.metadata.total_expansions, 2);
}

#[test]
fn ring_without_goal_expands_every_node_once() {
    let ring = Ring::new(16).unwrap();
    let graph = ring.graph();
    let environment = GraphEnvironment::new(&graph);
    let result = Agent::new(&environment, "r0".to_string(), "elsewhere".to_string())
        .search()
        .unwrap();

    assert!(result.path.is_none());
    assert_eq!(result.audit.metadata.total_expansions, 16);
    // 1 root + 16 successor edges + 1 chord.
    assert_eq!(result.audit.metadata.total_enqueued, 18);
    assert_eq!(
        result.audit.metadata.total_dequeues,
        result.audit.metadata.total_expansions + result.audit.metadata.total_discarded
    );
}

#[test]
fn ring_chord_copy_is_discarded() {
    let ring = Ring::new(8).unwrap();
    let graph = ring.graph();
    let environment = GraphEnvironment::new(&graph);
    let result = Agent::new(&environment, ring.start().to_string(), ring.goal().to_string())
        .search()
        .unwrap();

    assert_eq!(result.path.unwrap().edge_count(), ring.shortest_distance());
    let discarded: Vec<&str> = result
        .audit
        .events
        .iter()
        .filter(|e| e.outcome == DequeueOutcomeV1::DiscardedVisited)
        .map(|e| e.node.as_str())
        .collect();
    assert_eq!(discarded, vec!["r4"]);
}

// ---------------------------------------------------------------------------
// Lookup failures
// ---------------------------------------------------------------------------

/// Environment that fails for one chosen node and otherwise delegates.
struct FailingAt<'g> {
    inner: GraphEnvironment<'g, String>,
    poisoned: String,
}

impl EnvironmentV1 for FailingAt<'_> {
    type Node = String;

    fn neighbors(&self, node: &String) -> Result<&[String], EnvironmentError> {
        if *node == self.poisoned {
            return Err(EnvironmentError::NodeNotFound { node: node.clone() });
        }
        self.inner.neighbors(node)
    }
}

#[test]
fn failure_deep_in_the_search_aborts_it() {
    let graph = AdjacencyGraph::from_literal(&[
        ("A", &["B"]),
        ("B", &["C"]),
        ("C", &["D"]),
        ("D", &[]),
    ]);
    let environment = FailingAt {
        inner: GraphEnvironment::new(&graph),
        poisoned: "C".into(),
    };
    let err = Agent::new(&environment, "A".to_string(), "D".to_string())
        .search()
        .unwrap_err();
    assert_eq!(
        err,
        SearchError::Environment(EnvironmentError::NodeNotFound { node: "C".into() })
    );
}

#[test]
fn failure_after_goal_is_never_reached() {
    let graph = AdjacencyGraph::from_literal(&[("A", &["B", "C"]), ("B", &[]), ("C", &[])]);
    let environment = FailingAt {
        inner: GraphEnvironment::new(&graph),
        poisoned: "C".into(),
    };
    let path = Agent::new(&environment, "A".to_string(), "B".to_string())
        .find_path()
        .unwrap();
    assert_eq!(path.unwrap().to_string(), "[A, B]");
}

#[test]
fn dangling_edge_surfaces_only_when_reached() {
    let graph = AdjacencyGraph::from_literal(&[("A", &["B", "X"]), ("B", &[])]);
    let environment = GraphEnvironment::new(&graph);

    let to_b = Agent::new(&environment, "A".to_string(), "B".to_string());
    assert_eq!(to_b.find_path().unwrap().unwrap().to_string(), "[A, B]");

    let to_c = Agent::new(&environment, "A".to_string(), "C".to_string());
    assert_eq!(to_c.find_path().unwrap_err().missing_node(), Some("X"));
}
