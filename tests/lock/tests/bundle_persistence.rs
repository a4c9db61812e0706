//! Bundles written to disk read back and verify; config files drive runs.

use waypoint_harness::bundle::verify_bundle;
use waypoint_harness::bundle_dir::{
    read_bundle_dir, verify_bundle_dir, write_bundle_dir, BundleDirError,
};
use waypoint_harness::config::RunConfig;
use waypoint_harness::contract::WorldV1;
use waypoint_harness::policy::RunPolicy;
use waypoint_harness::runner::{
    run_config, run_search, RunError, AUDIT_ARTIFACT, GRAPH_ARTIFACT,
};
use waypoint_harness::worlds::ReferenceGraph;
use waypoint_kernel::graph::AdjacencyGraph;
use waypoint_search::{SearchAuditV1, TerminationReasonV1};

// ---------------------------------------------------------------------------
// Bundle directory
// ---------------------------------------------------------------------------

#[test]
fn written_run_bundle_verifies_offline() {
    let run = run_search(&ReferenceGraph::new(), &RunPolicy::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_bundle_dir(run.artifacts(), dir.path()).unwrap();

    verify_bundle_dir(dir.path()).unwrap();
    let loaded = read_bundle_dir(dir.path()).unwrap();
    assert_eq!(&loaded.digest, run.digest());
    verify_bundle(&loaded).unwrap();
}

#[test]
fn graph_artifact_reparses_to_the_world_graph() {
    let run = run_search(&ReferenceGraph::new(), &RunPolicy::default()).unwrap();
    let artifact = run.artifacts().get(GRAPH_ARTIFACT).unwrap();
    let graph = AdjacencyGraph::from_json_bytes(&artifact.content).unwrap();
    assert_eq!(
        graph.digest().unwrap(),
        ReferenceGraph::new().graph().digest().unwrap()
    );
}

#[test]
fn audit_artifact_matches_typed_audit() {
    let run = run_search(&ReferenceGraph::new(), &RunPolicy::default()).unwrap();
    let artifact = run.artifacts().get(AUDIT_ARTIFACT).unwrap();
    let typed: &SearchAuditV1 = run.audit();
    assert_eq!(artifact.content, typed.to_canonical_json_bytes().unwrap());

    let value: serde_json::Value = serde_json::from_slice(&artifact.content).unwrap();
    assert_eq!(value["metadata"]["termination_reason"]["type"], "goal_reached");
    assert_eq!(value["metadata"]["start"], "A");
}

#[test]
fn tampered_audit_on_disk_fails_verification() {
    let run = run_search(&ReferenceGraph::new(), &RunPolicy::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_bundle_dir(run.artifacts(), dir.path()).unwrap();
    std::fs::write(dir.path().join(AUDIT_ARTIFACT), b"{}").unwrap();

    let err = verify_bundle_dir(dir.path()).unwrap_err();
    assert!(matches!(err, BundleDirError::Verify(_)), "got {err:?}");
}

// ---------------------------------------------------------------------------
// Config files
// ---------------------------------------------------------------------------

#[test]
fn config_file_with_budget_runs_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    std::fs::write(
        &path,
        br#"{
            "graph": {"A": ["B"], "B": ["C"], "C": ["D"], "D": []},
            "start": "A",
            "goal": "D",
            "policy": {"max_expansions": 2}
        }"#,
    )
    .unwrap();

    let config = RunConfig::load(&path).unwrap();
    let run = run_config(&config).unwrap();
    assert!(run.path().is_none());
    assert_eq!(run.outcome(), TerminationReasonV1::ExpansionBudgetExceeded);
    assert_eq!(run.audit().metadata.total_expansions, 2);
}

#[test]
fn config_file_with_dangling_edge_needs_lenient_policy() {
    let strict = RunConfig::from_json_bytes(
        br#"{"graph": {"A": ["X", "B"], "B": []}, "start": "A", "goal": "C"}"#,
    )
    .unwrap();
    let err = run_config(&strict).unwrap_err();
    assert!(matches!(err, RunError::Search(ref e) if e.missing_node() == Some("X")));

    let lenient = RunConfig::from_json_bytes(
        br#"{"graph": {"A": ["X", "B"], "B": []}, "start": "A", "goal": "C",
             "policy": {"missing_node": "treat_as_empty"}}"#,
    )
    .unwrap();
    let run = run_config(&lenient).unwrap();
    assert_eq!(run.outcome(), TerminationReasonV1::FrontierExhausted);
}

#[test]
fn config_with_bad_policy_name_fails_the_run() {
    let config = RunConfig::from_json_bytes(
        br#"{"graph": {}, "start": "A", "goal": "A", "policy": {"missing_node": "maybe"}}"#,
    )
    .unwrap();
    assert!(matches!(run_config(&config), Err(RunError::Config(_))));
}
