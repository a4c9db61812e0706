//! Binary that runs the built-in worlds through the harness runner and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: `<world>.<key>=<value>` lines, one block per world.

use waypoint_harness::contract::WorldV1;
use waypoint_harness::policy::RunPolicy;
use waypoint_harness::runner::run_search;
use waypoint_harness::worlds::{Grid, ReferenceGraph, Ring};

fn main() {
    let worlds: Vec<Box<dyn WorldV1>> = vec![
        Box::new(ReferenceGraph::new()),
        Box::new(ReferenceGraph::with_endpoints("D", "A")),
        Box::new(Ring::new(12).expect("valid ring")),
        Box::new(Grid::new(5, 4).expect("valid grid")),
    ];

    for (i, world) in worlds.iter().enumerate() {
        let bundle = run_search(world.as_ref(), &RunPolicy::default()).expect("search run failed");
        let audit = bundle.audit();
        let prefix = format!("{i}.{}", world.world_id());

        println!("{prefix}.bundle_digest={}", bundle.digest());
        println!(
            "{prefix}.audit_digest={}",
            audit.digest().expect("audit digest")
        );
        println!(
            "{prefix}.path={}",
            bundle
                .path()
                .map_or_else(|| "none".to_string(), ToString::to_string)
        );
        println!(
            "{prefix}.termination_reason={}",
            bundle.outcome().as_str()
        );
        println!(
            "{prefix}.total_expansions={}",
            audit.metadata.total_expansions
        );
        println!(
            "{prefix}.artifact_count={}",
            bundle.artifacts().artifacts.len()
        );
    }
}
