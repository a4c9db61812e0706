//! `CustomGraph`: a world over caller-supplied graph data.
//!
//! Used for config files and `--graph` input.

use waypoint_kernel::graph::AdjacencyGraph;

use crate::contract::{WorldError, WorldV1};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomGraph {
    world_id: String,
    graph: AdjacencyGraph<String>,
    start: String,
    goal: String,
}

impl CustomGraph {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidParameters`] if `world_id` is empty.
    pub fn new(
        world_id: impl Into<String>,
        graph: AdjacencyGraph<String>,
        start: impl Into<String>,
        goal: impl Into<String>,
    ) -> Result<Self, WorldError> {
        let world_id = world_id.into();
        if world_id.is_empty() {
            return Err(WorldError::InvalidParameters {
                detail: "world_id must not be empty".into(),
            });
        }
        Ok(Self {
            world_id,
            graph,
            start: start.into(),
            goal: goal.into(),
        })
    }
}

impl WorldV1 for CustomGraph {
    fn world_id(&self) -> &str {
        &self.world_id
    }

    fn graph(&self) -> AdjacencyGraph<String> {
        self.graph.clone()
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn goal(&self) -> &str {
        &self.goal
    }
}
