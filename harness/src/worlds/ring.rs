//! `Ring`: a directed cycle with one chord.
//!
//! Nodes `r0 .. r{n-1}`. Each `ri` points to `r{(i+1) % n}`; `r0` also
//! points to `r{n/2}`. The run asks for `r0 → r{n-1}`. The chord reaches
//! `r{n/2}` ahead of the arc, so the arc's later copy of it is discarded
//! as already visited.

use waypoint_kernel::graph::AdjacencyGraph;

use crate::contract::{WorldError, WorldV1};

/// Smallest ring whose chord is not also the successor edge.
pub const MIN_RING_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    size: usize,
    world_id: String,
    start: String,
    goal: String,
}

impl Ring {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidParameters`] if `size < MIN_RING_SIZE`.
    pub fn new(size: usize) -> Result<Self, WorldError> {
        if size < MIN_RING_SIZE {
            return Err(WorldError::InvalidParameters {
                detail: format!("ring size {size} is below {MIN_RING_SIZE}"),
            });
        }
        Ok(Self {
            size,
            world_id: format!("ring_{size}"),
            start: node_name(0),
            goal: node_name(size - 1),
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Edges on the shortest `r0 → r{n-1}` path: the chord, then the arc.
    #[must_use]
    pub fn shortest_distance(&self) -> usize {
        1 + (self.size - 1 - self.size / 2)
    }
}

fn node_name(i: usize) -> String {
    format!("r{i}")
}

impl WorldV1 for Ring {
    fn world_id(&self) -> &str {
        &self.world_id
    }

    fn graph(&self) -> AdjacencyGraph<String> {
        let n = self.size;
        (0..n)
            .map(|i| {
                let mut neighbors = vec![node_name((i + 1) % n)];
                if i == 0 {
                    neighbors.push(node_name(n / 2));
                }
                (node_name(i), neighbors)
            })
            .collect()
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn goal(&self) -> &str {
        &self.goal
    }
}
