//! `Grid`: a `width × height` lattice with right and down edges.
//!
//! Node `g{x}_{y}` points right to `g{x+1}_{y}` first, then down to
//! `g{x}_{y+1}`. The run asks for the top-left to bottom-right corner. Many
//! shortest paths exist, so the grid pins down tie-breaking.

use waypoint_kernel::graph::AdjacencyGraph;

use crate::contract::{WorldError, WorldV1};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    world_id: String,
    start: String,
    goal: String,
}

impl Grid {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidParameters`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, WorldError> {
        if width == 0 || height == 0 {
            return Err(WorldError::InvalidParameters {
                detail: format!("grid dimensions must be non-zero, got {width}x{height}"),
            });
        }
        Ok(Self {
            width,
            height,
            world_id: format!("grid_{width}x{height}"),
            start: node_name(0, 0),
            goal: node_name(width - 1, height - 1),
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Manhattan distance between the corners.
    #[must_use]
    pub fn shortest_distance(&self) -> usize {
        (self.width - 1) + (self.height - 1)
    }
}

#[must_use]
pub fn node_name(x: usize, y: usize) -> String {
    format!("g{x}_{y}")
}

impl WorldV1 for Grid {
    fn world_id(&self) -> &str {
        &self.world_id
    }

    fn graph(&self) -> AdjacencyGraph<String> {
        let mut graph = AdjacencyGraph::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let mut neighbors = Vec::with_capacity(2);
                if x + 1 < self.width {
                    neighbors.push(node_name(x + 1, y));
                }
                if y + 1 < self.height {
                    neighbors.push(node_name(x, y + 1));
                }
                graph.insert(node_name(x, y), neighbors);
            }
        }
        graph
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn goal(&self) -> &str {
        &self.goal
    }
}
