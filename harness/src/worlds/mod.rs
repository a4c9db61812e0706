//! World implementations for the harness runner.

pub mod custom;
pub mod grid;
pub mod reference_graph;
pub mod ring;

pub use custom::CustomGraph;
pub use grid::Grid;
pub use reference_graph::ReferenceGraph;
pub use ring::Ring;
