//! Waypoint Search: breadth-first path planning with an auditable event log.
//!
//! This crate provides the search layer. It depends only on
//! `waypoint_kernel` and does NOT depend on `waypoint_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (graph, digests)    (agent, frontier)    (worlds, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`EnvironmentV1`]: trait for passive neighbor sources
//! - [`GraphEnvironment`]: environment over a fixed adjacency graph
//! - [`Agent`]: owns a start/goal pair and runs the search
//! - [`Path`]: start-to-goal node sequence
//! - [`SearchAuditV1`]: dequeue-event audit log
//! - [`SearchPolicyV1`]: optional expansion budget
//!
//! # Example
//!
//! ```
//! use waypoint_kernel::graph::AdjacencyGraph;
//! use waypoint_search::{Agent, GraphEnvironment};
//!
//! let graph = AdjacencyGraph::from_literal(&[
//!     ("A", &["B", "C"]),
//!     ("B", &["D", "E"]),
//!     ("C", &["F"]),
//!     ("D", &[]),
//!     ("E", &["F"]),
//!     ("F", &[]),
//! ]);
//! let environment = GraphEnvironment::new(&graph);
//! let agent = Agent::new(&environment, "A".to_string(), "F".to_string());
//!
//! let path = agent.find_path().unwrap().unwrap();
//! assert_eq!(path.to_string(), "[A, C, F]");
//! ```

#![forbid(unsafe_code)]

pub mod audit;
pub mod contract;
pub mod environment;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;

pub use audit::{SearchAuditV1, TerminationReasonV1};
pub use contract::EnvironmentV1;
pub use environment::GraphEnvironment;
pub use error::{EnvironmentError, SearchError};
pub use node::Path;
pub use policy::{MissingNodePolicyV1, SearchPolicyV1};
pub use search::{breadth_first_search, Agent, SearchResult};
