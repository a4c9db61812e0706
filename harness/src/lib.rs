//! Waypoint Harness: world-level orchestration for the search crate.
//!
//! The harness runs a world's start → goal search through
//! `waypoint_search` and packages the result as a self-contained artifact
//! bundle (graph, policy snapshot, audit log, report).
//!
//! The harness does NOT implement search logic; it delegates to the
//! search crate. Worlds provide graph data only; the harness owns
//! orchestration, policy, and persistence.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bundle;
pub mod bundle_dir;
pub mod config;
pub mod contract;
pub mod policy;
pub mod runner;
pub mod worlds;
