//! Waypoint Kernel: the static graph model and canonical digests.
//!
//! # API Surface
//!
//! - [`graph::AdjacencyGraph`] -- a fixed adjacency mapping from node to an
//!   ordered list of neighbors
//! - [`proof::canon::canonical_json_bytes`] -- the single serializer used for
//!   anything that gets hashed
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256
//!
//! # Module Dependency Direction
//!
//! `proof` ← `graph`
//!
//! One-way only. `graph` uses `proof` to compute graph digests; `proof`
//! depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod proof;
