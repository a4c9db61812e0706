//! Proof module: canonical JSON and domain-separated hashing.
//!
//! Nothing in here knows about graphs or search.

pub mod canon;
pub mod hash;
pub mod hash_domain;
