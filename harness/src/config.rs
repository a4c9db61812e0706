//! Run configuration files.
//!
//! ```json
//! {
//!   "graph": {"A": ["B", "C"], "B": []},
//!   "start": "A",
//!   "goal": "B",
//!   "policy": {"max_expansions": 1000, "missing_node": "fail"}
//! }
//! ```
//!
//! `policy` and each of its fields are optional. Unknown fields are
//! rejected.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use waypoint_kernel::graph::AdjacencyGraph;
use waypoint_search::policy::UnknownMissingNodePolicy;
use waypoint_search::{MissingNodePolicyV1, SearchPolicyV1};

use crate::contract::WorldError;
use crate::policy::RunPolicy;
use crate::worlds::CustomGraph;

/// World id given to config-file worlds.
pub const CONFIG_WORLD_ID: &str = "config";

/// Error loading or interpreting a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid policy: {0}")]
    MissingNodePolicy(#[from] UnknownMissingNodePolicy),
    #[error(transparent)]
    World(#[from] WorldError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Adjacency lists, neighbor order preserved.
    pub graph: BTreeMap<String, Vec<String>>,
    pub start: String,
    pub goal: String,
    #[serde(default)]
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    #[serde(default)]
    pub max_expansions: Option<u64>,
    /// `"fail"` or `"treat_as_empty"`. Absent means `"fail"`.
    #[serde(default)]
    pub missing_node: Option<String>,
}

impl RunConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, missing required
    /// fields, or unknown fields.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or any
    /// [`RunConfig::from_json_bytes`] error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_bytes(&bytes)
    }

    /// The policy section as a [`RunPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingNodePolicy`] for an unknown
    /// `missing_node` name.
    pub fn run_policy(&self) -> Result<RunPolicy, ConfigError> {
        let missing_node = match &self.policy.missing_node {
            Some(name) => name.parse::<MissingNodePolicyV1>()?,
            None => MissingNodePolicyV1::default(),
        };
        Ok(RunPolicy {
            search: SearchPolicyV1 {
                max_expansions: self.policy.max_expansions,
            },
            missing_node,
        })
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::World`] if the world cannot be built.
    pub fn to_world(&self) -> Result<CustomGraph, ConfigError> {
        let graph: AdjacencyGraph<String> = self
            .graph
            .iter()
            .map(|(node, neighbors)| (node.clone(), neighbors.clone()))
            .collect();
        Ok(CustomGraph::new(
            CONFIG_WORLD_ID,
            graph,
            self.start.as_str(),
            self.goal.as_str(),
        )?)
    }
}
