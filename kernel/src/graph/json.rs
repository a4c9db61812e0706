//! JSON input form for string-keyed graphs.
//!
//! Accepted shape: a single object whose values are arrays of strings.
//!
//! ```json
//! {"A": ["B", "C"], "B": ["D"], "C": [], "D": []}
//! ```

use serde_json::Value;

use super::AdjacencyGraph;

/// Typed failure while reading a graph from JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Input was not valid JSON.
    #[error("graph is not valid JSON: {detail}")]
    InvalidJson { detail: String },
    /// Top-level value was not an object.
    #[error("graph must be a JSON object mapping node to neighbor list, got {found}")]
    NotAnObject { found: &'static str },
    /// A node's value was not an array.
    #[error("neighbors of node {node:?} must be an array, got {found}")]
    NeighborsNotArray { node: String, found: &'static str },
    /// A neighbor entry was not a string.
    #[error("neighbor #{index} of node {node:?} must be a string, got {found}")]
    NeighborNotString {
        node: String,
        index: usize,
        found: &'static str,
    },
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl AdjacencyGraph<String> {
    /// Parse a graph from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if the bytes are not JSON or not of the shape
    /// described in the module docs.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, GraphError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| GraphError::InvalidJson {
                detail: e.to_string(),
            })?;
        Self::from_json_value(&value)
    }

    /// Build a graph from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if `value` is not an object of string arrays.
    pub fn from_json_value(value: &Value) -> Result<Self, GraphError> {
        let Value::Object(map) = value else {
            return Err(GraphError::NotAnObject { found: kind(value) });
        };

        let mut graph = Self::new();
        for (node, raw) in map {
            let Value::Array(items) = raw else {
                return Err(GraphError::NeighborsNotArray {
                    node: node.clone(),
                    found: kind(raw),
                });
            };
            let mut neighbors = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let Value::String(n) = item else {
                    return Err(GraphError::NeighborNotString {
                        node: node.clone(),
                        index,
                        found: kind(item),
                    });
                };
                neighbors.push(n.clone());
            }
            graph.insert(node.clone(), neighbors);
        }
        Ok(graph)
    }
}
