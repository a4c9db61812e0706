//! Static adjacency graph.
//!
//! An [`AdjacencyGraph`] maps every node to the ordered list of nodes it has
//! an outgoing edge to. Neighbor order is significant: breadth-first search
//! enqueues neighbors in exactly this order, so it decides which of several
//! equally short paths is found first.
//!
//! The graph is expected to list every neighbor as a key of its own (a node
//! with no outgoing edges maps to an empty list). That invariant is not
//! enforced on construction; [`AdjacencyGraph::dangling_neighbors`] reports
//! the edges that break it, and lookups of absent keys return `None`.

mod json;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::Hash;

pub use json::GraphError;

use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Bounds every node identifier must satisfy.
///
/// Nodes are opaque tokens: comparable, hashable, cheap to clone, and
/// printable for audit logs and error messages.
///
/// Audit records identify nodes by their `Display` output, so distinct nodes
/// must print distinctly for an audit to be unambiguous. Persisted graphs are
/// string-keyed (see [`AdjacencyGraph::canonical_bytes`]), which holds
/// trivially.
pub trait NodeId: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

/// A fixed mapping from node to ordered neighbor list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<N> {
    adjacency: BTreeMap<N, Vec<N>>,
}

impl<N: NodeId> AdjacencyGraph<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Set the neighbor list of `node`, replacing any previous list.
    ///
    /// Returns the previous list if `node` was already present.
    pub fn insert<I>(&mut self, node: N, neighbors: I) -> Option<Vec<N>>
    where
        I: IntoIterator<Item = N>,
    {
        self.adjacency
            .insert(node, neighbors.into_iter().collect())
    }

    /// Ordered neighbors of `node`, or `None` if `node` is not a key.
    #[must_use]
    pub fn neighbors(&self, node: &N) -> Option<&[N]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total number of directed edges, counting duplicates.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Keys in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// `(node, neighbors)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &[N])> {
        self.adjacency.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Edges `(from, to)` whose target is not a key, sorted and deduplicated.
    #[must_use]
    pub fn dangling_neighbors(&self) -> Vec<(N, N)> {
        let mut dangling = BTreeSet::new();
        for (from, neighbors) in &self.adjacency {
            for to in neighbors {
                if !self.adjacency.contains_key(to) {
                    dangling.insert((from.clone(), to.clone()));
                }
            }
        }
        dangling.into_iter().collect()
    }
}

impl<N: NodeId> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> FromIterator<(N, Vec<N>)> for AdjacencyGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}

impl AdjacencyGraph<String> {
    /// Build a string-keyed graph from `(&str, &[&str])` literals.
    ///
    /// ```
    /// use waypoint_kernel::graph::AdjacencyGraph;
    ///
    /// let g = AdjacencyGraph::from_literal(&[("A", &["B"]), ("B", &[])]);
    /// assert_eq!(g.neighbors(&"A".to_string()), Some(&["B".to_string()][..]));
    /// ```
    #[must_use]
    pub fn from_literal(entries: &[(&str, &[&str])]) -> Self {
        entries
            .iter()
            .map(|(node, neighbors)| {
                (
                    (*node).to_string(),
                    neighbors.iter().map(|n| (*n).to_string()).collect(),
                )
            })
            .collect()
    }

    /// JSON object form: `{"A": ["B", "C"], ...}`.
    ///
    /// Only string-keyed graphs have a canonical form: node names are
    /// written as-is, so two distinct nodes can never share a JSON key.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .adjacency
            .iter()
            .map(|(node, neighbors)| {
                let list = neighbors
                    .iter()
                    .map(|n| serde_json::Value::String(n.clone()))
                    .collect();
                (node.clone(), serde_json::Value::Array(list))
            })
            .collect();
        serde_json::Value::Object(map)
    }

    /// Canonical JSON bytes of [`Self::to_json_value`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`]; the graph form contains no numbers, so this
    /// does not fail in practice.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical form under [`HashDomain::Graph`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from [`Self::canonical_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(HashDomain::Graph, &self.canonical_bytes()?))
    }
}
