//! First-in-first-out frontier with a visited set and a parent-pointer arena.
//!
//! Uses a `BTreeSet` visited set (not `HashSet`) so that nothing about a
//! search depends on hasher state.

use std::collections::{BTreeSet, VecDeque};

use waypoint_kernel::graph::NodeId;

use crate::node::SearchNodeV1;

/// Breadth-first frontier manager.
///
/// Maintains:
/// - an arena of every entry ever enqueued, indexed by `node_id`
/// - a `VecDeque` of pending arena indices (FIFO)
/// - a `BTreeSet` of graph nodes already expanded
///
/// Duplicates are allowed on the queue; pruning happens on dequeue, through
/// [`FifoFrontier::mark_visited`].
#[derive(Debug)]
pub struct FifoFrontier<N> {
    arena: Vec<SearchNodeV1<N>>,
    queue: VecDeque<usize>,
    visited: BTreeSet<N>,
    high_water: u64,
}

impl<N: NodeId> FifoFrontier<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            queue: VecDeque::new(),
            visited: BTreeSet::new(),
            high_water: 0,
        }
    }

    /// Enqueue the start node. Returns its `node_id`.
    pub fn push_root(&mut self, state: N) -> u64 {
        self.enqueue(None, state, 0)
    }

    /// Enqueue `state` as a child of the entry `parent_id`.
    ///
    /// Returns the child's `node_id`, or `None` if `parent_id` is not in the
    /// arena.
    pub fn push_child(&mut self, parent_id: u64, state: N) -> Option<u64> {
        let depth = self.node(parent_id)?.depth.saturating_add(1);
        Some(self.enqueue(Some(parent_id), state, depth))
    }

    fn enqueue(&mut self, parent_id: Option<u64>, state: N, depth: u32) -> u64 {
        let index = self.arena.len();
        let node_id = index as u64;
        self.arena.push(SearchNodeV1 {
            node_id,
            parent_id,
            state,
            depth,
        });
        self.queue.push_back(index);
        let size = self.queue.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        node_id
    }

    /// Dequeue the oldest pending entry.
    pub fn pop(&mut self) -> Option<&SearchNodeV1<N>> {
        let index = self.queue.pop_front()?;
        self.arena.get(index)
    }

    /// Look up an arena entry by id.
    #[must_use]
    pub fn node(&self, node_id: u64) -> Option<&SearchNodeV1<N>> {
        usize::try_from(node_id)
            .ok()
            .and_then(|i| self.arena.get(i))
    }

    /// Mark `state` as expanded.
    ///
    /// Returns `false` if it was already marked.
    pub fn mark_visited(&mut self, state: &N) -> bool {
        if self.visited.contains(state) {
            return false;
        }
        self.visited.insert(state.clone())
    }

    #[must_use]
    pub fn is_visited(&self, state: &N) -> bool {
        self.visited.contains(state)
    }

    /// Pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Largest queue length seen.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Entries ever enqueued, including the root.
    #[must_use]
    pub fn total_enqueued(&self) -> u64 {
        self.arena.len() as u64
    }

    /// Walk parent links from `node_id` back to the root.
    ///
    /// Returns the states root-first, or an empty vector if `node_id` is not
    /// in the arena.
    #[must_use]
    pub fn path_to(&self, node_id: u64) -> Vec<N> {
        reconstruct_path(&self.arena, node_id)
    }

    /// Consume the frontier, yielding the arena in `node_id` order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<SearchNodeV1<N>> {
        self.arena
    }
}

impl<N: NodeId> Default for FifoFrontier<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconstruct the state sequence from the root to `node_id`.
///
/// `nodes` must be indexed by `node_id`, as produced by
/// [`FifoFrontier::into_nodes`].
#[must_use]
pub fn reconstruct_path<N: Clone>(nodes: &[SearchNodeV1<N>], node_id: u64) -> Vec<N> {
    let lookup = |id: u64| usize::try_from(id).ok().and_then(|i| nodes.get(i));

    let mut path = Vec::new();
    let mut current = lookup(node_id);
    while let Some(node) = current {
        path.push(node.state.clone());
        current = node.parent_id.and_then(lookup);
    }
    path.reverse();
    path
}
