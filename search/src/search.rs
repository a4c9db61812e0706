//! Agent and breadth-first expansion loop.

use waypoint_kernel::graph::NodeId;

use crate::audit::{
    DequeueEventV1, DequeueOutcomeV1, SearchAuditMetadata, SearchAuditV1, TerminationReasonV1,
};
use crate::contract::EnvironmentV1;
use crate::error::SearchError;
use crate::frontier::FifoFrontier;
use crate::node::{Path, SearchNodeV1};
use crate::policy::SearchPolicyV1;

/// Result of a search that ran to termination.
///
/// Always carries the audit trail. `path` is `Some` exactly when the audit's
/// termination reason is `GoalReached`.
#[derive(Debug, Clone)]
pub struct SearchResult<N> {
    /// A shortest path from start to goal, if one was found.
    pub path: Option<Path<N>>,
    /// The dequeue-event audit trail.
    pub audit: SearchAuditV1,
    /// Every frontier entry created, indexed by `node_id`.
    pub nodes: Vec<SearchNodeV1<N>>,
}

impl<N> SearchResult<N> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.audit.is_goal_reached()
    }
}

/// An agent situated in an environment, tasked with one start → goal search.
///
/// The agent holds no search state between calls: frontier and visited set
/// are created inside each [`Agent::search`], so repeated calls return
/// identical results.
#[derive(Debug)]
pub struct Agent<'e, E: EnvironmentV1 + ?Sized> {
    environment: &'e E,
    start: E::Node,
    goal: E::Node,
    policy: SearchPolicyV1,
}

impl<'e, E: EnvironmentV1 + ?Sized> Agent<'e, E> {
    /// Agent with the default (unbounded) policy.
    #[must_use]
    pub fn new(environment: &'e E, start: E::Node, goal: E::Node) -> Self {
        Self {
            environment,
            start,
            goal,
            policy: SearchPolicyV1::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicyV1) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn environment(&self) -> &'e E {
        self.environment
    }

    #[must_use]
    pub fn start(&self) -> &E::Node {
        &self.start
    }

    #[must_use]
    pub fn goal(&self) -> &E::Node {
        &self.goal
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicyV1 {
        &self.policy
    }

    /// Find a shortest (fewest edges) path from start to goal.
    ///
    /// Returns `Ok(None)` if the goal is unreachable, or if the policy's
    /// expansion budget ran out first.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Environment`] if a neighbor lookup fails (by
    /// default: a node reached during the search is not in the graph), and
    /// [`SearchError::InvalidPolicy`] if the policy is rejected.
    pub fn find_path(&self) -> Result<Option<Path<E::Node>>, SearchError> {
        Ok(self.search()?.path)
    }

    /// Run the search and return the path together with its audit trail.
    ///
    /// # Errors
    ///
    /// Same as [`Agent::find_path`].
    pub fn search(&self) -> Result<SearchResult<E::Node>, SearchError> {
        breadth_first_search(self.environment, &self.start, &self.goal, &self.policy)
    }
}

/// Uninformed breadth-first search from `start` to `goal`.
///
/// The goal test runs when an entry is dequeued, before the visited check.
/// Neighbors are enqueued in the order the environment returns them, even
/// if already visited; stale entries are discarded when popped. Because the
/// frontier is FIFO, every path of length `k` is dequeued before any path of
/// length `k + 1`, so the first goal match is a shortest path. Ties go to
/// the path found first in neighbor order.
///
/// Once `policy.max_expansions` is spent, the remaining entries are still
/// dequeued and tested against the goal but never expanded. Any goal already
/// on the frontier is matched; otherwise the search ends with
/// [`TerminationReasonV1::ExpansionBudgetExceeded`] when the queue drains.
///
/// # Errors
///
/// A failed neighbor lookup aborts the search with
/// [`SearchError::Environment`]; no partial result is returned.
pub fn breadth_first_search<E: EnvironmentV1 + ?Sized>(
    environment: &E,
    start: &E::Node,
    goal: &E::Node,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<E::Node>, SearchError> {
    policy.validate()?;

    let mut frontier = FifoFrontier::new();
    let mut events: Vec<DequeueEventV1> = Vec::new();
    let mut expansion_count: u64 = 0;
    let mut discarded_count: u64 = 0;
    let mut budget_skipped: u64 = 0;

    frontier.push_root(start.clone());

    let termination_reason = loop {
        let Some(current) = frontier.pop().cloned() else {
            if budget_skipped > 0 {
                break TerminationReasonV1::ExpansionBudgetExceeded;
            }
            break TerminationReasonV1::FrontierExhausted;
        };
        let dequeue_order = events.len() as u64;

        tracing::trace!(
            node = %current.state,
            node_id = current.node_id,
            depth = current.depth,
            "dequeue"
        );

        if current.state == *goal {
            events.push(dequeue_event(
                dequeue_order,
                &current,
                DequeueOutcomeV1::GoalMatched,
            ));
            break TerminationReasonV1::GoalReached {
                node_id: current.node_id,
            };
        }

        if frontier.is_visited(&current.state) {
            discarded_count += 1;
            events.push(dequeue_event(
                dequeue_order,
                &current,
                DequeueOutcomeV1::DiscardedVisited,
            ));
            continue;
        }

        // Out of budget: keep draining for a goal match, expand nothing.
        if policy.budget_exhausted(expansion_count) {
            if budget_skipped == 0 {
                tracing::debug!(
                    expansions = expansion_count,
                    pending = frontier.len(),
                    "expansion budget spent, draining frontier"
                );
            }
            budget_skipped += 1;
            events.push(dequeue_event(
                dequeue_order,
                &current,
                DequeueOutcomeV1::BudgetExhausted,
            ));
            continue;
        }

        frontier.mark_visited(&current.state);
        let neighbors = environment
            .neighbors(&current.state)
            .inspect_err(|e| {
                tracing::warn!(node = %current.state, error = %e, "neighbor lookup failed");
            })?;
        expansion_count += 1;

        let mut enqueued = Vec::with_capacity(neighbors.len());
        for neighbor in neighbors {
            if let Some(child_id) = frontier.push_child(current.node_id, neighbor.clone()) {
                enqueued.push(child_id);
            }
        }
        tracing::trace!(
            node = %current.state,
            children = enqueued.len(),
            "expanded"
        );
        events.push(dequeue_event(
            dequeue_order,
            &current,
            DequeueOutcomeV1::Expanded { enqueued },
        ));
    };

    let path = match termination_reason {
        TerminationReasonV1::GoalReached { node_id } => {
            Path::from_nodes(frontier.path_to(node_id))
        }
        TerminationReasonV1::FrontierExhausted | TerminationReasonV1::ExpansionBudgetExceeded => {
            None
        }
    };

    tracing::debug!(
        start = %start,
        goal = %goal,
        reason = termination_reason.as_str(),
        expansions = expansion_count,
        path_edges = ?path.as_ref().map(Path::edge_count),
        "search finished"
    );

    let metadata = SearchAuditMetadata {
        start: start.to_string(),
        goal: goal.to_string(),
        total_dequeues: events.len() as u64,
        total_expansions: expansion_count,
        total_enqueued: frontier.total_enqueued(),
        total_discarded: discarded_count,
        frontier_high_water: frontier.high_water(),
        termination_reason,
        max_expansions: policy.max_expansions,
    };

    Ok(SearchResult {
        path,
        audit: SearchAuditV1 { events, metadata },
        nodes: frontier.into_nodes(),
    })
}

fn dequeue_event<N: NodeId>(
    dequeue_order: u64,
    node: &SearchNodeV1<N>,
    outcome: DequeueOutcomeV1,
) -> DequeueEventV1 {
    DequeueEventV1 {
        dequeue_order,
        node_id: node.node_id,
        parent_id: node.parent_id,
        node: node.state.to_string(),
        depth: node.depth,
        outcome,
    }
}
