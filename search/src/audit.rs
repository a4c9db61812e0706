//! `SearchAuditV1`: dequeue-event audit log.
//!
//! The normative record of a search is the ordered list of
//! [`DequeueEventV1`] entries: one per frontier pop, in pop order. Counters
//! in [`SearchAuditMetadata`] are derived from the same run.

use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// The complete search audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAuditV1 {
    /// Ordered dequeue events.
    pub events: Vec<DequeueEventV1>,
    /// Aggregate counters and termination reason.
    pub metadata: SearchAuditMetadata,
}

/// A single frontier pop and what was done with the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DequeueEventV1 {
    /// Total order of frontier pops.
    pub dequeue_order: u64,
    /// Arena id of the popped entry.
    pub node_id: u64,
    pub parent_id: Option<u64>,
    /// The graph node, rendered with `Display`.
    pub node: String,
    pub depth: u32,
    pub outcome: DequeueOutcomeV1,
}

/// What happened to a popped entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DequeueOutcomeV1 {
    /// The entry's node is the goal; the search stopped here.
    GoalMatched,
    /// First visit: neighbors were queried and enqueued as these ids.
    Expanded { enqueued: Vec<u64> },
    /// The node had already been expanded; entry dropped.
    DiscardedVisited,
    /// The expansion budget was spent; the entry was tested against the goal
    /// and dropped unexpanded.
    BudgetExhausted,
}

/// Aggregate metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAuditMetadata {
    pub start: String,
    pub goal: String,

    // Counters
    pub total_dequeues: u64,
    pub total_expansions: u64,
    pub total_enqueued: u64,
    pub total_discarded: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReasonV1,

    // Policy echo
    pub max_expansions: Option<u64>,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The goal was dequeued.
    GoalReached { node_id: u64 },
    /// Frontier emptied without reaching the goal.
    FrontierExhausted,
    /// `max_expansions` was hit and the frontier drained without a goal
    /// match.
    ExpansionBudgetExceeded,
}

impl TerminationReasonV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

impl SearchAuditV1 {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.metadata.termination_reason,
            TerminationReasonV1::GoalReached { .. }
        )
    }

    /// Serialize to canonical JSON bytes (sorted keys, compact).
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical bytes under [`HashDomain::SearchAudit`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::SearchAudit,
            &self.to_canonical_json_bytes()?,
        ))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "events": self.events.iter().map(event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn event_to_json(e: &DequeueEventV1) -> serde_json::Value {
    serde_json::json!({
        "depth": e.depth,
        "dequeue_order": e.dequeue_order,
        "node": e.node,
        "node_id": e.node_id,
        "outcome": outcome_to_json(&e.outcome),
        "parent_id": e.parent_id,
    })
}

fn outcome_to_json(o: &DequeueOutcomeV1) -> serde_json::Value {
    match o {
        DequeueOutcomeV1::GoalMatched => serde_json::json!({"type": "goal_matched"}),
        DequeueOutcomeV1::Expanded { enqueued } => {
            serde_json::json!({"enqueued": enqueued, "type": "expanded"})
        }
        DequeueOutcomeV1::DiscardedVisited => serde_json::json!({"type": "discarded_visited"}),
        DequeueOutcomeV1::BudgetExhausted => serde_json::json!({"type": "budget_exhausted"}),
    }
}

fn metadata_to_json(m: &SearchAuditMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "goal": m.goal,
        "max_expansions": m.max_expansions,
        "start": m.start,
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_dequeues": m.total_dequeues,
        "total_discarded": m.total_discarded,
        "total_enqueued": m.total_enqueued,
        "total_expansions": m.total_expansions,
    })
}

fn termination_reason_to_json(r: TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.as_str()})
        }
        TerminationReasonV1::FrontierExhausted | TerminationReasonV1::ExpansionBudgetExceeded => {
            serde_json::json!({"type": r.as_str()})
        }
    }
}
