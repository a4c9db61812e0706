//! Search policy types.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Search budget configuration.
///
/// The default policy is unbounded and reproduces plain breadth-first
/// search exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions (neighbor queries). `None` = unbounded.
    ///
    /// The cap is checked when a dequeued node is about to be expanded. Once
    /// it is reached the search keeps dequeuing without expanding, so a goal
    /// anywhere on the frontier is still matched.
    pub max_expansions: Option<u64>,
}

impl SearchPolicyV1 {
    /// Unbounded policy with an expansion cap.
    #[must_use]
    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    /// Reject policies that cannot describe a meaningful search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for `max_expansions == Some(0)`.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1 when set".into(),
            });
        }
        Ok(())
    }

    /// Whether `expansions` already performed exhaust the budget.
    #[must_use]
    pub fn budget_exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|cap| expansions >= cap)
    }
}

/// What a graph-backed environment does when asked for an unknown node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingNodePolicyV1 {
    /// Report `NodeNotFound` and abort the search. Default: an undefined
    /// node is treated as a caller data error.
    #[default]
    Fail,
    /// Treat the unknown node as having no outgoing edges.
    TreatAsEmpty,
}

impl MissingNodePolicyV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::TreatAsEmpty => "treat_as_empty",
        }
    }
}

impl fmt::Display for MissingNodePolicyV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized missing-node policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown missing-node policy {0:?} (expected \"fail\" or \"treat_as_empty\")")]
pub struct UnknownMissingNodePolicy(pub String);

impl FromStr for MissingNodePolicyV1 {
    type Err = UnknownMissingNodePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail" => Ok(Self::Fail),
            "treat_as_empty" => Ok(Self::TreatAsEmpty),
            other => Err(UnknownMissingNodePolicy(other.to_string())),
        }
    }
}
