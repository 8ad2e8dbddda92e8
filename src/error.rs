//! Error types for the allocation pipeline.
//!
//! Three failure classes, each carrying enough context to fix the input:
//!
//! | Variant | Cause |
//! |---------|-------|
//! | `Validation` | Malformed chores or weights (all problems, not just the first) |
//! | `Configuration` | Bad roster or allocator settings |
//! | `SearchAborted` | A caller-imposed limit stopped the search before ranking |

use std::time::Duration;

use thiserror::Error;

use crate::validation::ValidationError;

/// Convenience alias for allocation results.
pub type Result<T> = std::result::Result<T, AllocationError>;

/// Top-level error returned by the allocation pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    /// Input data failed validation.
    #[error("{} validation error(s): {}", .0.len(), join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Roster or allocator configuration is invalid.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The search was stopped before a ranking was computed.
    #[error("search aborted: {0}")]
    SearchAborted(#[from] AbortReason),
}

/// Invalid roster or allocator settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The roster has no people.
    #[error("roster must contain at least one person")]
    EmptyRoster,

    /// The same name appears twice in the roster.
    #[error("duplicate person '{0}' in roster")]
    DuplicatePerson(String),

    /// A roster name is blank.
    #[error("roster contains a blank name")]
    BlankPerson,

    /// `top_k` must be at least 1.
    #[error("top_k must be positive")]
    ZeroTopK,

    /// A candidate ceiling of zero would reject every search.
    #[error("max_candidates must be positive when set")]
    ZeroCandidateCeiling,

    /// Column-sum tolerance must be a positive, finite number.
    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
}

/// Why a search stopped without producing a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbortReason {
    /// The assignment space is larger than the configured ceiling.
    #[error("assignment space has {candidates} candidates, ceiling is {limit}")]
    CandidateLimit {
        /// Size of the assignment space.
        candidates: u128,
        /// Configured (or platform) ceiling.
        limit: u128,
    },

    /// Evaluation ran past the wall-clock budget.
    #[error("time budget of {budget:?} exceeded after {elapsed:?}")]
    TimeBudget {
        /// Configured budget.
        budget: Duration,
        /// Time spent before the abort was noticed.
        elapsed: Duration,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
