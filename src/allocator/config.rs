//! Allocator configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

use super::normalize::DEFAULT_TOLERANCE;

/// Default number of ranked allocations to report.
pub const DEFAULT_TOP_K: usize = 100;

/// Settings for [`MinimaxAllocator`](super::MinimaxAllocator).
///
/// All fields have defaults, so a partial JSON object (or `{}`) is a
/// valid configuration.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use chore_minimax::allocator::AllocatorConfig;
///
/// let config = AllocatorConfig::default()
///     .with_top_k(10)
///     .with_max_candidates(1 << 20)
///     .with_time_budget(Duration::from_secs(30));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    /// How many of the best allocations to return (default: 100).
    pub top_k: usize,
    /// Refuse to search spaces larger than this. `None` = no ceiling.
    pub max_candidates: Option<usize>,
    /// Wall-clock budget for evaluation in milliseconds. `None` = unbounded.
    pub time_budget_ms: Option<u64>,
    /// Allowed deviation of each normalized column from 100 (default: 0.01).
    pub tolerance: f64,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            max_candidates: None,
            time_budget_ms: None,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl AllocatorConfig {
    /// Sets the number of results.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the candidate ceiling.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }

    /// Sets the evaluation time budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget_ms = Some(u64::try_from(budget.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Sets the column-sum tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The evaluation time budget, if any.
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }

    /// Checks that the settings are usable.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.top_k == 0 {
            return Err(ConfigurationError::ZeroTopK);
        }
        if self.max_candidates == Some(0) {
            return Err(ConfigurationError::ZeroCandidateCeiling);
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ConfigurationError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}
