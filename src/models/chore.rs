//! Chore (task) model.
//!
//! A chore is one recurring unit of work. It carries an unnormalized
//! preference weight per person and, optionally, a fixed assignee with
//! an explicit fixed weight out of 100.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A chore to be allocated.
///
/// # Raw weights
/// Weights are per person and unnormalized; each person's scale is
/// independent of everyone else's. For fixed chores the raw weights are
/// ignored in favor of `fixed_weight`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chore {
    /// Unique chore name.
    pub name: String,
    /// Raw preference weight per person name.
    #[serde(default)]
    pub weights: HashMap<String, f64>,
    /// Person this chore is pinned to. `None` (or blank) = free.
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Weight out of 100 used for a pinned chore.
    #[serde(default)]
    pub fixed_weight: Option<f64>,
}

impl Chore {
    /// Creates a free chore with no weights.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets one person's raw weight.
    pub fn with_weight(mut self, person: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(person.into(), weight);
        self
    }

    /// Sets several raw weights at once.
    pub fn with_weights<I, S>(mut self, weights: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.weights
            .extend(weights.into_iter().map(|(p, w)| (p.into(), w)));
        self
    }

    /// Pins this chore to a person.
    pub fn with_assignee(mut self, person: impl Into<String>) -> Self {
        self.assigned_to = Some(person.into());
        self
    }

    /// Sets the fixed weight (out of 100).
    pub fn with_fixed_weight(mut self, weight: f64) -> Self {
        self.fixed_weight = Some(weight);
        self
    }

    /// Pins this chore to `person` with the given fixed weight.
    pub fn fixed_to(self, person: impl Into<String>, weight: f64) -> Self {
        self.with_assignee(person).with_fixed_weight(weight)
    }

    /// The pinned person, treating a blank value as unassigned.
    pub fn assignee(&self) -> Option<&str> {
        self.assigned_to
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Whether the chore is pinned to a person.
    pub fn is_fixed(&self) -> bool {
        self.assignee().is_some()
    }

    /// Raw weight for a person.
    pub fn weight_for(&self, person: &str) -> Option<f64> {
        self.weights.get(person).copied()
    }
}
