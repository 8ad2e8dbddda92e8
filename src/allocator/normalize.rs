//! Per-person weight normalization.
//!
//! # Algorithm
//!
//! 1. Fixed budget per person = sum of fixed weights of chores pinned to them.
//! 2. Remaining budget = 100 − (sum of all fixed budgets).
//! 3. For each person independently, scale their raw weights on free chores
//!    so that they sum to the remaining budget.
//! 4. Every person's weight for a pinned chore is that chore's fixed weight.
//!
//! Each column therefore sums to `remaining + total fixed = 100`.
//!
//! Scaling is per column: one person's raw scale never has to match
//! another's.

use tracing::{debug, info};

use crate::error::{AllocationError, ConfigurationError, Result};
use crate::models::{Chore, Roster, WeightTable};
use crate::validation::{
    check_column_sums, validate_input, ValidationError, ValidationErrorKind, COLUMN_TOTAL,
};

/// Default column-sum tolerance.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Converts raw chores into a validated [`WeightTable`].
///
/// # Example
/// ```
/// use chore_minimax::allocator::WeightNormalizer;
/// use chore_minimax::models::{Chore, Roster};
///
/// let roster = Roster::new(["A", "B"]).unwrap();
/// let chores = vec![
///     Chore::new("t1").with_weight("A", 3.0).with_weight("B", 1.0),
///     Chore::new("t2").with_weight("A", 1.0).with_weight("B", 1.0),
///     Chore::new("t3").fixed_to("A", 20.0),
/// ];
///
/// let table = WeightNormalizer::new().normalize(&chores, &roster).unwrap();
/// assert!((table.weight(0, 0) - 60.0).abs() < 1e-9);
/// assert!((table.weight(2, 1) - 20.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct WeightNormalizer {
    tolerance: f64,
}

impl WeightNormalizer {
    /// Creates a normalizer with the default tolerance (0.01).
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the column-sum tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Normalizes raw chore weights.
    ///
    /// # Errors
    /// - `Configuration` if the tolerance is not positive and finite.
    /// - `Validation` with every input problem found, or if a column
    ///   cannot be brought to 100.
    pub fn normalize(&self, chores: &[Chore], roster: &Roster) -> Result<WeightTable> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ConfigurationError::InvalidTolerance(self.tolerance).into());
        }
        validate_input(chores, roster).map_err(AllocationError::Validation)?;

        info!(chores = chores.len(), people = roster.len(), "Normalizing weights per person");

        let fixed: Vec<Option<usize>> = chores
            .iter()
            .map(|c| c.assignee().and_then(|name| roster.index_of(name)))
            .collect();

        let mut fixed_budgets = vec![0.0; roster.len()];
        for (chore, slot) in chores.iter().zip(&fixed) {
            if let Some(p) = *slot {
                fixed_budgets[p] += chore.fixed_weight.unwrap_or(0.0);
            }
        }
        let total_fixed: f64 = fixed_budgets.iter().sum();
        for (person, budget) in roster.people().iter().zip(&fixed_budgets) {
            debug!(person = %person, fixed_budget = budget, "Fixed effort");
        }

        let remaining = COLUMN_TOTAL - total_fixed;
        if remaining < -self.tolerance {
            return Err(AllocationError::Validation(vec![ValidationError::new(
                ValidationErrorKind::FixedBudgetExceeded,
                "Fixed weight",
                format!("Fixed weights sum to {total_fixed}, more than {COLUMN_TOTAL}"),
            )]));
        }
        let remaining = remaining.max(0.0);

        let scales = self.column_scales(chores, roster, &fixed, remaining)?;

        let mut weights = Vec::with_capacity(chores.len() * roster.len());
        for (chore, slot) in chores.iter().zip(&fixed) {
            for (p, person) in roster.people().iter().enumerate() {
                let w = match slot {
                    Some(_) => chore.fixed_weight.unwrap_or(0.0),
                    None => chore.weight_for(person).unwrap_or(0.0) * scales[p],
                };
                weights.push(w);
            }
        }

        let table = WeightTable::from_parts(
            chores.iter().map(|c| c.name.clone()).collect(),
            roster.people().to_vec(),
            fixed,
            weights,
        );
        check_column_sums(&table, self.tolerance).map_err(AllocationError::Validation)?;
        Ok(table)
    }

    /// Scale factor per person mapping free-chore raw weights onto `remaining`.
    fn column_scales(
        &self,
        chores: &[Chore],
        roster: &Roster,
        fixed: &[Option<usize>],
        remaining: f64,
    ) -> Result<Vec<f64>> {
        let mut scales = Vec::with_capacity(roster.len());
        let mut errors = Vec::new();

        for person in roster.people() {
            let raw_sum: f64 = chores
                .iter()
                .zip(fixed)
                .filter(|(_, slot)| slot.is_none())
                .filter_map(|(c, _)| c.weight_for(person))
                .sum();

            let scale = if raw_sum > 0.0 {
                let scale = remaining / raw_sum;
                if !scale.is_finite() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ScaleOverflow,
                        person,
                        format!(
                            "'{person}' has free-chore weights summing to {raw_sum}, too small to scale up to {remaining}"
                        ),
                    ));
                }
                scale
            } else if remaining <= self.tolerance {
                // 0/0: nothing to distribute and nothing to distribute it over.
                0.0
            } else {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ZeroWeightColumn,
                    person,
                    format!(
                        "'{person}' has zero total weight on free chores but {remaining} remains to distribute"
                    ),
                ));
                0.0
            };
            debug!(person = %person, raw_sum, scale, "Column scale");
            scales.push(scale);
        }

        if errors.is_empty() {
            Ok(scales)
        } else {
            Err(AllocationError::Validation(errors))
        }
    }
}

impl Default for WeightNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes with the default tolerance.
pub fn normalize(chores: &[Chore], roster: &Roster) -> Result<WeightTable> {
    WeightNormalizer::new().normalize(chores, roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(["A", "B"]).unwrap()
    }

    fn free(name: &str, a: f64, b: f64) -> Chore {
        Chore::new(name).with_weight("A", a).with_weight("B", b)
    }

    fn validation_kinds(err: AllocationError) -> Vec<ValidationErrorKind> {
        match err {
            AllocationError::Validation(errors) => errors.into_iter().map(|e| e.kind).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_free_chores_scale_per_person() {
        // A's raw scale is 10x B's; each column still sums to 100.
        let chores = vec![free("t1", 30.0, 3.0), free("t2", 10.0, 7.0)];
        let table = normalize(&chores, &roster()).unwrap();

        assert!((table.weight(0, 0) - 75.0).abs() < 1e-10);
        assert!((table.weight(1, 0) - 25.0).abs() < 1e-10);
        assert!((table.weight(0, 1) - 30.0).abs() < 1e-10);
        assert!((table.weight(1, 1) - 70.0).abs() < 1e-10);
        assert!((table.column_sum(0) - 100.0).abs() < 1e-10);
        assert!((table.column_sum(1) - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_fixed_weight_overrides_raw() {
        let chores = vec![
            free("t1", 1.0, 1.0),
            free("t2", 3.0, 1.0),
            Chore::new("t3")
                .with_weight("A", 99.0)
                .with_weight("B", 0.0)
                .fixed_to("B", 20.0),
            Chore::new("t4").fixed_to("A", 10.0),
        ];
        let table = normalize(&chores, &roster()).unwrap();

        // Remaining budget = 100 - 30 = 70 for everyone.
        assert!((table.weight(0, 0) - 17.5).abs() < 1e-10);
        assert!((table.weight(1, 0) - 52.5).abs() < 1e-10);
        assert!((table.weight(0, 1) - 35.0).abs() < 1e-10);
        for p in 0..2 {
            assert!((table.weight(2, p) - 20.0).abs() < 1e-10);
            assert!((table.weight(3, p) - 10.0).abs() < 1e-10);
            assert!((table.column_sum(p) - 100.0).abs() < 1e-10);
        }
        assert_eq!(table.fixed_assignee(2), Some(1));
        assert_eq!(table.fixed_assignee(3), Some(0));
        assert_eq!(table.free_chore_count(), 2);
    }

    #[test]
    fn test_full_fixed_budget_zeroes_free_chores() {
        let chores = vec![
            free("t1", 0.0, 0.0),
            free("t2", 5.0, 0.0),
            Chore::new("t3").fixed_to("A", 60.0),
            Chore::new("t4").fixed_to("B", 40.0),
        ];
        let table = normalize(&chores, &roster()).unwrap();

        for p in 0..2 {
            assert!((table.weight(0, p)).abs() < 1e-10);
            assert!((table.weight(1, p)).abs() < 1e-10);
            assert!((table.column_sum(p) - 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_zero_column_with_budget_left_fails() {
        let chores = vec![free("t1", 0.0, 2.0), free("t2", 0.0, 1.0)];
        let err = normalize(&chores, &roster()).unwrap_err();
        assert_eq!(validation_kinds(err), vec![ValidationErrorKind::ZeroWeightColumn]);
    }

    #[test]
    fn test_all_fixed_below_budget_fails() {
        let chores = vec![Chore::new("t1").fixed_to("A", 50.0)];
        let err = normalize(&chores, &roster()).unwrap_err();
        assert_eq!(
            validation_kinds(err),
            vec![
                ValidationErrorKind::ZeroWeightColumn,
                ValidationErrorKind::ZeroWeightColumn
            ]
        );
    }

    #[test]
    fn test_fixed_budget_exceeded() {
        let chores = vec![
            free("t1", 1.0, 1.0),
            Chore::new("t2").fixed_to("A", 70.0),
            Chore::new("t3").fixed_to("B", 40.0),
        ];
        let err = normalize(&chores, &roster()).unwrap_err();
        assert_eq!(validation_kinds(err), vec![ValidationErrorKind::FixedBudgetExceeded]);
    }

    #[test]
    fn test_unknown_assignee_fails() {
        let chores = vec![free("t1", 1.0, 1.0), Chore::new("t2").fixed_to("Charlie", 10.0)];
        let err = normalize(&chores, &roster()).unwrap_err();
        assert_eq!(validation_kinds(err), vec![ValidationErrorKind::UnknownAssignee]);
    }

    #[test]
    fn test_fixed_weight_on_free_chore_ignored() {
        let chores = vec![free("t1", 1.0, 1.0).with_fixed_weight(30.0), free("t2", 1.0, 1.0)];
        let table = normalize(&chores, &roster()).unwrap();
        assert!((table.weight(0, 0) - 50.0).abs() < 1e-10);
        assert_eq!(table.free_chore_count(), 2);
    }

    #[test]
    fn test_tiny_weights_overflow_scale() {
        let chores = vec![free("t1", 1e-307, 1.0), free("t2", 0.0, 1.0)];
        let err = normalize(&chores, &roster()).unwrap_err();
        match err {
            AllocationError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, ValidationErrorKind::ScaleOverflow);
                assert_eq!(errors[0].entity_id, "A");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_padded_roster_names_match_assignees() {
        let roster = Roster::new([" A", "B "]).unwrap();
        let chores = vec![free("t1", 1.0, 1.0), Chore::new("t2").fixed_to(" A ", 10.0)];
        let table = normalize(&chores, &roster).unwrap();
        assert_eq!(table.fixed_assignee(1), Some(0));
        assert!((table.weight(0, 1) - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_tolerance() {
        let chores = vec![free("t1", 1.0, 1.0)];
        let err = WeightNormalizer::new()
            .with_tolerance(0.0)
            .normalize(&chores, &roster())
            .unwrap_err();
        assert_eq!(
            err,
            AllocationError::Configuration(ConfigurationError::InvalidTolerance(0.0))
        );
    }
}
