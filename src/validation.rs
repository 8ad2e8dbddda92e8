//! Input validation for allocation problems.
//!
//! Checks structural integrity of chores against the roster before
//! normalization. Detects:
//! - Duplicate or blank chore names
//! - Assignees outside the roster
//! - Fixed chores without a fixed weight
//! - Missing, negative, or non-finite weights
//!
//! After normalization, `check_column_sums` verifies that every person's
//! column sums to 100 within tolerance.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Chore, Roster, WeightTable};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Target sum of every person's normalized column.
pub const COLUMN_TOTAL: f64 = 100.0;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending chore (or person, for column-level errors).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two chores share the same name.
    DuplicateChore,
    /// A chore has a blank name.
    BlankChoreName,
    /// "Assigned to" names someone outside the roster.
    UnknownAssignee,
    /// A pinned chore has no fixed weight.
    MissingFixedWeight,
    /// A free chore lacks a raw weight for some person.
    MissingWeight,
    /// A weight is negative, NaN, or infinite.
    InvalidWeight,
    /// A sheet cell could not be read as the expected type.
    MalformedCell,
    /// Fixed weights add up to more than 100.
    FixedBudgetExceeded,
    /// A person's free-chore weights are all zero but budget remains.
    ZeroWeightColumn,
    /// A person's free-chore weights are too small to scale up to the budget.
    ScaleOverflow,
    /// A person's normalized column does not sum to 100.
    ColumnSumMismatch,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(
        kind: ValidationErrorKind,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)
    }
}

/// Validates chores against the roster.
///
/// Checks:
/// 1. No blank or duplicate chore names
/// 2. Every assignee is blank or on the roster
/// 3. Every pinned chore has a valid fixed weight
/// 4. Every free chore has a valid raw weight for every person
///
/// Raw weights on pinned chores are ignored and not checked.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(chores: &[Chore], roster: &Roster) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for chore in chores {
        if chore.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankChoreName,
                &chore.name,
                "Chore with a blank name",
            ));
        } else if !names.insert(chore.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateChore,
                &chore.name,
                format!("Duplicate chore: {}", chore.name),
            ));
        }
    }

    for chore in chores {
        match chore.assignee() {
            Some(assignee) => {
                if !roster.contains(assignee) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownAssignee,
                        &chore.name,
                        format!(
                            "Chore '{}' is assigned to '{}', expected one of {:?} or blank",
                            chore.name,
                            assignee,
                            roster.people()
                        ),
                    ));
                }
                match chore.fixed_weight {
                    None => errors.push(ValidationError::new(
                        ValidationErrorKind::MissingFixedWeight,
                        &chore.name,
                        format!("Chore '{}' is assigned but has no fixed weight", chore.name),
                    )),
                    Some(w) if !is_valid_weight(w) => errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidWeight,
                        &chore.name,
                        format!("Chore '{}' has invalid fixed weight {w}", chore.name),
                    )),
                    Some(_) => {}
                }
            }
            None => {
                for person in roster.people() {
                    match chore.weight_for(person) {
                        None => errors.push(ValidationError::new(
                            ValidationErrorKind::MissingWeight,
                            &chore.name,
                            format!("Chore '{}' has no weight for '{person}'", chore.name),
                        )),
                        Some(w) if !is_valid_weight(w) => errors.push(ValidationError::new(
                            ValidationErrorKind::InvalidWeight,
                            &chore.name,
                            format!("Chore '{}' has invalid weight {w} for '{person}'", chore.name),
                        )),
                        Some(_) => {}
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Verifies that every column of a normalized table sums to 100 ± `tolerance`.
///
/// A non-finite sum always fails.
pub fn check_column_sums(table: &WeightTable, tolerance: f64) -> ValidationResult {
    let errors: Vec<ValidationError> = table
        .people()
        .iter()
        .enumerate()
        .filter_map(|(p, person)| {
            let sum = table.column_sum(p);
            (!sum.is_finite() || (sum - COLUMN_TOTAL).abs() > tolerance).then(|| {
                ValidationError::new(
                    ValidationErrorKind::ColumnSumMismatch,
                    person,
                    format!("Weights for '{person}' sum to {sum}, expected {COLUMN_TOTAL} ± {tolerance}"),
                )
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_valid_weight(w: f64) -> bool {
    w.is_finite() && w >= 0.0
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

    #[test]
    fn test_valid_input() {
        let chores = vec![
            free("t1", 1.0, 2.0),
            free("t2", 3.0, 0.0),
            Chore::new("t3").fixed_to("B", 20.0),
        ];
        assert!(validate_input(&chores, &roster()).is_ok());
    }

    #[test]
    fn test_unknown_assignee() {
        let chores = vec![free("t1", 1.0, 1.0), Chore::new("t2").fixed_to("Charlie", 10.0)];

        let errors = validate_input(&chores, &roster()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::UnknownAssignee);
        assert_eq!(errors[0].entity_id, "t2");
        assert!(errors[0].message.contains("Charlie"));
    }

    #[test]
    fn test_duplicate_chore() {
        let chores = vec![free("t1", 1.0, 1.0), free("t1", 2.0, 2.0)];

        let errors = validate_input(&chores, &roster()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateChore));
    }

    #[test]
    fn test_blank_chore_name() {
        let chores = vec![free(" ", 1.0, 1.0)];

        let errors = validate_input(&chores, &roster()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::BlankChoreName);
    }

    #[test]
    fn test_missing_fixed_weight() {
        let chores = vec![Chore::new("t1").with_assignee("A")];

        let errors = validate_input(&chores, &roster()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingFixedWeight);
    }

    #[test]
    fn test_missing_weight_on_free_chore() {
        let chores = vec![Chore::new("t1").with_weight("A", 1.0)];

        let errors = validate_input(&chores, &roster()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingWeight);
        assert!(errors[0].message.contains("'B'"));
    }

    #[test]
    fn test_fixed_chore_ignores_raw_weights() {
        // No raw weights at all, and a garbage one: both ignored when pinned.
        let chores = vec![Chore::new("t1")
            .with_weight("A", f64::NAN)
            .fixed_to("A", 10.0)];
        assert!(validate_input(&chores, &roster()).is_ok());
    }

    #[test]
    fn test_invalid_weights() {
        let chores = vec![
            free("t1", -1.0, 1.0),
            free("t2", 1.0, f64::INFINITY),
            Chore::new("t3").fixed_to("A", f64::NAN),
        ];

        let errors = validate_input(&chores, &roster()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidWeight));
    }

    #[test]
    fn test_multiple_errors() {
        let chores = vec![
            free("t1", 1.0, 1.0),
            free("t1", 1.0, 1.0),
            Chore::new("t2").fixed_to("Z", 5.0),
        ];

        let errors = validate_input(&chores, &roster()).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_check_column_sums() {
        let ok = WeightTable::from_parts(
            vec!["t1".into()],
            vec!["A".into(), "B".into()],
            vec![None],
            vec![100.0, 99.995],
        );
        assert!(check_column_sums(&ok, 0.01).is_ok());

        let bad = WeightTable::from_parts(
            vec!["t1".into()],
            vec!["A".into(), "B".into()],
            vec![None],
            vec![100.0, 90.0],
        );
        let errors = check_column_sums(&bad, 0.01).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ColumnSumMismatch);
        assert_eq!(errors[0].entity_id, "B");
    }

    #[test]
    fn test_check_column_sums_rejects_non_finite() {
        let table = WeightTable::from_parts(
            vec!["t1".into(), "t2".into()],
            vec!["A".into(), "B".into()],
            vec![None, None],
            vec![f64::INFINITY, 50.0, f64::NAN, 50.0],
        );
        let errors = check_column_sums(&table, 0.01).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ColumnSumMismatch);
        assert_eq!(errors[0].entity_id, "A");
    }
}
