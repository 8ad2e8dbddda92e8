//! Assignment and candidate (solution) models.
//!
//! An assignment maps every chore to one person. A candidate is an
//! assignment together with its evaluated workload per person and its
//! minimax cost.

use serde::{Deserialize, Serialize};

/// A complete chore → person mapping.
///
/// `assignees[c]` is the roster index of the person doing chore `c`
/// (chores in weight-table row order).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    assignees: Vec<usize>,
}

impl Assignment {
    /// Creates an assignment from per-chore person indices.
    pub fn new(assignees: Vec<usize>) -> Self {
        Self { assignees }
    }

    /// Person index assigned to `chore`.
    #[inline]
    pub fn person_for(&self, chore: usize) -> Option<usize> {
        self.assignees.get(chore).copied()
    }

    /// Per-chore person indices.
    pub fn assignees(&self) -> &[usize] {
        &self.assignees
    }

    /// Number of chores covered.
    pub fn len(&self) -> usize {
        self.assignees.len()
    }

    /// Whether the assignment covers no chores.
    pub fn is_empty(&self) -> bool {
        self.assignees.is_empty()
    }
}

/// An evaluated assignment.
///
/// Lower `cost` = more balanced allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The assignment that was evaluated.
    pub assignment: Assignment,
    /// Total normalized workload per person (roster order).
    pub totals: Vec<f64>,
    /// Largest entry of `totals`.
    pub cost: f64,
}

impl Candidate {
    /// Total workload of one person.
    pub fn total_for(&self, person: usize) -> Option<f64> {
        self.totals.get(person).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_queries() {
        let a = Assignment::new(vec![0, 1, 0, 2]);
        assert_eq!(a.len(), 4);
        assert_eq!(a.person_for(1), Some(1));
        assert_eq!(a.person_for(4), None);
        assert_eq!(a.assignees(), &[0, 1, 0, 2]);
    }

    #[test]
    fn test_candidate_totals() {
        let c = Candidate {
            assignment: Assignment::new(vec![0, 1]),
            totals: vec![40.0, 30.0],
            cost: 40.0,
        };
        assert_eq!(c.total_for(1), Some(30.0));
        assert_eq!(c.total_for(2), None);
    }
}
