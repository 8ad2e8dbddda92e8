//! Normalized weight table.
//!
//! Output of the weight normalizer and input to every later stage.
//! Rows are chores, columns are people, both in input order.
//!
//! # Invariants
//! - Every weight is finite and non-negative.
//! - Every person's column sums to 100 (within the configured tolerance).
//! - A fixed chore has the same weight (its fixed weight) in every column.

use serde::Serialize;

/// Immutable chore × person table of normalized workload shares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightTable {
    chores: Vec<String>,
    people: Vec<String>,
    fixed: Vec<Option<usize>>,
    /// Row-major: `weights[chore * people.len() + person]`.
    weights: Vec<f64>,
}

impl WeightTable {
    /// Assembles a table from already-normalized parts.
    ///
    /// Only the normalizer builds tables, after checking the invariants.
    pub(crate) fn from_parts(
        chores: Vec<String>,
        people: Vec<String>,
        fixed: Vec<Option<usize>>,
        weights: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(chores.len(), fixed.len());
        debug_assert_eq!(chores.len() * people.len(), weights.len());
        Self {
            chores,
            people,
            fixed,
            weights,
        }
    }

    /// Chore names in row order.
    pub fn chores(&self) -> &[String] {
        &self.chores
    }

    /// Person names in column order.
    pub fn people(&self) -> &[String] {
        &self.people
    }

    /// Number of chores (rows).
    #[inline]
    pub fn chore_count(&self) -> usize {
        self.chores.len()
    }

    /// Number of people (columns).
    #[inline]
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Normalized weight of `chore` for `person`, by index.
    ///
    /// # Panics
    /// If either index is out of range.
    #[inline]
    pub fn weight(&self, chore: usize, person: usize) -> f64 {
        assert!(person < self.people.len(), "person index out of range");
        self.weights[chore * self.people.len() + person]
    }

    /// Normalized weight looked up by names.
    pub fn get(&self, chore: &str, person: &str) -> Option<f64> {
        let c = self.chores.iter().position(|n| n == chore)?;
        let p = self.people.iter().position(|n| n == person)?;
        Some(self.weight(c, p))
    }

    /// Person index a chore is pinned to, if any.
    #[inline]
    pub fn fixed_assignee(&self, chore: usize) -> Option<usize> {
        self.fixed.get(chore).copied().flatten()
    }

    /// Number of chores that are free to assign.
    pub fn free_chore_count(&self) -> usize {
        self.fixed.iter().filter(|f| f.is_none()).count()
    }

    /// One person's column, in chore order.
    pub fn column(&self, person: usize) -> impl Iterator<Item = f64> + '_ {
        let width = self.people.len();
        self.weights.iter().skip(person).step_by(width).copied()
    }

    /// Sum of one person's column (≈ 100).
    pub fn column_sum(&self, person: usize) -> f64 {
        self.column(person).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> WeightTable {
        WeightTable::from_parts(
            vec!["t1".into(), "t2".into(), "t3".into()],
            vec!["A".into(), "B".into()],
            vec![None, None, Some(1)],
            vec![50.0, 20.0, 30.0, 60.0, 20.0, 20.0],
        )
    }

    #[test]
    fn test_table_lookup() {
        let t = sample_table();
        assert_eq!(t.chore_count(), 3);
        assert_eq!(t.person_count(), 2);
        assert!((t.weight(1, 0) - 30.0).abs() < 1e-10);
        assert_eq!(t.get("t2", "B"), Some(60.0));
        assert_eq!(t.get("t9", "B"), None);
        assert_eq!(t.get("t1", "Z"), None);
    }

    #[test]
    fn test_table_columns() {
        let t = sample_table();
        let a: Vec<f64> = t.column(0).collect();
        assert_eq!(a, vec![50.0, 30.0, 20.0]);
        assert!((t.column_sum(0) - 100.0).abs() < 1e-10);
        assert!((t.column_sum(1) - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_table_fixed() {
        let t = sample_table();
        assert_eq!(t.fixed_assignee(0), None);
        assert_eq!(t.fixed_assignee(2), Some(1));
        assert_eq!(t.fixed_assignee(99), None);
        assert_eq!(t.free_chore_count(), 2);
    }
}
