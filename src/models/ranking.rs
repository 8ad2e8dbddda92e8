//! Ranked allocation results.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Candidate;

/// The best allocations found by a search, cheapest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Chore names, in assignment order.
    pub chores: Vec<String>,
    /// Person names, in totals order.
    pub people: Vec<String>,
    /// Number of candidates that were evaluated.
    pub space_size: usize,
    /// Top candidates, ascending by cost.
    pub candidates: Vec<Candidate>,
}

impl Ranking {
    /// The lowest-cost candidate.
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Number of ranked candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether no candidates were ranked.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Named summary of the lowest-cost candidate.
    pub fn describe_best(&self) -> Option<BestAllocation<'_>> {
        Some(BestAllocation {
            assignments: self.named_assignment(0)?,
            totals: self.named_totals(0)?,
            cost: self.best()?.cost,
        })
    }

    /// `(chore, person)` name pairs for the candidate at `rank`.
    pub fn named_assignment(&self, rank: usize) -> Option<Vec<(&str, &str)>> {
        let candidate = self.candidates.get(rank)?;
        self.chores
            .iter()
            .zip(candidate.assignment.assignees())
            .map(|(chore, &p)| Some((chore.as_str(), self.people.get(p)?.as_str())))
            .collect()
    }

    /// `(person, total)` pairs for the candidate at `rank`.
    pub fn named_totals(&self, rank: usize) -> Option<Vec<(&str, f64)>> {
        let candidate = self.candidates.get(rank)?;
        Some(
            self.people
                .iter()
                .map(String::as_str)
                .zip(candidate.totals.iter().copied())
                .collect(),
        )
    }
}

/// The top candidate with names resolved, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BestAllocation<'a> {
    /// `(chore, person)` pairs in chore order.
    pub assignments: Vec<(&'a str, &'a str)>,
    /// `(person, total)` pairs in roster order.
    pub totals: Vec<(&'a str, f64)>,
    /// Heaviest workload.
    pub cost: f64,
}

impl fmt::Display for BestAllocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (chore, person) in &self.assignments {
            writeln!(f, "{chore}: {person}")?;
        }
        for (person, total) in &self.totals {
            writeln!(f, "{person}: {total:.2}")?;
        }
        write!(f, "max: {:.2}", self.cost)
    }
}
