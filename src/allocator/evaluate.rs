//! Minimax cost evaluation.
//!
//! For an assignment, each person's workload is the sum of *their own*
//! normalized weights for the chores they receive. The assignment's cost
//! is the largest workload. Lower cost = more balanced.
//!
//! Evaluation is pure, so the whole space is scored in parallel on the
//! rayon pool. Each worker folds candidates into a buffer of at most
//! `2K` `(index, cost)` pairs, pruned back to `K` whenever it fills;
//! buffers are merged pairwise and pruned again. Memory is O(K · workers)
//! regardless of the size of the space. Winners are decoded and fully
//! evaluated after ranking.

use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::error::{AbortReason, Result};
use crate::models::{Assignment, Candidate, WeightTable};

use super::select::retain_cheapest;
use super::AssignmentSpace;

/// Time-budget checks happen once per this many candidates.
const DEADLINE_CHECK_INTERVAL: usize = 4096;

/// Cost of one candidate, identified by its index in the space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredIndex {
    /// Candidate index in the [`AssignmentSpace`].
    pub index: usize,
    /// Maximum per-person workload.
    pub cost: f64,
}

/// Wall-clock budget for a search, measured from `start`.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    /// Starts the clock now.
    pub fn starting_now(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// Errors if the budget has been used up.
    pub fn check(&self) -> std::result::Result<(), AbortReason> {
        let elapsed = self.start.elapsed();
        if elapsed > self.budget {
            Err(AbortReason::TimeBudget {
                budget: self.budget,
                elapsed,
            })
        } else {
            Ok(())
        }
    }
}

/// Computes per-person workloads and minimax cost against a weight table.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxEvaluator<'a> {
    table: &'a WeightTable,
}

impl<'a> MinimaxEvaluator<'a> {
    /// Creates an evaluator over a normalized table.
    pub fn new(table: &'a WeightTable) -> Self {
        Self { table }
    }

    /// Fills `totals` (one slot per person) and returns the maximum.
    ///
    /// `assignees` yields a person index per chore, in table row order.
    ///
    /// # Panics
    /// If a person index is out of range for the table or for `totals`.
    pub fn accumulate<I>(&self, assignees: I, totals: &mut [f64]) -> f64
    where
        I: IntoIterator<Item = usize>,
    {
        totals.fill(0.0);
        for (chore, person) in assignees.into_iter().enumerate() {
            totals[person] += self.table.weight(chore, person);
        }
        totals.iter().copied().fold(0.0, f64::max)
    }

    /// Minimax cost of an assignment.
    ///
    /// # Panics
    /// If `assignment` has more chores than the table or names a person
    /// index outside it. Assignments from an [`AssignmentSpace`] built on
    /// the same table never do.
    pub fn cost(&self, assignment: &Assignment) -> f64 {
        let mut totals = vec![0.0; self.table.person_count()];
        self.accumulate(assignment.assignees().iter().copied(), &mut totals)
    }

    /// Full evaluation: per-person totals and cost.
    ///
    /// # Panics
    /// Under the same conditions as [`cost`](Self::cost).
    pub fn evaluate(&self, assignment: Assignment) -> Candidate {
        let mut totals = vec![0.0; self.table.person_count()];
        let cost = self.accumulate(assignment.assignees().iter().copied(), &mut totals);
        Candidate {
            assignment,
            totals,
            cost,
        }
    }

    /// Scores every candidate in `space` in parallel and keeps the `k`
    /// cheapest, in no particular order.
    ///
    /// `k` is clamped to the size of the space.
    ///
    /// # Errors
    /// `SearchAborted` if `deadline` passes before scoring finishes.
    pub fn score_cheapest(
        &self,
        space: &AssignmentSpace,
        k: usize,
        deadline: Option<Deadline>,
    ) -> Result<Vec<ScoredIndex>> {
        let k = k.min(space.len());
        if k == 0 {
            return Ok(Vec::new());
        }
        let people = self.table.person_count();
        let buffer_limit = k.saturating_mul(2);

        let mut kept = (0..space.len())
            .into_par_iter()
            .try_fold(
                || (Vec::new(), vec![0.0; people]),
                |(mut kept, mut totals): (Vec<ScoredIndex>, Vec<f64>),
                 index|
                 -> std::result::Result<_, AbortReason> {
                    if let Some(deadline) = &deadline {
                        if index % DEADLINE_CHECK_INTERVAL == 0 {
                            deadline.check()?;
                        }
                    }
                    let cost = match space.assignees_at(index) {
                        Some(assignees) => self.accumulate(assignees, &mut totals),
                        None => f64::INFINITY,
                    };
                    kept.push(ScoredIndex { index, cost });
                    if kept.len() >= buffer_limit {
                        retain_cheapest(&mut kept, k);
                    }
                    Ok((kept, totals))
                },
            )
            .map(|folded| folded.map(|(kept, _)| kept))
            .try_reduce(Vec::new, |mut left, right| {
                left.extend(right);
                retain_cheapest(&mut left, k);
                Ok(left)
            })?;

        retain_cheapest(&mut kept, k);
        Ok(kept)
    }
}
