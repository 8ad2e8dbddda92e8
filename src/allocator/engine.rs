//! Exhaustive minimax allocator.
//!
//! # Algorithm
//!
//! 1. Normalize raw weights per person (see [`WeightNormalizer`]).
//! 2. Build the assignment space: `|people| ^ free_chores` candidates.
//! 3. Score every candidate in parallel (cost = heaviest workload),
//!    keeping only the `top_k` cheapest per worker.
//! 4. Check the time budget once more, then sort the survivors ascending.
//! 5. Decode and fully evaluate the survivors.
//!
//! # Complexity
//! O(p^f · c) time for p people, f free chores, c chores; O(K · w) memory
//! for K = `top_k` and w rayon workers. Complete enumeration always finds
//! the true minimax optimum, and is only tractable for a handful of free
//! chores.

use tracing::{debug, info, warn};

use crate::error::{AbortReason, Result};
use crate::models::{Chore, Ranking, Roster, WeightTable};

use super::{
    select_top_k, AllocatorConfig, AssignmentSpace, Deadline, MinimaxEvaluator, ScoredIndex,
    WeightNormalizer,
};

/// Finds the most balanced chore allocations by brute force.
///
/// # Example
///
/// ```
/// use chore_minimax::allocator::{AllocatorConfig, MinimaxAllocator};
/// use chore_minimax::models::{Chore, Roster};
///
/// let roster = Roster::new(["A", "B"]).unwrap();
/// let chores = vec![
///     Chore::new("t1").with_weight("A", 60.0).with_weight("B", 30.0),
///     Chore::new("t2").with_weight("A", 40.0).with_weight("B", 70.0),
/// ];
///
/// let allocator = MinimaxAllocator::new(AllocatorConfig::default().with_top_k(4));
/// let ranking = allocator.allocate(&chores, &roster).unwrap();
///
/// assert_eq!(ranking.len(), 4);
/// assert!((ranking.best().unwrap().cost - 40.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MinimaxAllocator {
    config: AllocatorConfig,
}

impl MinimaxAllocator {
    /// Creates an allocator with the given configuration.
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Normalizes raw chores and ranks every valid allocation.
    ///
    /// # Errors
    /// - `Configuration` for invalid settings.
    /// - `Validation` for malformed chores or weights.
    /// - `SearchAborted` if a candidate ceiling or time budget is hit.
    pub fn allocate(&self, chores: &[Chore], roster: &Roster) -> Result<Ranking> {
        self.config.validate()?;
        info!("Getting effort for fixed chores per person");
        let table = WeightNormalizer::new()
            .with_tolerance(self.config.tolerance)
            .normalize(chores, roster)?;
        self.rank(&table)
    }

    /// Ranks every valid allocation of an already-normalized table.
    ///
    /// # Errors
    /// - `Configuration` for invalid settings.
    /// - `SearchAborted` if a candidate ceiling or time budget is hit.
    pub fn rank(&self, table: &WeightTable) -> Result<Ranking> {
        self.config.validate()?;
        let deadline = self.config.time_budget().map(Deadline::starting_now);

        info!("Constructing possibilities for all chore allocations");
        let space = AssignmentSpace::from_table(table)?;
        if let Some(limit) = self.config.max_candidates {
            if space.len() > limit {
                return Err(AbortReason::CandidateLimit {
                    candidates: space.len() as u128,
                    limit: limit as u128,
                }
                .into());
            }
        }
        debug!(
            free_chores = space.free_chore_count(),
            people = table.person_count(),
            "Assignment space built"
        );

        info!("Comparing {} allocations", space.len());
        if self.config.top_k > space.len() {
            warn!(
                requested = self.config.top_k,
                available = space.len(),
                "top_k exceeds candidate count; returning all candidates"
            );
        }
        let evaluator = MinimaxEvaluator::new(table);
        let cheapest = evaluator.score_cheapest(&space, self.config.top_k, deadline)?;

        self.finish(table, &space, cheapest, deadline)
    }

    /// Orders the surviving candidates and resolves them into a [`Ranking`].
    fn finish(
        &self,
        table: &WeightTable,
        space: &AssignmentSpace,
        cheapest: Vec<ScoredIndex>,
        deadline: Option<Deadline>,
    ) -> Result<Ranking> {
        if let Some(deadline) = &deadline {
            deadline.check()?;
        }
        let top = select_top_k(cheapest, self.config.top_k);

        info!("Preparing display of best allocations");
        let evaluator = MinimaxEvaluator::new(table);
        let candidates = top
            .into_iter()
            .filter_map(|s| space.get(s.index))
            .map(|assignment| evaluator.evaluate(assignment))
            .collect();

        let ranking = Ranking {
            chores: table.chores().to_vec(),
            people: table.people().to_vec(),
            space_size: space.len(),
            candidates,
        };
        if let Some(best) = ranking.describe_best() {
            info!("Best allocation found:\n{best}");
        }
        Ok(ranking)
    }
}
