//! Minimax allocation engine.
//!
//! Pipeline stages, leaves first:
//!
//! | Stage | Type | Output |
//! |-------|------|--------|
//! | Normalize | [`WeightNormalizer`] | [`WeightTable`](crate::models::WeightTable) |
//! | Enumerate | [`AssignmentSpace`] | lazy [`Assignment`](crate::models::Assignment)s |
//! | Evaluate | [`MinimaxEvaluator`] | per-person totals + cost |
//! | Select | [`select_top_k`] | K cheapest, ascending |
//!
//! [`MinimaxAllocator`] runs all four under an [`AllocatorConfig`].
//!
//! # Reference
//! Brams & Taylor (1996), "Fair Division: From Cake-Cutting to Dispute Resolution"

mod config;
mod engine;
mod evaluate;
mod normalize;
mod select;
mod space;

pub use config::{AllocatorConfig, DEFAULT_TOP_K};
pub use engine::MinimaxAllocator;
pub use evaluate::{Deadline, MinimaxEvaluator, ScoredIndex};
pub use normalize::{normalize, WeightNormalizer, DEFAULT_TOLERANCE};
pub use select::select_top_k;
pub use space::{AssignmentSpace, Iter};
