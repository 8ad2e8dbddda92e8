//! Fair chore allocation by exhaustive minimax search.
//!
//! Given per-person preference weights for a set of chores, some of them
//! pinned to a person in advance, finds the allocations that minimize the
//! heaviest individual workload and reports the best K.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Chore`, `Roster`, `WeightTable`,
//!   `Assignment`, `Candidate`, `Ranking`
//! - **`allocator`**: Normalization, assignment enumeration, minimax
//!   evaluation, top-K selection, and the `MinimaxAllocator` pipeline
//! - **`validation`**: Input integrity checks (unknown assignees, missing
//!   or invalid weights, column sums)
//! - **`sheet`**: Sheet-record parsing and the transposed result table
//! - **`error`**: `AllocationError` and its context types
//!
//! # Example
//!
//! ```
//! use chore_minimax::allocator::{AllocatorConfig, MinimaxAllocator};
//! use chore_minimax::models::{Chore, Roster};
//!
//! let roster = Roster::new(["Kim", "Cody"]).unwrap();
//! let chores = vec![
//!     Chore::new("Dishes").with_weight("Kim", 3.0).with_weight("Cody", 1.0),
//!     Chore::new("Laundry").with_weight("Kim", 1.0).with_weight("Cody", 2.0),
//!     Chore::new("Trash").with_weight("Kim", 1.0).with_weight("Cody", 1.0),
//!     Chore::new("Cooking").fixed_to("Kim", 30.0),
//! ];
//!
//! let ranking = MinimaxAllocator::new(AllocatorConfig::default().with_top_k(3))
//!     .allocate(&chores, &roster)
//!     .unwrap();
//! assert_eq!(ranking.space_size, 8);
//! assert_eq!(ranking.len(), 3);
//! ```
//!
//! # References
//!
//! - Brams & Taylor (1996), "Fair Division: From Cake-Cutting to Dispute Resolution"
//! - Steinhaus (1948), "The Problem of Fair Division"

pub mod allocator;
pub mod error;
pub mod models;
pub mod sheet;
pub mod validation;

pub use error::{AllocationError, Result};
