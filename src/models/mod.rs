//! Allocation domain models.
//!
//! Provides the data types for describing an allocation problem and
//! its solutions.
//!
//! # Domain Mappings
//!
//! | chore-minimax | Household | Team rota | Lab duties |
//! |---------------|-----------|-----------|------------|
//! | Chore | Dishes, laundry | On-call shift | Instrument upkeep |
//! | Roster | Housemates | Engineers | Lab members |
//! | Assignment | Who does what | Rota | Duty sheet |
//! | Candidate | One proposal + workloads | Rota + load | Duty sheet + hours |

mod allocation;
mod chore;
mod ranking;
mod roster;
mod weights;

pub use allocation::{Assignment, Candidate};
pub use chore::Chore;
pub use ranking::{BestAllocation, Ranking};
pub use roster::Roster;
pub use weights::WeightTable;
