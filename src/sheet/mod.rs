//! Sheet-shaped input and output.
//!
//! The allocator never talks to a spreadsheet service. This module only
//! fixes the row conventions on both sides: weight records in, a
//! transposed ranking table out.

mod records;
mod report;

pub use records::{
    parse_records, parse_records_json, Record, ASSIGNED_TO_COLUMN, CHORE_COLUMN,
    FIXED_WEIGHT_COLUMN,
};
pub use report::{Cell, ResultTable, MAX_ROW_LABEL};
