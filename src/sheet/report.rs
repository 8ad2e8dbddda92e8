//! Transposed result table.
//!
//! Each ranked candidate becomes a column, so the sheet reads top to
//! bottom as "who does each chore, how much each person carries, and
//! the worst load":
//!
//! | Chore | 0 | 1 | … |
//! |-------|---|---|---|
//! | Dishes | Kim | Cody | … |
//! | Kim | 48.2 | 51.0 | … |
//! | Cody | 47.9 | 45.3 | … |
//! | max | 48.2 | 51.0 | … |

use serde::{Deserialize, Serialize};

use crate::models::Ranking;

use super::records::CHORE_COLUMN;

/// Label of the row holding each candidate's cost.
pub const MAX_ROW_LABEL: &str = "max";

/// A sheet cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// A ranking laid out for writing back to a sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// `Chore, 0, 1, …`: label column then candidate ranks.
    pub header: Vec<Cell>,
    /// Chore rows, then person rows, then the `max` row.
    pub rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    /// Lays out a ranking, one column per candidate.
    pub fn from_ranking(ranking: &Ranking) -> Self {
        let header = std::iter::once(Cell::from(CHORE_COLUMN))
            .chain((0..ranking.len()).map(|rank| Cell::Number(rank as f64)))
            .collect();

        let mut rows = Vec::with_capacity(ranking.chores.len() + ranking.people.len() + 1);

        for (c, chore) in ranking.chores.iter().enumerate() {
            let row = std::iter::once(Cell::from(chore.as_str()))
                .chain(ranking.candidates.iter().map(|cand| {
                    let name = cand
                        .assignment
                        .person_for(c)
                        .and_then(|p| ranking.people.get(p))
                        .map_or("", String::as_str);
                    Cell::from(name)
                }))
                .collect();
            rows.push(row);
        }

        for (p, person) in ranking.people.iter().enumerate() {
            let row = std::iter::once(Cell::from(person.as_str()))
                .chain(
                    ranking
                        .candidates
                        .iter()
                        .map(|cand| Cell::Number(cand.total_for(p).unwrap_or(0.0))),
                )
                .collect();
            rows.push(row);
        }

        rows.push(
            std::iter::once(Cell::from(MAX_ROW_LABEL))
                .chain(ranking.candidates.iter().map(|cand| Cell::Number(cand.cost)))
                .collect(),
        );

        Self { header, rows }
    }

    /// Header followed by all rows.
    pub fn with_header(&self) -> Vec<Vec<Cell>> {
        std::iter::once(self.header.clone())
            .chain(self.rows.iter().cloned())
            .collect()
    }

    /// Rows as a JSON array of arrays.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.rows)
    }
}

impl From<&Ranking> for ResultTable {
    fn from(ranking: &Ranking) -> Self {
        Self::from_ranking(ranking)
    }
}
