//! Weight-sheet record parsing.
//!
//! Rows arrive as JSON objects keyed by column header, the shape a
//! spreadsheet "get all records" export produces:
//!
//! | Column | Content |
//! |--------|---------|
//! | `Chore` | Chore name |
//! | one per person | Raw weight (number, numeric text, or empty) |
//! | `Assigned to` | Person name or empty |
//! | `Fixed weight` | Weight out of 100 for pinned chores, else empty |
//!
//! Empty cells become absent values. Every malformed cell is reported.

use serde_json::{Map, Value};

use crate::error::{AllocationError, Result};
use crate::models::{Chore, Roster};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Header of the chore-name column.
pub const CHORE_COLUMN: &str = "Chore";
/// Header of the fixed-assignee column.
pub const ASSIGNED_TO_COLUMN: &str = "Assigned to";
/// Header of the fixed-weight column.
pub const FIXED_WEIGHT_COLUMN: &str = "Fixed weight";

/// One sheet row, keyed by column header.
pub type Record = Map<String, Value>;

/// Parses sheet rows into chores.
///
/// Columns for people not on the roster are ignored. The result still
/// has to pass normalization; this step only checks cell types.
///
/// # Errors
/// `Validation` with one `MalformedCell` error per unreadable cell.
pub fn parse_records(records: &[Record], roster: &Roster) -> Result<Vec<Chore>> {
    let mut chores = Vec::with_capacity(records.len());
    let mut errors = Vec::new();

    for (i, record) in records.iter().enumerate() {
        // Row 1 is the header.
        let row = format!("row {}", i + 2);

        let name = match text_cell(record.get(CHORE_COLUMN)) {
            Ok(Some(name)) => name,
            Ok(None) => {
                errors.push(malformed(&row, format!("{row}: '{CHORE_COLUMN}' is empty")));
                continue;
            }
            Err(found) => {
                errors.push(malformed(
                    &row,
                    format!("{row}: '{CHORE_COLUMN}' must be text, found {found}"),
                ));
                continue;
            }
        };

        let mut chore = Chore::new(name.clone());

        for person in roster.people() {
            match number_cell(record.get(person)) {
                Ok(Some(w)) => {
                    chore.weights.insert(person.clone(), w);
                }
                Ok(None) => {}
                Err(found) => errors.push(malformed(
                    &name,
                    format!("{row} ('{name}'): weight for '{person}' is not a number: {found}"),
                )),
            }
        }

        match text_cell(record.get(ASSIGNED_TO_COLUMN)) {
            Ok(assignee) => chore.assigned_to = assignee,
            Err(found) => errors.push(malformed(
                &name,
                format!("{row} ('{name}'): '{ASSIGNED_TO_COLUMN}' must be text, found {found}"),
            )),
        }

        match number_cell(record.get(FIXED_WEIGHT_COLUMN)) {
            Ok(w) => chore.fixed_weight = w,
            Err(found) => errors.push(malformed(
                &name,
                format!("{row} ('{name}'): '{FIXED_WEIGHT_COLUMN}' is not a number: {found}"),
            )),
        }

        chores.push(chore);
    }

    if errors.is_empty() {
        Ok(chores)
    } else {
        Err(AllocationError::Validation(errors))
    }
}

/// Parses a JSON array of records.
///
/// # Errors
/// `Validation` if the text is not an array of objects, or a cell is malformed.
pub fn parse_records_json(json: &str, roster: &Roster) -> Result<Vec<Chore>> {
    let records: Vec<Record> = serde_json::from_str(json).map_err(|e| {
        AllocationError::Validation(vec![malformed(
            "records",
            format!("records are not a JSON array of objects: {e}"),
        )])
    })?;
    parse_records(&records, roster)
}

fn malformed(entity: &str, message: String) -> ValidationError {
    ValidationError::new(ValidationErrorKind::MalformedCell, entity, message)
}

/// Reads a text cell. Blank → `None`; numbers are accepted as their text.
fn text_cell(cell: Option<&Value>) -> std::result::Result<Option<String>, String> {
    match cell {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let s = s.trim();
            Ok((!s.is_empty()).then(|| s.to_string()))
        }
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(other.to_string()),
    }
}

/// Reads a numeric cell. Blank → `None`; numeric text is parsed.
fn number_cell(cell: Option<&Value>) -> std::result::Result<Option<f64>, String> {
    match cell {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(|| n.to_string()),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse::<f64>().map(Some).map_err(|_| format!("{s:?}"))
            }
        }
        Some(other) => Err(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roster() -> Roster {
        Roster::new(["Kim", "Cody"]).unwrap()
    }

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_sheet_rows() {
        let rows = records(json!([
            {"Chore": "Dishes", "Kim": 3, "Cody": "5", "Assigned to": "", "Fixed weight": ""},
            {"Chore": "Cooking", "Kim": "", "Cody": "", "Assigned to": "Kim", "Fixed weight": 25},
            {"Chore": " Trash ", "Kim": 1.5, "Cody": 2, "Assigned to": "", "Fixed weight": "", "Extra": "x"},
        ]));
        let chores = parse_records(&rows, &roster()).unwrap();

        assert_eq!(chores.len(), 3);
        assert_eq!(chores[0].name, "Dishes");
        assert_eq!(chores[0].weight_for("Kim"), Some(3.0));
        assert_eq!(chores[0].weight_for("Cody"), Some(5.0));
        assert!(!chores[0].is_fixed());
        assert_eq!(chores[0].fixed_weight, None);

        assert_eq!(chores[1].assignee(), Some("Kim"));
        assert_eq!(chores[1].fixed_weight, Some(25.0));
        assert!(chores[1].weights.is_empty());

        assert_eq!(chores[2].name, "Trash");
        assert_eq!(chores[2].weight_for("Kim"), Some(1.5));
    }

    #[test]
    fn test_malformed_cells_reported_together() {
        let rows = records(json!([
            {"Chore": "Dishes", "Kim": "lots", "Cody": 1, "Assigned to": "", "Fixed weight": ""},
            {"Chore": "", "Kim": 1, "Cody": 1},
            {"Chore": "Cooking", "Kim": 1, "Cody": 1, "Assigned to": true, "Fixed weight": [1]},
        ]));
        let err = parse_records(&rows, &roster()).unwrap_err();

        let AllocationError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 4);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::MalformedCell));
        assert_eq!(errors[0].entity_id, "Dishes");
        assert_eq!(errors[1].entity_id, "row 3");
        assert!(errors[2].message.contains("Assigned to"));
    }

    #[test]
    fn test_missing_columns_are_empty() {
        let rows = records(json!([{"Chore": "Laundry", "Kim": 1}]));
        let chores = parse_records(&rows, &roster()).unwrap();
        assert_eq!(chores[0].weight_for("Cody"), None);
        assert_eq!(chores[0].assigned_to, None);
    }

    #[test]
    fn test_parse_records_json() {
        let json = r#"[{"Chore": "Dishes", "Kim": 1, "Cody": 2, "Assigned to": "", "Fixed weight": ""}]"#;
        let chores = parse_records_json(json, &roster()).unwrap();
        assert_eq!(chores.len(), 1);

        assert!(matches!(
            parse_records_json("{}", &roster()),
            Err(AllocationError::Validation(_))
        ));
    }
}
