//! Roster (person set) model.
//!
//! The roster is the small, ordered, fixed set of people chores are
//! divided among. Its order defines person indices everywhere else in
//! the crate: weight table columns, assignment values, candidate totals.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ConfigurationError;

/// An ordered set of uniquely named people.
///
/// Always non-empty; names are trimmed, unique, and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Roster {
    people: Vec<String>,
}

impl Roster {
    /// Creates a roster, rejecting empty, blank, or duplicate names.
    ///
    /// Surrounding whitespace is trimmed, matching how chore assignees
    /// are read.
    pub fn new<I, S>(people: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let people: Vec<String> = people
            .into_iter()
            .map(|name| {
                let name: String = name.into();
                name.trim().to_string()
            })
            .collect();
        if people.is_empty() {
            return Err(ConfigurationError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for name in &people {
            if name.is_empty() {
                return Err(ConfigurationError::BlankPerson);
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigurationError::DuplicatePerson(name.clone()));
            }
        }

        Ok(Self { people })
    }

    /// Number of people.
    #[inline]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the roster is empty (never true once constructed).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Names in roster order.
    pub fn people(&self) -> &[String] {
        &self.people
    }

    /// Name of the person at `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.people.get(index).map(String::as_str)
    }

    /// Roster index of `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.people.iter().position(|p| p == name)
    }

    /// Whether `name` is on the roster.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }
}

impl TryFrom<Vec<String>> for Roster {
    type Error = ConfigurationError;

    fn try_from(people: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(people)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.people
    }
}
