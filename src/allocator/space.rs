//! Assignment space enumeration.
//!
//! # Encoding
//!
//! Each candidate is identified by an index in `0..len`, read as a
//! mixed-radix number with one base-`|people|` digit per free chore
//! (first free chore = least significant digit). Pinned chores contribute
//! no digit and always decode to their assignee, so
//! `len = |people| ^ free_chores`.
//!
//! Index decoding gives both a lazy, restartable sequential iterator and
//! random access for splitting the space across worker threads.

use serde::Serialize;

use crate::error::{AbortReason, AllocationError, Result};
use crate::models::{Assignment, WeightTable};
use crate::validation::{ValidationError, ValidationErrorKind};

/// The set of all assignments consistent with the pinned chores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentSpace {
    person_count: usize,
    /// Per chore: `Some(person)` if pinned, `None` if free.
    slots: Vec<Option<usize>>,
    len: usize,
}

impl AssignmentSpace {
    /// Builds the space for a normalized table.
    ///
    /// # Errors
    /// `SearchAborted` if the space cannot be indexed on this platform.
    pub fn from_table(table: &WeightTable) -> Result<Self> {
        let slots = (0..table.chore_count())
            .map(|c| table.fixed_assignee(c))
            .collect();
        Self::new(table.person_count(), slots)
    }

    /// Builds the space from a person count and per-chore pins.
    ///
    /// # Errors
    /// - `Validation` if a pin names a person index `>= person_count`.
    /// - `SearchAborted` if the space cannot be indexed on this platform.
    pub fn new(person_count: usize, slots: Vec<Option<usize>>) -> Result<Self> {
        let out_of_range: Vec<ValidationError> = slots
            .iter()
            .enumerate()
            .filter_map(|(chore, slot)| match *slot {
                Some(person) if person >= person_count => Some(ValidationError::new(
                    ValidationErrorKind::UnknownAssignee,
                    format!("chore {chore}"),
                    format!("Chore {chore} is pinned to person {person}, but there are only {person_count}"),
                )),
                _ => None,
            })
            .collect();
        if !out_of_range.is_empty() {
            return Err(AllocationError::Validation(out_of_range));
        }

        let free = slots.iter().filter(|s| s.is_none()).count();
        let candidates = Self::size_of(person_count, free);
        let len = usize::try_from(candidates).map_err(|_| AbortReason::CandidateLimit {
            candidates,
            limit: usize::MAX as u128,
        })?;

        Ok(Self {
            person_count,
            slots,
            len,
        })
    }

    /// `person_count ^ free_chores`, saturating at `u128::MAX`.
    pub fn size_of(person_count: usize, free_chores: usize) -> u128 {
        u32::try_from(free_chores)
            .ok()
            .and_then(|exp| (person_count as u128).checked_pow(exp))
            .unwrap_or(u128::MAX)
    }

    /// Number of candidate assignments.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the space is empty (only possible with no people and a free chore).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chores per assignment.
    pub fn chore_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of free chores (mixed-radix digits).
    pub fn free_chore_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// Decodes the assignment at `index`.
    pub fn get(&self, index: usize) -> Option<Assignment> {
        self.assignees_at(index)
            .map(|assignees| Assignment::new(assignees.collect()))
    }

    /// Per-chore person indices of the assignment at `index`, without allocating.
    pub fn assignees_at(&self, index: usize) -> Option<impl Iterator<Item = usize> + '_> {
        if index >= self.len {
            return None;
        }

        let base = self.person_count;
        let mut rest = index;
        Some(self.slots.iter().map(move |slot| match *slot {
            Some(person) => person,
            None => {
                let digit = rest % base;
                rest /= base;
                digit
            }
        }))
    }

    /// Iterates over every assignment. Can be called any number of times.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            space: self,
            next: 0,
            end: self.len,
        }
    }
}

impl<'a> IntoIterator for &'a AssignmentSpace {
    type Item = Assignment;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over an [`AssignmentSpace`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    space: &'a AssignmentSpace,
    next: usize,
    end: usize,
}

impl Iterator for Iter<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        if self.next >= self.end {
            return None;
        }
        let item = self.space.get(self.next);
        self.next += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<Assignment> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }
}

impl ExactSizeIterator for Iter<'_> {}
