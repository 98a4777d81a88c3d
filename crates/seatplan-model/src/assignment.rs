// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The final seat assignment and the outcome handed to display layers.
//!
//! An `Assignment` is a flat list of entries, each binding an assignee key to
//! a seat. Reservation entries come first in reservation order, followed by
//! the drawn (unreserved) students in roster order. The engine only accepts an
//! assignment whose seats are pairwise distinct; `Assignment::collisions`
//! reports every seat that breaks that rule.

use crate::{
    error::{DuplicateKeyError, SeatCollision},
    seat::SeatNumber,
};
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// How an assignee obtained its seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssigneeKind {
    /// The seat was fixed by a reservation line.
    Reserved,
    /// The seat was drawn by the distribution planner.
    Drawn,
}

/// A single assignee bound to a seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentEntry {
    key: String,
    display_name: String,
    seat: SeatNumber,
    kind: AssigneeKind,
}

impl AssignmentEntry {
    /// Creates an entry for a reservation, keyed by its disambiguated key.
    #[inline]
    pub fn reserved(key: impl Into<String>, display_name: impl Into<String>, seat: SeatNumber) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            seat,
            kind: AssigneeKind::Reserved,
        }
    }

    /// Creates an entry for a drawn student; key and display name coincide.
    #[inline]
    pub fn drawn(name: impl Into<String>, seat: SeatNumber) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            key: name,
            seat,
            kind: AssigneeKind::Drawn,
        }
    }

    /// The assignee key: a disambiguated reservation key or a roster name.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The name to show for this entry.
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The assigned seat.
    #[inline]
    pub fn seat(&self) -> SeatNumber {
        self.seat
    }

    /// Whether the seat came from a reservation or was drawn.
    #[inline]
    pub fn kind(&self) -> AssigneeKind {
        self.kind
    }

    /// Returns `true` for reservation entries.
    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.kind == AssigneeKind::Reserved
    }
}

/// A mapping from assignee keys to seats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    entries: Vec<AssignmentEntry>,
}

impl Assignment {
    /// Creates an assignment from entries. No uniqueness check is made here.
    #[inline]
    pub fn new(entries: Vec<AssignmentEntry>) -> Self {
        Self { entries }
    }

    /// Returns the number of assignees.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nobody was seated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries in pipeline order.
    #[inline]
    pub fn entries(&self) -> &[AssignmentEntry] {
        &self.entries
    }

    /// Returns an iterator over all entries in pipeline order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, AssignmentEntry> {
        self.entries.iter()
    }

    /// Returns the seat held by `key`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatplan_model::assignment::{Assignment, AssignmentEntry};
    /// # use seatplan_model::seat::SeatNumber;
    ///
    /// let seat = SeatNumber::new(4).unwrap();
    /// let assignment = Assignment::new(vec![AssignmentEntry::drawn("Bob", seat)]);
    /// assert_eq!(assignment.seat_for("Bob"), Some(seat));
    /// assert_eq!(assignment.seat_for("Eve"), None);
    /// ```
    pub fn seat_for(&self, key: &str) -> Option<SeatNumber> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(AssignmentEntry::seat)
    }

    /// Returns every seat that is held more than once, in ascending seat order.
    pub fn collisions(&self) -> Vec<SeatCollision> {
        let mut counts: FxHashMap<SeatNumber, usize> = FxHashMap::default();
        for entry in &self.entries {
            *counts.entry(entry.seat).or_insert(0) += 1;
        }

        let mut collisions: Vec<SeatCollision> = counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(seat, count)| SeatCollision { seat, count })
            .collect();
        collisions.sort_unstable_by_key(|c| c.seat);
        collisions
    }

    /// Returns `true` if no two entries share a seat.
    #[inline]
    pub fn is_injective(&self) -> bool {
        self.collisions().is_empty()
    }

    /// Returns the key → seat map.
    ///
    /// Fails if two entries share a key, which happens when a roster name
    /// equals a generated reservation key (roster "Alice1" next to a
    /// reservation for "Alice"). The entries themselves are kept intact.
    pub fn to_map(&self) -> Result<FxHashMap<&str, SeatNumber>, DuplicateKeyError> {
        let mut map = FxHashMap::default();
        map.reserve(self.entries.len());
        for entry in &self.entries {
            if map.insert(entry.key.as_str(), entry.seat).is_some() {
                return Err(DuplicateKeyError {
                    key: entry.key.clone(),
                    count: self.entries.iter().filter(|e| e.key == entry.key).count(),
                });
            }
        }
        Ok(map)
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a AssignmentEntry;
    type IntoIter = std::slice::Iter<'a, AssignmentEntry>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

static TRAILING_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+$").unwrap());

/// Returns the name to display for an assignee key.
///
/// A trailing run of digits is stripped from `key`; if what remains is one of
/// the reserved display names, that name is shown, otherwise the key is shown
/// unchanged.
///
/// # Examples
///
/// ```rust
/// # use seatplan_model::assignment::display_name_for_key;
///
/// let reserved = vec!["Alice".to_string()];
/// assert_eq!(display_name_for_key("Alice2", &reserved), "Alice");
/// assert_eq!(display_name_for_key("Room101", &reserved), "Room101");
/// ```
pub fn display_name_for_key<'a, S>(key: &'a str, reserved_display_names: &[S]) -> &'a str
where
    S: AsRef<str>,
{
    let stripped = TRAILING_DIGITS.replace(key, "");
    if reserved_display_names
        .iter()
        .any(|n| n.as_ref() == stripped.as_ref())
    {
        &key[..stripped.len()]
    } else {
        key
    }
}

/// The successful result of one seating run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingOutcome {
    assignment: Assignment,
    reserved_display_names: Vec<String>,
}

impl SeatingOutcome {
    /// Creates a new outcome.
    #[inline]
    pub fn new(assignment: Assignment, reserved_display_names: Vec<String>) -> Self {
        Self {
            assignment,
            reserved_display_names,
        }
    }

    /// The validated assignment.
    #[inline]
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// One display name per reservation line, in input order.
    #[inline]
    pub fn reserved_display_names(&self) -> &[String] {
        &self.reserved_display_names
    }

    /// Returns the name to display for `key`; see [`display_name_for_key`].
    #[inline]
    pub fn display_name_for_key<'a>(&self, key: &'a str) -> &'a str {
        display_name_for_key(key, &self.reserved_display_names)
    }
}
