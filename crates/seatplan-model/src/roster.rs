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

//! Input normalization.
//!
//! Raw text arrives as newline-separated lines. Names are trimmed, empty
//! lines are dropped and exact duplicates collapse onto their first
//! occurrence, so the roster keeps first-seen order. Reservation lines are
//! trimmed and filtered the same way but are not deduplicated: two identical
//! reservation lines are two reservations.

use rustc_hash::FxHashSet;

/// The deduplicated, order-preserving list of names requesting a seat.
///
/// # Examples
///
/// ```rust
/// # use seatplan_model::roster::Roster;
///
/// let roster = Roster::parse("  Alice\nBob\n\nAlice\n Carol ");
/// assert_eq!(roster.names(), &["Alice", "Bob", "Carol"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Builds a roster from individual lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut names = Vec::new();
        for line in lines {
            let name = line.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if seen.insert(name.to_owned()) {
                names.push(name.to_owned());
            }
        }
        Self { names }
    }

    /// Builds a roster from newline-separated text.
    #[inline]
    pub fn parse(raw: &str) -> Self {
        Self::from_lines(raw.lines())
    }

    /// Returns the number of distinct names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no names were supplied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the names in first-seen order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns an iterator over the names in first-seen order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    /// Returns `true` if `name` is on the roster (exact match).
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Trims every line and drops the empty ones. Order and duplicates are kept.
pub fn clean_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        })
        .collect()
}

/// Roster and reservation lines after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedInput {
    roster: Roster,
    reservation_lines: Vec<String>,
}

impl NormalizedInput {
    /// Normalizes raw newline-separated name and reservation text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatplan_model::roster::NormalizedInput;
    ///
    /// let input = NormalizedInput::from_text("Alice\nBob\nAlice\n", "\n Alice: 3 \n\n");
    /// assert_eq!(input.roster().len(), 2);
    /// assert_eq!(input.reservation_lines(), &["Alice: 3"]);
    /// ```
    pub fn from_text(raw_names: &str, raw_reservations: &str) -> Self {
        Self::from_lines(raw_names.lines(), raw_reservations.lines())
    }

    /// Normalizes name and reservation lines that were already split.
    pub fn from_lines<N, NS, R, RS>(names: N, reservations: R) -> Self
    where
        N: IntoIterator<Item = NS>,
        NS: AsRef<str>,
        R: IntoIterator<Item = RS>,
        RS: AsRef<str>,
    {
        Self {
            roster: Roster::from_lines(names),
            reservation_lines: clean_lines(reservations),
        }
    }

    /// Returns the normalized roster.
    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the cleaned reservation lines in input order.
    #[inline]
    pub fn reservation_lines(&self) -> &[String] {
        &self.reservation_lines
    }
}
