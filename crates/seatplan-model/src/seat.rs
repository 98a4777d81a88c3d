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

//! # Seat Numbers and Seat Ranges
//!
//! Seats are numbered from `1` up to and including the configured capacity.
//! `SeatNumber` wraps a `NonZeroU32`, so a seat value of `0` cannot be
//! represented at all, and `SeatRange` describes the closed universe
//! `[1, total_seats]` with no gaps.
//!
//! ## Highlights
//!
//! - `SeatNumber::predecessor` / `SeatNumber::successor` give the physical
//!   neighbours of a seat; `SeatRange::neighbors` clamps them to the range.
//! - `SeatRange::seat` converts a raw (possibly negative) integer read from
//!   user input into a `SeatNumber` only if it lies inside the range.
//! - `SeatRange::iter` yields every seat in ascending order and implements
//!   `DoubleEndedIterator`, `ExactSizeIterator` and `FusedIterator`.
//!
//! ## Usage
//!
//! ```rust
//! use seatplan_model::seat::{SeatNumber, SeatRange};
//!
//! let range = SeatRange::new(3);
//! let seats: Vec<u32> = range.iter().map(SeatNumber::get).collect();
//! assert_eq!(seats, vec![1, 2, 3]);
//! assert!(range.seat(4).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::{iter::FusedIterator, num::NonZeroU32};

/// A one-based seat number.
///
/// # Examples
///
/// ```rust
/// # use seatplan_model::seat::SeatNumber;
///
/// let seat = SeatNumber::new(7).unwrap();
/// assert_eq!(seat.get(), 7);
/// assert!(SeatNumber::new(0).is_none());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatNumber(NonZeroU32);

impl SeatNumber {
    /// The first seat of every range.
    pub const FIRST: SeatNumber = SeatNumber(NonZeroU32::MIN);

    /// Creates a new `SeatNumber`, returning `None` for `0`.
    #[inline]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns the raw seat value.
    #[inline(always)]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the zero-based position of this seat, suitable for indexing
    /// seat-sized buffers.
    #[inline(always)]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Returns the seat directly before this one, or `None` for seat `1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatplan_model::seat::SeatNumber;
    ///
    /// assert_eq!(SeatNumber::new(2).unwrap().predecessor(), SeatNumber::new(1));
    /// assert_eq!(SeatNumber::FIRST.predecessor(), None);
    /// ```
    #[inline]
    pub const fn predecessor(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }

    /// Returns the seat directly after this one, or `None` on overflow.
    #[inline]
    pub const fn successor(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<SeatNumber> for u32 {
    #[inline]
    fn from(seat: SeatNumber) -> Self {
        seat.get()
    }
}

impl std::fmt::Debug for SeatNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SeatNumber({})", self.get())
    }
}

impl std::fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The closed seat universe `[1, total_seats]`.
///
/// A range with `total_seats == 0` is valid and empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SeatRange {
    total_seats: u32,
}

impl SeatRange {
    /// Creates the range `[1, total_seats]`.
    #[inline]
    pub const fn new(total_seats: u32) -> Self {
        Self { total_seats }
    }

    /// Returns the number of seats in the range.
    #[inline(always)]
    pub const fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Returns the number of seats as `usize`.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.total_seats as usize
    }

    /// Returns `true` if the range holds no seats.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.total_seats == 0
    }

    /// Returns the highest seat, or `None` for an empty range.
    #[inline]
    pub const fn last(&self) -> Option<SeatNumber> {
        SeatNumber::new(self.total_seats)
    }

    /// Returns `true` if `seat` lies inside the range.
    #[inline]
    pub const fn contains(&self, seat: SeatNumber) -> bool {
        seat.get() <= self.total_seats
    }

    /// Converts a raw integer into a `SeatNumber` if it lies in `[1, total_seats]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatplan_model::seat::SeatRange;
    ///
    /// let range = SeatRange::new(10);
    /// assert_eq!(range.seat(10).map(|s| s.get()), Some(10));
    /// assert!(range.seat(0).is_none());
    /// assert!(range.seat(-3).is_none());
    /// assert!(range.seat(11).is_none());
    /// ```
    #[inline]
    pub fn seat(&self, raw: i64) -> Option<SeatNumber> {
        if raw < 1 || raw > i64::from(self.total_seats) {
            return None;
        }
        u32::try_from(raw).ok().and_then(SeatNumber::new)
    }

    /// Returns the in-range neighbours `(seat - 1, seat + 1)` of `seat`.
    ///
    /// The lower neighbour exists only when `seat > 1`, the upper one only
    /// when `seat < total_seats`.
    #[inline]
    pub fn neighbors(&self, seat: SeatNumber) -> (Option<SeatNumber>, Option<SeatNumber>) {
        let before = seat.predecessor();
        let after = if seat.get() < self.total_seats {
            seat.successor()
        } else {
            None
        };
        (before, after)
    }

    /// Returns an iterator over every seat in ascending order.
    #[inline]
    pub fn iter(&self) -> SeatIter {
        SeatIter {
            next: 1,
            end: u64::from(self.total_seats),
        }
    }
}

impl IntoIterator for SeatRange {
    type Item = SeatNumber;
    type IntoIter = SeatIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for SeatRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[1, {}]", self.total_seats)
    }
}

/// Ascending iterator over the seats of a `SeatRange`.
///
/// Yields `next..=end`; exhausted once `next > end`. Bounds are kept as `u64`
/// so stepping past `u32::MAX` cannot wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatIter {
    next: u64,
    end: u64,
}

impl Iterator for SeatIter {
    type Item = SeatNumber;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.end {
            return None;
        }
        let seat = u32::try_from(self.next).ok().and_then(SeatNumber::new);
        self.next += 1;
        seat
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for SeatIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next > self.end {
            return None;
        }
        let seat = u32::try_from(self.end).ok().and_then(SeatNumber::new);
        self.end -= 1;
        seat
    }
}

impl ExactSizeIterator for SeatIter {}

impl FusedIterator for SeatIter {}
