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

//! Errors raised while turning roster and reservation input into a seat
//! assignment.
//!
//! Every variant is terminal for the current invocation: the engine never
//! returns a partial assignment alongside an error. The variants carry the
//! offending name, seat or count so a front end can render its own message
//! without re-parsing the input.

use crate::seat::SeatNumber;
use serde::{Deserialize, Serialize};

/// A seat that appears more than once in a merged assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatCollision {
    /// The seat that was handed out more than once.
    pub seat: SeatNumber,
    /// How many assignees hold this seat.
    pub count: usize,
}

impl std::fmt::Display for SeatCollision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {} ({} times)", self.seat, self.count)
    }
}

/// Several entries of an assignment share one key.
///
/// Reservation keys are built as name plus counter, so a roster name that
/// already ends in digits ("Alice1") can coincide with a reservation key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("assignee key \"{key}\" is held by {count} entries")]
pub struct DuplicateKeyError {
    /// The shared key.
    pub key: String,
    /// How many entries carry it.
    pub count: usize,
}

/// The error type of the seat assignment pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatingError {
    /// A reservation line carried no parseable seat number.
    #[error("{name}'s name is in the reserved seat list but no seat was specified")]
    MissingSeatNumber { name: String },

    /// A reservation names a seat outside `[1, total_seats]`.
    #[error(
        "invalid seat assignment: \"{name}\" is assigned to seat {seat}, but there are only {total_seats} seats available"
    )]
    SeatOutOfRange {
        name: String,
        seat: i64,
        total_seats: u32,
    },

    /// More unreserved students than free seats.
    #[error(
        "not enough seats for all students: {required} students need a seat but only {available} seats are free"
    )]
    InsufficientSeats { required: usize, available: usize },

    /// The merged assignment hands at least one seat to several assignees.
    #[error("duplicate seat assignment: {}", format_collisions(.collisions))]
    DuplicateSeatAssignment { collisions: Vec<SeatCollision> },
}

fn format_collisions(collisions: &[SeatCollision]) -> String {
    collisions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
