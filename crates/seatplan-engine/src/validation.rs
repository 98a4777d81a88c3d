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

//! Post-merge validation of seat assignments.
//!
//! After reservations and drawn seats are merged, every seat may be held by
//! at most one assignee. Any violation rejects the whole assignment: either two
//! reservation lines named the same seat, or the planner produced a repeated
//! pick. The error lists every offending seat with its occurrence count.

use seatplan_model::{assignment::Assignment, error::SeatingError};

/// Checks that no seat in `assignment` is held more than once.
pub fn validate_assignment(assignment: &Assignment) -> Result<(), SeatingError> {
    let collisions = assignment.collisions();
    if collisions.is_empty() {
        return Ok(());
    }

    tracing::warn!(
        collisions = collisions.len(),
        assignees = assignment.len(),
        "rejecting seat assignment with duplicate seats"
    );
    Err(SeatingError::DuplicateSeatAssignment { collisions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatplan_model::{
        assignment::AssignmentEntry,
        error::SeatCollision,
        seat::SeatNumber,
    };

    fn s(n: u32) -> SeatNumber {
        SeatNumber::new(n).unwrap()
    }

    #[test]
    fn test_accepts_injective_assignment() {
        let assignment = Assignment::new(vec![
            AssignmentEntry::reserved("Ann1", "Ann", s(1)),
            AssignmentEntry::drawn("Bob", s(2)),
        ]);
        assert!(validate_assignment(&assignment).is_ok());
    }

    #[test]
    fn test_accepts_empty_assignment() {
        assert!(validate_assignment(&Assignment::default()).is_ok());
    }

    #[test]
    fn test_rejects_and_reports_all_collisions() {
        let assignment = Assignment::new(vec![
            AssignmentEntry::reserved("Ann1", "Ann", s(4)),
            AssignmentEntry::drawn("Bob", s(4)),
            AssignmentEntry::drawn("Cid", s(1)),
            AssignmentEntry::drawn("Dee", s(1)),
            AssignmentEntry::drawn("Eve", s(1)),
        ]);
        assert_eq!(
            validate_assignment(&assignment),
            Err(SeatingError::DuplicateSeatAssignment {
                collisions: vec![
                    SeatCollision { seat: s(1), count: 3 },
                    SeatCollision { seat: s(4), count: 2 },
                ],
            })
        );
    }
}
