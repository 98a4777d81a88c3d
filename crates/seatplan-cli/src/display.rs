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

//! Rendering of seating outcomes.
//!
//! The text listing follows the layout of a printed seating chart: entries
//! sorted by key, dealt alternately into a left and a right column, each row
//! showing the name and its seat. Disambiguated reservation keys ("Alice2")
//! are shown under their plain name.

use seatplan_model::assignment::SeatingOutcome;
use serde::Serialize;
use std::fmt::Write;

/// A single row of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatRow<'a> {
    pub name: &'a str,
    pub seat: u32,
}

/// Returns one row per assignee, sorted by key (case-insensitive first).
pub fn sorted_rows(outcome: &SeatingOutcome) -> Vec<SeatRow<'_>> {
    let mut entries: Vec<_> = outcome.assignment().iter().collect();
    entries.sort_by(|a, b| {
        a.key()
            .to_lowercase()
            .cmp(&b.key().to_lowercase())
            .then_with(|| a.key().cmp(b.key()))
    });

    entries
        .into_iter()
        .map(|e| SeatRow {
            name: outcome.display_name_for_key(e.key()),
            seat: e.seat().get(),
        })
        .collect()
}

/// Deals rows alternately into two columns: even positions left, odd right.
pub fn two_columns<T: Copy>(rows: &[T]) -> (Vec<T>, Vec<T>) {
    let left = rows.iter().step_by(2).copied().collect();
    let right = rows.iter().skip(1).step_by(2).copied().collect();
    (left, right)
}

/// Renders the two-column text listing.
pub fn render_text(outcome: &SeatingOutcome) -> String {
    let rows = sorted_rows(outcome);
    let mut out = String::from("Seat Assignments\n\n");

    if rows.is_empty() {
        out.push_str("(no students seated)\n");
        return out;
    }

    let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let seat_width = rows
        .iter()
        .map(|r| r.seat.to_string().len())
        .max()
        .unwrap_or(1);
    let cell = |row: &SeatRow<'_>| format!("{:<name_width$}  {:>seat_width$}", row.name, row.seat);

    let (left, right) = two_columns(&rows);
    for (i, l) in left.iter().enumerate() {
        match right.get(i) {
            Some(r) => {
                let _ = writeln!(out, "{}    {}", cell(l), cell(r));
            }
            None => {
                let _ = writeln!(out, "{}", cell(l));
            }
        }
    }
    out
}

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    key: &'a str,
    seat: u32,
    reserved: bool,
}

#[derive(Debug, Serialize)]
struct JsonOutcome<'a> {
    assignments: Vec<JsonEntry<'a>>,
    reserved_names: &'a [String],
}

/// Renders the outcome as pretty-printed JSON, entries in pipeline order.
pub fn render_json(outcome: &SeatingOutcome) -> serde_json::Result<String> {
    let assignments = outcome
        .assignment()
        .iter()
        .map(|e| JsonEntry {
            name: e.display_name(),
            key: e.key(),
            seat: e.seat().get(),
            reserved: e.is_reserved(),
        })
        .collect();

    serde_json::to_string_pretty(&JsonOutcome {
        assignments,
        reserved_names: outcome.reserved_display_names(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatplan_model::{
        assignment::{Assignment, AssignmentEntry},
        seat::SeatNumber,
    };

    fn s(n: u32) -> SeatNumber {
        SeatNumber::new(n).unwrap()
    }

    fn outcome() -> SeatingOutcome {
        SeatingOutcome::new(
            Assignment::new(vec![
                AssignmentEntry::reserved("Alice1", "Alice", s(1)),
                AssignmentEntry::reserved("Alice2", "Alice", s(2)),
                AssignmentEntry::drawn("carol", s(10)),
                AssignmentEntry::drawn("Bob", s(4)),
            ]),
            vec!["Alice".to_string(), "Alice".to_string()],
        )
    }

    #[test]
    fn test_rows_sorted_and_unsuffixed() {
        let outcome = outcome();
        let rows = sorted_rows(&outcome);
        let names: Vec<&str> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alice", "Alice", "Bob", "carol"]);
        let seats: Vec<u32> = rows.iter().map(|r| r.seat).collect();
        assert_eq!(seats, vec![1, 2, 4, 10]);
    }

    #[test]
    fn test_two_columns_alternate() {
        let (left, right) = two_columns(&[1, 2, 3, 4, 5]);
        assert_eq!(left, vec![1, 3, 5]);
        assert_eq!(right, vec![2, 4]);
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&outcome());
        let mut expected = String::new();
        expected.push_str("Seat Assignments\n\n");
        expected.push_str("Alice   1    Alice   2\n");
        expected.push_str("Bob     4    carol  10\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_odd_row_count() {
        let outcome = SeatingOutcome::new(
            Assignment::new(vec![AssignmentEntry::drawn("Zoe", s(3))]),
            Vec::new(),
        );
        assert_eq!(render_text(&outcome), "Seat Assignments\n\nZoe  3\n");
    }

    #[test]
    fn test_render_text_empty() {
        let text = render_text(&SeatingOutcome::default());
        assert!(text.ends_with("(no students seated)\n"));
    }

    #[test]
    fn test_render_json_fields() {
        let json = render_json(&outcome()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["assignments"][1]["name"], "Alice");
        assert_eq!(value["assignments"][1]["key"], "Alice2");
        assert_eq!(value["assignments"][1]["seat"], 2);
        assert_eq!(value["assignments"][1]["reserved"], true);
        assert_eq!(value["assignments"][3]["reserved"], false);
        assert_eq!(value["reserved_names"].as_array().unwrap().len(), 2);
    }
}
