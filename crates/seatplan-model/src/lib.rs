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

//! # Seatplan Model
//!
//! **The data model of the seatplan seat assignment engine.**
//!
//! This crate defines the values that flow through a seating run: the raw
//! input after normalization, the resolved reservations, the seat universe
//! and the final assignment. It is the interchange layer between whatever
//! collects the input (a CLI, a form) and the distribution engine in
//! `seatplan_engine`.
//!
//! ## Architecture
//!
//! * **`seat`**: `SeatNumber` (one-based, never zero) and `SeatRange` (`[1, total_seats]`).
//! * **`roster`**: Input normalization into a deduplicated, first-seen-order `Roster`
//!   plus cleaned reservation lines (`NormalizedInput`).
//! * **`reservation`**: Parsing and range-checking `name:seat` lines into
//!   `Reservations`, with per-name disambiguation keys.
//! * **`assignment`**: The merged `Assignment`, collision detection, the
//!   `SeatingOutcome` and the display-name rule for disambiguated keys.
//! * **`loading`**: `InputLoader` for reading line lists from files, readers and strings.
//! * **`error`**: `SeatingError`, the structured failure of a seating run.
//!
//! ## Design Philosophy
//!
//! 1.  **Structured errors**: failures carry the offending name, seat or count; formatting is left to the caller.
//! 2.  **Explicit order**: roster order is first-seen order, reservation order is input order.
//!     Sorting for display is the display layer's job.
//! 3.  **Fail-Fast**: reservations are range-checked while they are resolved.

pub mod assignment;
pub mod error;
pub mod loading;
pub mod reservation;
pub mod roster;
pub mod seat;
