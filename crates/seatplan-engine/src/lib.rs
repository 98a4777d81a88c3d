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

//! Seatplan engine: distribution, shuffling and validation
//!
//! Turns normalized roster and reservation input into a validated seat
//! assignment. Reservations are honoured exactly; every other student draws
//! a seat from the remaining pool, spread evenly and kept away from seats
//! directly next to a reservation where the pool allows it.
//!
//! Core flow
//! - Build a `engine::SeatAssignmentEngine` (directly or via `engine::EngineBuilder`).
//! - Call `assign` / `assign_text` with the input and the total seat count.
//! - Receive a `seatplan_model::assignment::SeatingOutcome` or a
//!   `seatplan_model::error::SeatingError`.
//!
//! Design highlights
//! - Deterministic given a deterministic random source; the RNG is injected.
//! - No partial results: every error aborts the run.
//! - The merged assignment is always re-validated for duplicate seats.
//!
//! Module map
//! - `engine`: the pipeline and its builder.
//! - `planner`: free-seat pools, adjacency avoidance and stride planning.
//! - `shuffle`: Fisher–Yates permutation over the injected RNG.
//! - `validation`: duplicate-seat detection on the merged assignment.

pub mod engine;
pub mod planner;
pub mod shuffle;
pub mod validation;
