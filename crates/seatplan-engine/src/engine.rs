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

//! # Seat Assignment Engine
//!
//! Runs the full seating pipeline for one invocation:
//!
//! 1. Normalize the raw roster and reservation text (`NormalizedInput`).
//! 2. Resolve reservations against `[1, total_seats]` (`Reservations`).
//! 3. Plan one seat per unreserved student (`DistributionPlanner`).
//! 4. Shuffle the plan, merge it with the reservations and validate.
//!
//! Any failure aborts the run and no partial assignment is returned. The
//! engine owns its random source and holds no other state between runs, so
//! two engines built with the same seed produce the same assignments for the
//! same input.
//!
//! ## Usage
//!
//! ```rust
//! use seatplan_engine::engine::EngineBuilder;
//!
//! let mut engine = EngineBuilder::new().with_seed(7).build();
//! let outcome = engine
//!     .assign_text("Alice\nBob\nCarol", "Alice: 2", 5)
//!     .unwrap();
//!
//! assert_eq!(outcome.assignment().len(), 3);
//! assert_eq!(outcome.assignment().seat_for("Alice1").map(|s| s.get()), Some(2));
//! ```

use crate::{planner::DistributionPlanner, shuffle::fisher_yates, validation::validate_assignment};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seatplan_model::{
    assignment::{Assignment, AssignmentEntry, SeatingOutcome},
    error::SeatingError,
    reservation::Reservations,
    roster::NormalizedInput,
    seat::{SeatNumber, SeatRange},
};

/// The seat assignment pipeline, generic over its random source.
#[derive(Debug, Clone)]
pub struct SeatAssignmentEngine<R> {
    rng: R,
    planner: DistributionPlanner,
}

impl<R> SeatAssignmentEngine<R>
where
    R: Rng,
{
    /// Creates an engine drawing from `rng` with the default planner.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            planner: DistributionPlanner::default(),
        }
    }

    /// Creates an engine with an explicit planner.
    #[inline]
    pub fn with_planner(rng: R, planner: DistributionPlanner) -> Self {
        Self { rng, planner }
    }

    /// Returns the planner used for unreserved students.
    #[inline]
    pub fn planner(&self) -> &DistributionPlanner {
        &self.planner
    }

    /// Runs the pipeline on raw newline-separated text.
    #[inline]
    pub fn assign_text(
        &mut self,
        raw_names: &str,
        raw_reservations: &str,
        total_seats: u32,
    ) -> Result<SeatingOutcome, SeatingError> {
        let input = NormalizedInput::from_text(raw_names, raw_reservations);
        self.assign(&input, total_seats)
    }

    /// Runs the pipeline on normalized input.
    pub fn assign(
        &mut self,
        input: &NormalizedInput,
        total_seats: u32,
    ) -> Result<SeatingOutcome, SeatingError> {
        let range = SeatRange::new(total_seats);

        // 1. Reservations first; they fail before anything is planned.
        let reservations = Reservations::resolve(input.reservation_lines(), range)?;

        // 2. A roster name that was reserved under its plain name is seated.
        let unassigned: Vec<&str> = {
            let reserved_names = reservations.display_name_set();
            input
                .roster()
                .iter()
                .map(String::as_str)
                .filter(|name| !reserved_names.contains(name))
                .collect()
        };

        tracing::debug!(
            total_seats,
            roster = input.roster().len(),
            reservations = reservations.len(),
            unassigned = unassigned.len(),
            "resolved seating input"
        );

        // 3. Plan and shuffle.
        let mut planned = self
            .planner
            .plan(range, reservations.seats(), unassigned.len())?;
        fisher_yates(&mut planned, &mut self.rng);

        // 4. Merge and validate.
        let assignment = merge(&reservations, &unassigned, &planned);
        validate_assignment(&assignment)?;

        let (_, reserved_display_names) = reservations.into_parts();
        Ok(SeatingOutcome::new(assignment, reserved_display_names))
    }
}

/// Merges reservations (input order) with drawn seats (roster order).
fn merge(reservations: &Reservations, unassigned: &[&str], planned: &[SeatNumber]) -> Assignment {
    debug_assert_eq!(
        unassigned.len(),
        planned.len(),
        "called `merge` with a plan that does not match the unassigned students: {} students, {} seats",
        unassigned.len(),
        planned.len()
    );

    let mut entries = Vec::with_capacity(reservations.len() + unassigned.len());
    entries.extend(
        reservations
            .records()
            .iter()
            .map(|r| AssignmentEntry::reserved(r.key(), r.display_name(), r.seat())),
    );
    for (&name, &seat) in unassigned.iter().zip(planned) {
        tracing::trace!(student = name, seat = seat.get(), "drew seat");
        entries.push(AssignmentEntry::drawn(name, seat));
    }

    Assignment::new(entries)
}

/// Builder for `SeatAssignmentEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineBuilder {
    seed: Option<u64>,
    avoid_adjacent: bool,
}

impl Default for EngineBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Creates a builder with no seed and adjacency avoidance enabled.
    #[inline]
    pub fn new() -> Self {
        Self {
            seed: None,
            avoid_adjacent: true,
        }
    }

    /// Fixes the seed of the default ChaCha8 generator.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed; `None` draws the seed from entropy.
    #[inline]
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Configures whether seats next to reservations are deprioritized.
    #[inline]
    pub fn with_adjacency_avoidance(mut self, yes: bool) -> Self {
        self.avoid_adjacent = yes;
        self
    }

    /// Returns the configured seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[inline]
    fn planner(&self) -> DistributionPlanner {
        DistributionPlanner::new().avoid_adjacent(self.avoid_adjacent)
    }

    /// Builds an engine backed by a ChaCha8 generator.
    pub fn build(self) -> SeatAssignmentEngine<ChaCha8Rng> {
        let rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        SeatAssignmentEngine::with_planner(rng, self.planner())
    }

    /// Builds an engine backed by a caller-supplied generator. The seed, if
    /// any, is ignored.
    #[inline]
    pub fn build_with_rng<R: Rng>(self, rng: R) -> SeatAssignmentEngine<R> {
        SeatAssignmentEngine::with_planner(rng, self.planner())
    }
}
