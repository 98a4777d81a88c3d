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

//! Distribution planning for unreserved students.
//!
//! The planner works on the complement of the reserved seats. Free seats that
//! sit directly next to a reserved seat form the *avoidance set*; they are
//! kept as a fallback pool, while the remaining free seats form the
//! prioritized pool. Unreserved students are spread over the prioritized pool
//! with an even stride:
//!
//! ```text
//! step = max(1, |prioritized| / count)
//! pick i = prioritized[i * step]            if that index exists
//!        = fallback[i mod |fallback|]       otherwise
//! ```
//!
//! With `step >= 2` every stride index stays inside the prioritized pool, and
//! with `step == 1` the indices that overflow form a run of consecutive
//! residues no longer than the fallback pool, so the picks are distinct
//! whenever the capacity check passed. The plan is nevertheless validated
//! again after the merge; see `validation`.
//!
//! The plan is ordered but not yet random: callers shuffle it before handing
//! seats out.

use fixedbitset::FixedBitSet;
use seatplan_model::{
    error::SeatingError,
    seat::{SeatNumber, SeatRange},
};

/// Free seats of one run, split by adjacency to a reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatPools {
    available: Vec<SeatNumber>,
    prioritized: Vec<SeatNumber>,
    fallback: Vec<SeatNumber>,
}

impl SeatPools {
    /// Computes the pools for `range` given the reserved seats.
    ///
    /// Reserved seats outside `range` are ignored. With `avoid_adjacent`
    /// disabled the avoidance set is empty and every free seat is prioritized.
    pub fn new<I>(range: SeatRange, reserved: I, avoid_adjacent: bool) -> Self
    where
        I: IntoIterator<Item = SeatNumber>,
    {
        let mut occupied = FixedBitSet::with_capacity(range.len());
        let mut avoidance = FixedBitSet::with_capacity(range.len());

        for seat in reserved {
            if !range.contains(seat) {
                continue;
            }
            occupied.insert(seat.index());

            if avoid_adjacent {
                let (before, after) = range.neighbors(seat);
                for neighbor in [before, after].into_iter().flatten() {
                    avoidance.insert(neighbor.index());
                }
            }
        }

        let available: Vec<SeatNumber> = range
            .iter()
            .filter(|seat| !occupied.contains(seat.index()))
            .collect();

        let (fallback, prioritized): (Vec<SeatNumber>, Vec<SeatNumber>) = available
            .iter()
            .partition(|seat| avoidance.contains(seat.index()));

        Self {
            available,
            prioritized,
            fallback,
        }
    }

    /// All free seats in ascending order.
    #[inline]
    pub fn available(&self) -> &[SeatNumber] {
        &self.available
    }

    /// Free seats not adjacent to any reservation, ascending.
    #[inline]
    pub fn prioritized(&self) -> &[SeatNumber] {
        &self.prioritized
    }

    /// Free seats adjacent to at least one reservation, ascending.
    #[inline]
    pub fn fallback(&self) -> &[SeatNumber] {
        &self.fallback
    }

    /// Returns the stride used to spread `count` students over the
    /// prioritized pool.
    #[inline]
    pub fn step(&self, count: usize) -> usize {
        if count == 0 {
            return 1;
        }
        (self.prioritized.len() / count).max(1)
    }

    /// Picks `count` seats using the stride rule.
    ///
    /// Fails with `SeatingError::InsufficientSeats` if `count` exceeds the
    /// number of free seats.
    pub fn stride(&self, count: usize) -> Result<Vec<SeatNumber>, SeatingError> {
        let insufficient = || SeatingError::InsufficientSeats {
            required: count,
            available: self.available.len(),
        };

        if count > self.available.len() {
            return Err(insufficient());
        }

        let step = self.step(count);
        let mut planned = Vec::with_capacity(count);
        for i in 0..count {
            let seat = self
                .prioritized
                .get(i * step)
                .or_else(|| match self.fallback.len() {
                    0 => None,
                    n => self.fallback.get(i % n),
                })
                .copied()
                .ok_or_else(insufficient)?;
            planned.push(seat);
        }

        Ok(planned)
    }
}

/// Plans one seat per unreserved student, spreading them away from
/// reservations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DistributionPlanner {
    avoid_adjacent: bool,
}

impl Default for DistributionPlanner {
    #[inline]
    fn default() -> Self {
        Self {
            avoid_adjacent: true,
        }
    }
}

impl DistributionPlanner {
    /// Creates a planner with adjacency avoidance enabled.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether seats next to reservations are deprioritized.
    #[inline]
    pub fn avoid_adjacent(mut self, yes: bool) -> Self {
        self.avoid_adjacent = yes;
        self
    }

    /// Returns `true` if seats next to reservations are deprioritized.
    #[inline]
    pub fn avoids_adjacent(&self) -> bool {
        self.avoid_adjacent
    }

    /// Computes the seat pools for `range` and the reserved seats.
    #[inline]
    pub fn pools<I>(&self, range: SeatRange, reserved: I) -> SeatPools
    where
        I: IntoIterator<Item = SeatNumber>,
    {
        SeatPools::new(range, reserved, self.avoid_adjacent)
    }

    /// Produces an ordered plan of `count` seats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatplan_engine::planner::DistributionPlanner;
    /// # use seatplan_model::seat::{SeatNumber, SeatRange};
    ///
    /// let reserved = [SeatNumber::new(5).unwrap()];
    /// let plan = DistributionPlanner::new()
    ///     .plan(SeatRange::new(10), reserved, 3)
    ///     .unwrap();
    /// let seats: Vec<u32> = plan.iter().map(|s| s.get()).collect();
    /// // prioritized = [1, 2, 3, 7, 8, 9, 10], step = 2
    /// assert_eq!(seats, vec![1, 3, 8]);
    /// ```
    pub fn plan<I>(
        &self,
        range: SeatRange,
        reserved: I,
        count: usize,
    ) -> Result<Vec<SeatNumber>, SeatingError>
    where
        I: IntoIterator<Item = SeatNumber>,
    {
        let pools = self.pools(range, reserved);

        tracing::debug!(
            total_seats = range.total_seats(),
            available = pools.available().len(),
            prioritized = pools.prioritized().len(),
            fallback = pools.fallback().len(),
            students = count,
            step = pools.step(count),
            "planning seat distribution"
        );

        pools.stride(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn s(n: u32) -> SeatNumber {
        SeatNumber::new(n).unwrap()
    }

    fn raw(seats: &[SeatNumber]) -> Vec<u32> {
        seats.iter().map(|s| s.get()).collect()
    }

    #[test]
    fn test_pools_split_by_adjacency() {
        let pools = SeatPools::new(SeatRange::new(8), [s(3), s(6)], true);
        assert_eq!(raw(pools.available()), vec![1, 2, 4, 5, 7, 8]);
        assert_eq!(raw(pools.prioritized()), vec![1, 8]);
        assert_eq!(raw(pools.fallback()), vec![2, 4, 5, 7]);
    }

    #[test]
    fn test_pools_without_avoidance() {
        let pools = SeatPools::new(SeatRange::new(5), [s(3)], false);
        assert_eq!(raw(pools.prioritized()), vec![1, 2, 4, 5]);
        assert!(pools.fallback().is_empty());
    }

    #[test]
    fn test_pools_edges_do_not_leave_range() {
        // Seat 1 has no lower neighbour, the last seat no upper one.
        let pools = SeatPools::new(SeatRange::new(4), [s(1), s(4)], true);
        assert_eq!(raw(pools.available()), vec![2, 3]);
        assert_eq!(raw(pools.fallback()), vec![2, 3]);
        assert!(pools.prioritized().is_empty());
    }

    #[test]
    fn test_pools_ignore_out_of_range_reservations() {
        let pools = SeatPools::new(SeatRange::new(3), [s(9)], true);
        assert_eq!(raw(pools.available()), vec![1, 2, 3]);
        assert_eq!(raw(pools.prioritized()), vec![1, 2, 3]);
    }

    #[test]
    fn test_step_is_at_least_one() {
        let pools = SeatPools::new(SeatRange::new(3), [], true);
        assert_eq!(pools.step(0), 1);
        assert_eq!(pools.step(1), 3);
        assert_eq!(pools.step(2), 1);
        assert_eq!(pools.step(3), 1);
    }

    #[test]
    fn test_stride_spreads_over_prioritized() {
        let pools = SeatPools::new(SeatRange::new(12), [], true);
        assert_eq!(raw(&pools.stride(4).unwrap()), vec![1, 4, 7, 10]);
    }

    #[test]
    fn test_stride_falls_back_cyclically() {
        // prioritized = [1, 8], fallback = [2, 4, 5, 7], step = 1
        let pools = SeatPools::new(SeatRange::new(8), [s(3), s(6)], true);
        let plan = pools.stride(5).unwrap();
        // i = 0, 1 -> prioritized; i = 2, 3, 4 -> fallback[2], [3], [0]
        assert_eq!(raw(&plan), vec![1, 8, 5, 7, 2]);
    }

    #[test]
    fn test_stride_uses_every_seat_at_capacity() {
        let pools = SeatPools::new(SeatRange::new(8), [s(3), s(6)], true);
        let mut plan = raw(&pools.stride(6).unwrap());
        plan.sort_unstable();
        assert_eq!(plan, vec![1, 2, 4, 5, 7, 8]);
    }

    #[test]
    fn test_stride_rejects_over_capacity() {
        let pools = SeatPools::new(SeatRange::new(4), [s(2)], true);
        assert_eq!(
            pools.stride(4),
            Err(SeatingError::InsufficientSeats {
                required: 4,
                available: 3,
            })
        );
    }

    #[test]
    fn test_zero_students_yield_empty_plan() {
        let plan = DistributionPlanner::new()
            .plan(SeatRange::new(0), [], 0)
            .unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_planner_toggle() {
        let planner = DistributionPlanner::new().avoid_adjacent(false);
        assert!(!planner.avoids_adjacent());
        let plan = planner.plan(SeatRange::new(3), [s(2)], 2).unwrap();
        assert_eq!(raw(&plan), vec![1, 3]);
    }

    fn arb_layout() -> impl Strategy<Value = (u32, Vec<u32>, usize)> {
        (1u32..120).prop_flat_map(|total| {
            let seats: Vec<u32> = (1..=total).collect();
            let max_reserved = (total as usize).min(30);
            (
                Just(total),
                proptest::sample::subsequence(seats, 0..=max_reserved),
                0usize..=(total as usize),
            )
        })
    }

    proptest! {
        #[test]
        fn stride_picks_are_distinct_free_seats((total, reserved, count) in arb_layout()) {
            let range = SeatRange::new(total);
            let reserved: Vec<SeatNumber> = reserved.into_iter().map(s).collect();
            let pools = SeatPools::new(range, reserved.iter().copied(), true);

            match pools.stride(count) {
                Ok(plan) => {
                    prop_assert_eq!(plan.len(), count);
                    let mut sorted = raw(&plan);
                    sorted.sort_unstable();
                    sorted.dedup();
                    prop_assert_eq!(sorted.len(), count, "duplicate seat in plan");
                    for seat in &plan {
                        prop_assert!(range.contains(*seat));
                        prop_assert!(!reserved.contains(seat));
                    }
                }
                Err(SeatingError::InsufficientSeats { required, available }) => {
                    prop_assert_eq!(required, count);
                    prop_assert_eq!(available, pools.available().len());
                    prop_assert!(count > available);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }
}
