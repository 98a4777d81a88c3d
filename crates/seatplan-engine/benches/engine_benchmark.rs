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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use seatplan_engine::{engine::SeatAssignmentEngine, planner::DistributionPlanner};
use seatplan_model::{
    roster::NormalizedInput,
    seat::{SeatNumber, SeatRange},
};
use std::hint::black_box;

/// Builds a class of `students` names plus one reservation every `spacing` seats.
fn build_input(students: usize, total_seats: u32, spacing: u32) -> NormalizedInput {
    let names: Vec<String> = (0..students).map(|i| format!("Student {i}")).collect();
    let reservations: Vec<String> = (1..=total_seats)
        .step_by(spacing as usize)
        .enumerate()
        .map(|(i, seat)| format!("Reserved {i}:{seat}"))
        .collect();
    NormalizedInput::from_lines(names, reservations)
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_assign");

    for &(students, total_seats) in &[(30usize, 40u32), (300, 400), (3_000, 4_000)] {
        let input = build_input(students, total_seats, 10);
        group.throughput(Throughput::Elements(students as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{students}x{total_seats}")),
            &input,
            |b, input| {
                let mut engine = SeatAssignmentEngine::new(StdRng::seed_from_u64(0xC0FFEE));
                b.iter(|| {
                    let outcome = engine.assign(black_box(input), black_box(total_seats));
                    black_box(outcome).expect("benchmark input must be seatable")
                });
            },
        );
    }

    group.finish();
}

fn bench_planner(c: &mut Criterion) {
    let mut group = c.benchmark_group("planner_plan");
    let planner = DistributionPlanner::new();

    for &total_seats in &[100u32, 10_000, 1_000_000] {
        let reserved: Vec<SeatNumber> = (1..=total_seats)
            .step_by(7)
            .filter_map(SeatNumber::new)
            .collect();
        let count = (total_seats as usize - reserved.len()) / 2;
        group.throughput(Throughput::Elements(total_seats as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(total_seats),
            &reserved,
            |b, reserved| {
                b.iter(|| {
                    planner.plan(
                        SeatRange::new(black_box(total_seats)),
                        reserved.iter().copied(),
                        black_box(count),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_engine, bench_planner);
criterion_main!(benches);
