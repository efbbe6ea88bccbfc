//! Benchmarks to measure the compute overhead of `busy_time` logic itself.
//!
//! These benchmarks measure the overhead of the stopwatch infrastructure by
//! driving empty measurement cycles - cycles that do not do any actual work
//! but still incur the query and accumulation overhead.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use busy_time::{Stopwatch, Target};
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("busy_time_overhead");

    // Baseline measurement - no stopwatch at all.
    group.bench_function("baseline_empty", |b| {
        b.iter(|| {
            black_box(());
        });
    });

    {
        let watch = Stopwatch::with_target(Target::Thread);
        group.bench_function("thread_cycle_empty", |b| {
            b.iter(|| {
                // Empty cycle - measures only the overhead of the two
                // platform queries and the accumulator update.
                watch.start().unwrap();
                watch.stop().unwrap();
            });
        });
    }

    {
        let watch = Stopwatch::with_target(Target::Process);
        group.bench_function("process_cycle_empty", |b| {
            b.iter(|| {
                watch.start().unwrap();
                watch.stop().unwrap();
            });
        });
    }

    {
        let watch = Stopwatch::with_target(Target::Thread);
        watch.start().unwrap();
        watch.stop().unwrap();

        group.bench_function("elapsed_read", |b| {
            b.iter(|| {
                black_box(watch.elapsed_milliseconds());
            });
        });
    }

    group.finish();
}
