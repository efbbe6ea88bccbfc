//! Simplified example demonstrating the `busy_time` stopwatch.
//!
//! This example measures the processor time of a few CPU-bound workloads on
//! the calling thread, accumulating them into one total, then resets the
//! stopwatch and measures a single workload in isolation.
//!
//! Run with: `cargo run --example busy_time_basic`.

#![expect(
    clippy::arithmetic_side_effects,
    reason = "this is example code that does not need production-level safety"
)]

use std::hint::black_box;

use busy_time::{PlatformQueryError, Stopwatch};

fn main() -> Result<(), PlatformQueryError> {
    println!("=== Processor Time Stopwatch Example ===");
    println!();

    let watch = Stopwatch::new();

    // Accumulate three bursts of work into one total. Anything happening
    // between stop and the next start is not counted.
    for round in 1..=3 {
        watch.start()?;
        let checksum = hash_numbers(500_000);
        watch.stop()?;

        println!("round {round}: checksum {checksum:x}, running total {} ms", watch.elapsed_milliseconds());
    }

    println!();
    println!("total after three rounds: {:?}", watch.elapsed());

    // Start over for an isolated measurement of a single workload.
    watch.restart()?;
    black_box(hash_numbers(2_000_000));
    watch.stop()?;

    println!("single large workload:    {:?}", watch.elapsed());

    Ok(())
}

/// CPU-bound busywork that the optimizer cannot remove.
fn hash_numbers(count: u64) -> u64 {
    let mut state = 0xcbf2_9ce4_8422_2325_u64;
    for i in 0..count {
        state ^= i;
        state = state.wrapping_mul(0x0100_0000_01b3);
    }
    black_box(state)
}
