//! Demonstrates the difference between thread-level and process-level
//! accounting.
//!
//! The workload spawns helper threads that burn processor time in parallel.
//! A thread-level stopwatch only sees the calling thread's share, while a
//! process-level stopwatch sees the combined consumption of every thread.
//!
//! Run with: `cargo run --example thread_vs_process`.

#![expect(
    clippy::arithmetic_side_effects,
    reason = "this is example code that does not need production-level safety"
)]

use std::hint::black_box;
use std::thread;

use busy_time::{PlatformQueryError, Stopwatch, Target};

const HELPER_THREADS: usize = 4;

fn main() -> Result<(), PlatformQueryError> {
    let thread_watch = Stopwatch::with_target(Target::Thread);
    let process_watch = Stopwatch::with_target(Target::Process);

    thread_watch.start()?;
    process_watch.start()?;

    // Helpers burn processor time that only the process-level stopwatch
    // will attribute to us.
    let helpers: Vec<_> = (0..HELPER_THREADS)
        .map(|_| thread::spawn(|| black_box(burn_cycles(2_000_000))))
        .collect();

    // The calling thread does some work of its own.
    black_box(burn_cycles(2_000_000));

    for helper in helpers {
        helper.join().expect("helper thread does not panic");
    }

    thread_watch.stop()?;
    process_watch.stop()?;

    println!("calling thread consumed: {:?}", thread_watch.elapsed());
    println!("whole process consumed:  {:?}", process_watch.elapsed());
    println!();
    println!(
        "the process total includes the {HELPER_THREADS} helper threads, \
         so it should be several times the thread total"
    );

    Ok(())
}

fn burn_cycles(count: u64) -> u64 {
    let mut state = 1_u64;
    for i in 0..count {
        state = state.rotate_left(7) ^ i;
        state = state.wrapping_mul(0x9e37_79b9_7f4a_7c15);
    }
    state
}
