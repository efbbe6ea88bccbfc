//! Example from the package README, verified to compile and run.
//!
//! Run with: `cargo run --example busy_time_readme`.

use busy_time::{Stopwatch, Target};

fn main() -> Result<(), busy_time::PlatformQueryError> {
    // Measure the calling thread (the default). Use Target::Process to
    // measure every thread in the process instead.
    let watch = Stopwatch::with_target(Target::Thread);

    watch.start()?;
    // Perform some CPU-intensive work.
    let mut sum = 0_u64;
    for i in 0..1_000_000 {
        sum = sum.wrapping_add(i);
    }
    std::hint::black_box(sum);
    watch.stop()?;

    println!("consumed {} ms of processor time", watch.elapsed_milliseconds());
    Ok(())
}
