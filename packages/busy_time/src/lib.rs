//! Start/stop stopwatch over the processor time consumed by a thread or process.
//!
//! Unlike a wall-clock stopwatch, the [`Stopwatch`] in this package reads
//! scheduler-reported processor time (kernel + user), so time spent blocked on
//! I/O, sleeping, or preempted by other processes does not count. This makes it
//! useful for profiling CPU-bound work independent of what else the machine is
//! doing.
//!
//! The core functionality includes:
//! - [`Stopwatch`] - Accumulates processor time across start/stop cycles
//! - [`Target`] - Selects thread-level or process-level accounting
//! - [`PlatformQueryError`] - Raised when the operating system cannot supply a reading
//!
//! # Simple usage
//!
//! ```
//! use busy_time::Stopwatch;
//!
//! # fn main() -> Result<(), busy_time::PlatformQueryError> {
//! let watch = Stopwatch::new();
//!
//! watch.start()?;
//! // Perform some CPU-intensive work.
//! let mut sum = 0_u64;
//! for i in 0..100_000 {
//!     sum = sum.wrapping_add(i);
//! }
//! std::hint::black_box(sum);
//! watch.stop()?;
//!
//! println!("consumed {} ms of processor time", watch.elapsed_milliseconds());
//! # Ok(())
//! # }
//! ```
//!
//! # Accumulating multiple intervals
//!
//! Each completed start/stop cycle adds to a running total until the stopwatch
//! is reset:
//!
//! ```
//! use busy_time::Stopwatch;
//!
//! # fn main() -> Result<(), busy_time::PlatformQueryError> {
//! let watch = Stopwatch::new();
//!
//! for _ in 0..3 {
//!     watch.start()?;
//!     // Only the work between start and stop is counted.
//!     std::hint::black_box(42 * 2);
//!     watch.stop()?;
//! }
//!
//! let total = watch.elapsed();
//! watch.reset();
//! assert_eq!(watch.elapsed_milliseconds(), 0);
//! # _ = total;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread vs process accounting
//!
//! ```
//! use busy_time::{Stopwatch, Target};
//!
//! # fn main() -> Result<(), busy_time::PlatformQueryError> {
//! // Count only the calling thread (the default).
//! let thread_watch = Stopwatch::with_target(Target::Thread);
//!
//! // Count every thread in the process.
//! let process_watch = Stopwatch::with_target(Target::Process);
//! # _ = (thread_watch, process_watch);
//! # Ok(())
//! # }
//! ```
//!
//! # Threading
//!
//! A single stopwatch is meant to be driven from one thread: concurrent
//! `start`/`stop` calls do not corrupt memory but produce meaningless
//! measurements. The accumulated total may be read from any thread at any
//! time, including concurrently with a `stop` call on another thread.

mod error;
mod pal;
mod stopwatch;
mod target;

pub use error::PlatformQueryError;
pub use stopwatch::Stopwatch;
pub use target::Target;
