//! Start/stop measurement of processor time.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use crate::pal::{Platform, PlatformFacade, TICKS_PER_MILLISECOND};
use crate::{PlatformQueryError, Target};

/// A stopwatch that accumulates the processor time consumed by the calling
/// thread or by the entire process.
///
/// Processor time is the time a thread or process actually spent executing
/// on a processor (kernel + user), as opposed to wall-clock time. Time spent
/// blocked on I/O, sleeping, or preempted by other processes does not count,
/// which makes this stopwatch useful for profiling CPU-bound work.
///
/// Each completed [`start()`][Self::start] → [`stop()`][Self::stop] interval
/// adds its processor time delta to a running total, which
/// [`reset()`][Self::reset] and [`restart()`][Self::restart] clear.
///
/// # Examples
///
/// ```
/// use busy_time::Stopwatch;
///
/// # fn main() -> Result<(), busy_time::PlatformQueryError> {
/// let watch = Stopwatch::new();
///
/// watch.start()?;
/// // Perform some CPU-intensive work.
/// let mut sum = 0_u64;
/// for i in 0..100_000 {
///     sum = sum.wrapping_add(i);
/// }
/// std::hint::black_box(sum);
/// watch.stop()?;
///
/// assert!(!watch.is_running());
/// println!("consumed {} ms of processor time", watch.elapsed_milliseconds());
/// # Ok(())
/// # }
/// ```
///
/// # Thread safety
///
/// A single stopwatch is meant to be driven from one thread. Concurrent
/// `start`/`stop` calls from multiple threads are memory-safe but race on
/// the interval marks, producing meaningless measurements; callers needing
/// multi-threaded driving must serialize access externally (one stopwatch
/// per thread is usually the better design). The accumulated total, however,
/// is updated atomically: [`elapsed_milliseconds()`][Self::elapsed_milliseconds]
/// and [`is_running()`][Self::is_running] may be called from any thread at
/// any time, including concurrently with a `stop` call, without observing a
/// torn value.
///
/// Note also that a thread-level stopwatch reads the time of whichever
/// thread calls `start`/`stop`, so driving one across threads would measure
/// a nonsensical mixture.
#[derive(Debug)]
pub struct Stopwatch {
    target: Target,
    platform: PlatformFacade,

    // Processor time readings (100 ns ticks) taken at the most recent
    // start and stop calls.
    start_mark: AtomicU64,
    end_mark: AtomicU64,

    // Sum of the deltas of all completed intervals since the last reset.
    // The only field with cross-thread readers; updated via fetch_add.
    accumulated_ticks: AtomicU64,

    running: AtomicBool,
}

impl Stopwatch {
    /// Creates a stopwatch that measures the processor time of the calling
    /// thread.
    ///
    /// No operating system query is performed until
    /// [`start()`][Self::start] is called.
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(Target::default())
    }

    /// Creates a stopwatch with an explicit measurement scope.
    ///
    /// # Examples
    ///
    /// ```
    /// use busy_time::{Stopwatch, Target};
    ///
    /// let watch = Stopwatch::with_target(Target::Process);
    /// assert_eq!(watch.target(), Target::Process);
    /// ```
    #[must_use]
    pub fn with_target(target: Target) -> Self {
        Self::new_inner(target, PlatformFacade::real())
    }

    /// Creates a stopwatch with a specific platform.
    ///
    /// This method is used for testing purposes to inject a fake platform
    /// that does not rely on actual system calls.
    #[cfg(test)]
    pub(crate) fn with_platform(target: Target, platform: PlatformFacade) -> Self {
        Self::new_inner(target, platform)
    }

    fn new_inner(target: Target, platform: PlatformFacade) -> Self {
        Self {
            target,
            platform,
            start_mark: AtomicU64::new(0),
            end_mark: AtomicU64::new(0),
            accumulated_ticks: AtomicU64::new(0),
            running: AtomicBool::new(false),
        }
    }

    /// Starts or continues a measurement.
    ///
    /// Reads the configured processor time source and marks the reading as
    /// the start of the interval that the next [`stop()`][Self::stop] call
    /// will close. Previously accumulated intervals are unaffected.
    ///
    /// Calling `start` while a measurement is already running takes a fresh
    /// start mark, silently discarding the time elapsed since the previous
    /// unmatched `start`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformQueryError`] if the operating system cannot supply
    /// a processor time reading. The stopwatch state is unchanged in that
    /// case, so the call may be retried.
    pub fn start(&self) -> Result<(), PlatformQueryError> {
        let mark = self.current_time()?;

        self.running.store(true, Ordering::Relaxed);
        self.start_mark.store(mark, Ordering::Relaxed);

        Ok(())
    }

    /// Stops the current measurement, adding the processor time of the
    /// closed interval to the accumulated total.
    ///
    /// The addition is a single atomic increment, so readers on other
    /// threads never observe a partially applied update.
    ///
    /// Stopping a stopwatch that is not running has no effect and reports
    /// success.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformQueryError`] if the operating system cannot supply
    /// a processor time reading. The stopwatch state is unchanged in that
    /// case and the measurement remains running, so the call may be retried.
    pub fn stop(&self) -> Result<(), PlatformQueryError> {
        if !self.running.load(Ordering::Relaxed) {
            return Ok(());
        }

        let mark = self.current_time()?;

        self.running.store(false, Ordering::Relaxed);
        self.end_mark.store(mark, Ordering::Relaxed);

        // The source is monotonic, so the saturation only guards against a
        // hypothetical backwards step: such an interval counts as zero
        // rather than wrapping, and the total never decreases.
        let elapsed = mark.saturating_sub(self.start_mark.load(Ordering::Relaxed));
        self.accumulated_ticks.fetch_add(elapsed, Ordering::Relaxed);

        Ok(())
    }

    /// Clears the accumulated processor time and both interval marks.
    ///
    /// Does not change whether the stopwatch is running: resetting during an
    /// open interval discards that interval's start mark, so the next
    /// [`stop()`][Self::stop] measures from a zero mark. Use
    /// [`restart()`][Self::restart] to begin a fresh measurement in one
    /// step. Performs no operating system query and cannot fail.
    pub fn reset(&self) {
        self.start_mark.store(0, Ordering::Relaxed);
        self.end_mark.store(0, Ordering::Relaxed);
        self.accumulated_ticks.store(0, Ordering::Relaxed);
    }

    /// Clears the accumulated processor time and immediately starts a new
    /// measurement.
    ///
    /// Equivalent to [`reset()`][Self::reset] followed by
    /// [`start()`][Self::start].
    ///
    /// # Errors
    ///
    /// Returns [`PlatformQueryError`] if the operating system cannot supply
    /// a processor time reading. The accumulated total has already been
    /// cleared when this happens; the running flag is unchanged.
    pub fn restart(&self) -> Result<(), PlatformQueryError> {
        self.reset();
        self.start()
    }

    /// The accumulated processor time in platform ticks (100 ns units).
    ///
    /// Only completed start → stop intervals are counted: reading while a
    /// measurement is running excludes the currently open interval. Call
    /// [`stop()`][Self::stop] first for a total that includes it.
    #[must_use]
    pub fn elapsed_ticks(&self) -> u64 {
        self.accumulated_ticks.load(Ordering::Relaxed)
    }

    /// The accumulated processor time in whole milliseconds.
    ///
    /// One millisecond is 10,000 platform ticks. Only completed start → stop
    /// intervals are counted; see [`elapsed_ticks()`][Self::elapsed_ticks].
    #[must_use]
    pub fn elapsed_milliseconds(&self) -> i64 {
        let milliseconds = self
            .elapsed_ticks()
            .checked_div(TICKS_PER_MILLISECOND)
            .expect("divisor is a nonzero constant");

        i64::try_from(milliseconds).expect(
            "accumulated processor time exceeds i64 milliseconds - this indicates an unrealistic scenario",
        )
    }

    /// The accumulated processor time as a [`Duration`].
    ///
    /// Derived from [`elapsed_milliseconds()`][Self::elapsed_milliseconds],
    /// so the value has millisecond granularity; use
    /// [`elapsed_ticks()`][Self::elapsed_ticks] for the full 100 ns
    /// resolution.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(
            u64::try_from(self.elapsed_milliseconds())
                .expect("elapsed milliseconds are derived from an unsigned tick count"),
        )
    }

    /// Whether a measurement is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// The measurement scope this stopwatch reads.
    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    fn current_time(&self) -> Result<u64, PlatformQueryError> {
        match self.target {
            Target::Thread => self.platform.thread_time(),
            Target::Process => self.platform.process_time(),
        }
    }
}

impl Default for Stopwatch {
    /// Equivalent to [`Stopwatch::new()`]: a thread-level stopwatch.
    fn default() -> Self {
        Self::new()
    }
}
