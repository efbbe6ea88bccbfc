//! Platform abstraction trait definitions.

use std::fmt::Debug;

use crate::PlatformQueryError;

/// Number of platform ticks in one millisecond of processor time.
///
/// A tick is 100 nanoseconds, the granularity of the operating system
/// processor time accounting this crate reads. Platforms whose native unit
/// differs rescale their readings to this unit.
pub(crate) const TICKS_PER_MILLISECOND: u64 = 10_000;

/// Provides processor time readings.
///
/// This trait abstracts the underlying platform-specific processor time
/// accounting, allowing for both real implementations (using system calls)
/// and fake implementations (for testing).
///
/// Every reading is the sum of kernel and user processor time consumed by
/// the target since its creation, in 100-nanosecond ticks.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Reads the processor time consumed so far by the calling thread.
    fn thread_time(&self) -> Result<u64, PlatformQueryError>;

    /// Reads the processor time consumed so far by the entire process.
    fn process_time(&self) -> Result<u64, PlatformQueryError>;
}
