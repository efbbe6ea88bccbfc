//! Real platform implementation backed by operating system processor time
//! accounting.

use crate::PlatformQueryError;
use crate::pal::abstractions::Platform;

/// Platform implementation that reads processor time from the operating
/// system the build is targeting.
///
/// Each reading is a one-shot query; no handles are retained between calls.
#[derive(Clone, Debug, Default)]
pub(crate) struct RealPlatform;

impl Platform for RealPlatform {
    fn thread_time(&self) -> Result<u64, PlatformQueryError> {
        imp::thread_time()
    }

    fn process_time(&self) -> Result<u64, PlatformQueryError> {
        imp::process_time()
    }
}

#[cfg(unix)]
mod imp {
    use crate::PlatformQueryError;

    const NANOSECONDS_PER_TICK: u64 = 100;
    const NANOSECONDS_PER_SECOND: u64 = 1_000_000_000;

    pub(super) fn thread_time() -> Result<u64, PlatformQueryError> {
        cpu_ticks(libc::CLOCK_THREAD_CPUTIME_ID)
    }

    pub(super) fn process_time() -> Result<u64, PlatformQueryError> {
        cpu_ticks(libc::CLOCK_PROCESS_CPUTIME_ID)
    }

    /// Reads the given CPU-time clock and rescales it to 100 ns ticks.
    ///
    /// The CPU-time clocks report the combined kernel + user time of their
    /// target, so no separate summation is needed here.
    fn cpu_ticks(clock: libc::clockid_t) -> Result<u64, PlatformQueryError> {
        let mut time = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };

        // SAFETY: No safety requirements beyond passing a valid out pointer,
        // which remains valid for the duration of the call.
        let result = unsafe { libc::clock_gettime(clock, &raw mut time) };

        if result != 0 {
            return Err(PlatformQueryError::last_os_error());
        }

        // tv_sec is non-negative and tv_nsec is within [0, 1s) for any
        // successful clock_gettime call.
        let seconds = u64::try_from(time.tv_sec)
            .expect("processor time clock reported a negative number of seconds");
        let nanoseconds = u64::try_from(time.tv_nsec)
            .expect("processor time clock reported nanoseconds outside [0, 1s)");

        let total_nanoseconds = seconds
            .checked_mul(NANOSECONDS_PER_SECOND)
            .and_then(|n| n.checked_add(nanoseconds))
            .expect(
                "processor time overflows u64 nanoseconds - this indicates an unrealistic scenario",
            );

        Ok(total_nanoseconds
            .checked_div(NANOSECONDS_PER_TICK)
            .expect("divisor is a nonzero constant"))
    }
}

#[cfg(windows)]
mod imp {
    use windows::Win32::Foundation::FILETIME;
    use windows::Win32::System::Threading::{
        GetCurrentProcess, GetCurrentThread, GetProcessTimes, GetThreadTimes,
    };

    use crate::PlatformQueryError;

    pub(super) fn thread_time() -> Result<u64, PlatformQueryError> {
        // SAFETY: No safety requirements. The pseudo handle does not need
        // to be closed.
        let thread = unsafe { GetCurrentThread() };

        let mut creation = FILETIME::default();
        let mut exit = FILETIME::default();
        let mut kernel = FILETIME::default();
        let mut user = FILETIME::default();

        // SAFETY: No safety requirements beyond passing valid out pointers,
        // which remain valid for the duration of the call.
        unsafe {
            GetThreadTimes(
                thread,
                &raw mut creation,
                &raw mut exit,
                &raw mut kernel,
                &raw mut user,
            )
        }
        .map_err(|error| PlatformQueryError::new(error.code().0))?;

        Ok(combined_ticks(&kernel, &user))
    }

    pub(super) fn process_time() -> Result<u64, PlatformQueryError> {
        // SAFETY: No safety requirements. The pseudo handle does not need
        // to be closed.
        let process = unsafe { GetCurrentProcess() };

        let mut creation = FILETIME::default();
        let mut exit = FILETIME::default();
        let mut kernel = FILETIME::default();
        let mut user = FILETIME::default();

        // SAFETY: No safety requirements beyond passing valid out pointers,
        // which remain valid for the duration of the call.
        unsafe {
            GetProcessTimes(
                process,
                &raw mut creation,
                &raw mut exit,
                &raw mut kernel,
                &raw mut user,
            )
        }
        .map_err(|error| PlatformQueryError::new(error.code().0))?;

        Ok(combined_ticks(&kernel, &user))
    }

    /// Sums kernel and user time. `FILETIME` already counts in 100 ns ticks.
    fn combined_ticks(kernel: &FILETIME, user: &FILETIME) -> u64 {
        filetime_ticks(kernel)
            .checked_add(filetime_ticks(user))
            .expect(
                "processor time overflows u64 ticks - this indicates an unrealistic scenario",
            )
    }

    fn filetime_ticks(time: &FILETIME) -> u64 {
        (u64::from(time.dwHighDateTime) << 32) | u64::from(time.dwLowDateTime)
    }
}
