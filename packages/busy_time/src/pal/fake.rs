//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};

use crate::PlatformQueryError;
use crate::pal::abstractions::Platform;

const ERR_POISONED_LOCK: &str = "FakePlatform state lock should not be poisoned";

/// Internal state for the fake platform that can be shared between clones.
#[derive(Debug)]
struct FakePlatformState {
    thread_time: u64,
    process_time: u64,
    failure_code: Option<i32>,
}

/// Fake implementation of the platform abstraction for testing.
///
/// This implementation allows tests to control the processor time readings
/// instead of relying on actual system calls. Multiple clones of the same
/// `FakePlatform` share the same underlying state, allowing tests to modify
/// readings after platform creation to simulate time progression, and to
/// inject query failures to exercise error paths.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Creates a new fake platform with zero time readings.
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                thread_time: 0,
                process_time: 0,
                failure_code: None,
            })),
        }
    }

    /// Sets the thread processor time reading, in 100 ns ticks.
    ///
    /// This affects all clones of this platform, allowing tests to simulate
    /// time progression during measurement.
    pub(crate) fn set_thread_time(&self, ticks: u64) {
        self.state.lock().expect(ERR_POISONED_LOCK).thread_time = ticks;
    }

    /// Sets the process processor time reading, in 100 ns ticks.
    ///
    /// This affects all clones of this platform, allowing tests to simulate
    /// time progression during measurement.
    pub(crate) fn set_process_time(&self, ticks: u64) {
        self.state.lock().expect(ERR_POISONED_LOCK).process_time = ticks;
    }

    /// Makes all subsequent queries fail with the given diagnostic code.
    pub(crate) fn fail_queries_with(&self, code: i32) {
        self.state.lock().expect(ERR_POISONED_LOCK).failure_code = Some(code);
    }

    /// Makes all subsequent queries succeed again.
    pub(crate) fn clear_failure(&self) {
        self.state.lock().expect(ERR_POISONED_LOCK).failure_code = None;
    }

    fn read(&self, select: impl FnOnce(&FakePlatformState) -> u64) -> Result<u64, PlatformQueryError> {
        let state = self.state.lock().expect(ERR_POISONED_LOCK);

        if let Some(code) = state.failure_code {
            return Err(PlatformQueryError::new(code));
        }

        Ok(select(&state))
    }
}

impl Platform for FakePlatform {
    fn thread_time(&self) -> Result<u64, PlatformQueryError> {
        self.read(|state| state.thread_time)
    }

    fn process_time(&self) -> Result<u64, PlatformQueryError> {
        self.read(|state| state.process_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_time() {
        let platform = FakePlatform::new();

        assert_eq!(platform.thread_time().unwrap(), 0);
        assert_eq!(platform.process_time().unwrap(), 0);
    }

    #[test]
    fn sets_thread_time() {
        let platform = FakePlatform::new();
        platform.set_thread_time(150);

        assert_eq!(platform.thread_time().unwrap(), 150);
    }

    #[test]
    fn sets_process_time() {
        let platform = FakePlatform::new();
        platform.set_process_time(250);

        assert_eq!(platform.process_time().unwrap(), 250);
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        // Setting time on one clone affects the other.
        platform1.set_thread_time(100);
        assert_eq!(platform2.thread_time().unwrap(), 100);

        platform2.set_process_time(200);
        assert_eq!(platform1.process_time().unwrap(), 200);
    }

    #[test]
    fn injected_failure_surfaces_code() {
        let platform = FakePlatform::new();
        platform.fail_queries_with(5);

        assert_eq!(platform.thread_time().unwrap_err().code(), 5);
        assert_eq!(platform.process_time().unwrap_err().code(), 5);
    }

    #[test]
    fn cleared_failure_restores_readings() {
        let platform = FakePlatform::new();
        platform.set_thread_time(75);

        platform.fail_queries_with(5);
        platform.thread_time().unwrap_err();

        platform.clear_failure();
        assert_eq!(platform.thread_time().unwrap(), 75);
    }
}
