//! Errors surfaced by processor time queries.

#[cfg(unix)]
use std::io;

use thiserror::Error;

/// The operating system could not supply a processor time reading.
///
/// Carries the diagnostic code reported by the platform (`errno` on Unix
/// targets, the error code of the failed call on Windows targets). A failed
/// query leaves the stopwatch in the state it was in before the call, so the
/// caller may simply retry.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("failed to query processor time (os error {code})")]
pub struct PlatformQueryError {
    code: i32,
}

impl PlatformQueryError {
    pub(crate) fn new(code: i32) -> Self {
        Self { code }
    }

    /// Captures the diagnostic code of the most recent failed operating
    /// system call on the calling thread.
    #[cfg(unix)]
    pub(crate) fn last_os_error() -> Self {
        Self::new(io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }

    /// The diagnostic code reported by the platform.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_platform_code() {
        let error = PlatformQueryError::new(13);
        assert_eq!(error.code(), 13);
    }

    #[test]
    fn display_includes_platform_code() {
        let error = PlatformQueryError::new(22);
        assert!(error.to_string().contains("22"));
    }

    static_assertions::assert_impl_all!(PlatformQueryError: Send, Sync, std::error::Error);
}
