//! Platform abstraction layer for processor time queries.
//!
//! This module provides a platform abstraction that allows switching between
//! real processor time readings (operating system calls) and fake
//! implementations for testing purposes.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::{Platform, TICKS_PER_MILLISECOND};
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
