//! Injectable wall-clock time source

use chrono::{DateTime, Utc};

/// Trait for the time source used in expiration decisions
///
/// Injected into the service so tests can drive time deterministically
/// instead of sleeping against the real clock.
pub trait Clock: Send + Sync {
    /// Get the current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
