//! Platform abstraction for the time source behind touch samples.
//!
//! Touch timestamps are plain milliseconds since an arbitrary monotonic epoch.
//! Hosts that already receive timestamps from their event source never need a
//! clock; hosts that stamp samples themselves use a [`Clock`].

use web_time::Instant;

/// Provides timing information for touch samples.
pub trait Clock: Send + Sync {
    /// Milliseconds since this clock's epoch. Must never go backwards.
    fn now_millis(&self) -> i64;
}

/// Monotonic clock backed by `web_time::Instant`, usable on native and WASM.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        i64::try_from(self.origin.elapsed().as_millis()).unwrap_or(i64::MAX)
    }
}
