//! Hand-driven clock for deterministic timing tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tactile_foundation::Clock;

/// Clock that only moves when a test advances it.
///
/// Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now_ms: i64) -> Self {
        Self {
            now_ms: Arc::new(AtomicI64::new(now_ms)),
        }
    }

    pub fn advance(&self, millis: i64) -> i64 {
        self.now_ms.fetch_add(millis, Ordering::SeqCst) + millis
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}
