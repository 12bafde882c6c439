//! Haptic ports for assertions.

use std::cell::RefCell;
use std::rc::Rc;
use tactile_foundation::{HapticError, HapticPort};

/// Records every pattern it is asked to play.
///
/// Clones share the same log, so a test can keep one handle while the
/// dispatcher owns another.
#[derive(Clone, Debug, Default)]
pub struct RecordingHaptics {
    played: Rc<RefCell<Vec<Vec<u32>>>>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<Vec<u32>> {
        self.played.borrow().clone()
    }

    pub fn clear(&self) {
        self.played.borrow_mut().clear();
    }
}

impl HapticPort for RecordingHaptics {
    fn vibrate(&self, pattern: &[u32]) -> Result<(), HapticError> {
        self.played.borrow_mut().push(pattern.to_vec());
        Ok(())
    }
}

/// Port for a host without haptic hardware that reports the failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableHaptics;

impl HapticPort for UnavailableHaptics {
    fn vibrate(&self, _pattern: &[u32]) -> Result<(), HapticError> {
        Err(HapticError::Unavailable)
    }
}
