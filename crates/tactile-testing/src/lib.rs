//! Testing utilities and touch robot for Tactile

pub mod clock;
pub mod haptics;
pub mod robot;

pub use clock::ManualClock;
pub use haptics::{RecordingHaptics, UnavailableHaptics};
pub use robot::TouchRobot;

pub mod prelude {
    pub use crate::clock::ManualClock;
    pub use crate::haptics::{RecordingHaptics, UnavailableHaptics};
    pub use crate::robot::TouchRobot;
}
