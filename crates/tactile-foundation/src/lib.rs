//! Touch gesture recognition for the mobile canvas.
//!
//! Raw touch samples go into a [`TouchHandler`]; tap, long-press, swipe and
//! pinch gestures come out. The pure classification rules live in
//! [`input::recognizer`] and can be used on their own.
//!
//! ```
//! use tactile_foundation::{GestureEvent, TouchHandler, TouchPoint};
//!
//! let mut handler = TouchHandler::default();
//! handler.on_start(&[TouchPoint::new(0.0, 0.0, 0)]);
//! let event = handler.on_end(&[TouchPoint::new(2.0, 1.0, 120)]);
//! assert!(matches!(event, Some(GestureEvent::Tap { .. })));
//! ```

pub mod config;
pub mod gesture_constants;
pub mod haptics;
pub mod input;
pub mod platform;
pub mod velocity_tracker;

pub use config::{ConfigError, GestureConfig};
pub use haptics::{HapticError, HapticFeedback, HapticIntensity, HapticPort, NoopHaptics};
pub use input::{
    feedback_for, GestureCallbacks, GestureDispatcher, GestureEvent, GestureKind, HandlerState,
    LongPressTimer, PinchGesture, SwipeDirection, SwipeGesture, TouchHandler, TouchPoint,
};
pub use platform::{Clock, SystemClock};
pub use tactile_geometry::{Offset, Point};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use crate::config::GestureConfig;
    pub use crate::haptics::{HapticFeedback, HapticPort, NoopHaptics};
    pub use crate::input::prelude::*;
    pub use crate::input::{GestureCallbacks, GestureDispatcher, LongPressTimer};
    pub use tactile_geometry::Point;
}
