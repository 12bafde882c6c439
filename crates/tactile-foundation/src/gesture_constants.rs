//! Default gesture thresholds for the mobile canvas.
//!
//! These values are in logical pixels and milliseconds. They seed
//! [`GestureConfig::default`](crate::GestureConfig) and can be overridden per
//! handler.
//!
//! # DPI Considerations
//!
//! Distances are not scaled by display density. Hosts running on very
//! high-density touch screens should scale the distance thresholds before
//! building a config.

/// Minimum travel for a release to count as a swipe.
pub const SWIPE_MIN_DISTANCE: f32 = 50.0;

/// Minimum average speed for a swipe, in pixels per millisecond.
///
/// A 100px stroke has to finish within ~333ms to clear this floor.
pub const SWIPE_MIN_VELOCITY: f32 = 0.3;

/// Hold time before a stationary contact becomes a long press.
pub const LONG_PRESS_MIN_DURATION_MS: i64 = 500;

/// Longest contact that still counts as a tap.
pub const TAP_MAX_DURATION_MS: i64 = 200;

/// Movement tolerance shared by tap and long press.
///
/// Once a contact drifts this far from where it went down it is a drag or
/// swipe candidate: the pending long press is cancelled and release will not
/// produce a tap.
pub const TAP_MAX_DISTANCE: f32 = 10.0;

/// Upper bound applied to reported pinch velocity, in scale units per second.
pub const MAX_PINCH_VELOCITY: f32 = 50.0;
