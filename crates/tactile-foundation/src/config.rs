//! Injectable gesture thresholds.

use crate::gesture_constants::{
    LONG_PRESS_MIN_DURATION_MS, SWIPE_MIN_DISTANCE, SWIPE_MIN_VELOCITY, TAP_MAX_DISTANCE,
    TAP_MAX_DURATION_MS,
};

/// Thresholds used by the recognizer and the touch handler.
///
/// `Default` yields the values from [`gesture_constants`](crate::gesture_constants).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Minimum travel for a swipe, in pixels.
    pub swipe_min_distance: f32,
    /// Minimum average swipe speed, in pixels per millisecond.
    pub swipe_min_velocity: f32,
    pub long_press_min_duration_ms: i64,
    pub tap_max_duration_ms: i64,
    /// Movement tolerance for tap and long press, in pixels.
    pub tap_max_distance: f32,
    /// Cancel a pending long press as soon as a second contact shows up.
    ///
    /// Off by default: only movement or termination cancels the timer.
    pub cancel_long_press_on_multi_touch: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_min_distance: SWIPE_MIN_DISTANCE,
            swipe_min_velocity: SWIPE_MIN_VELOCITY,
            long_press_min_duration_ms: LONG_PRESS_MIN_DURATION_MS,
            tap_max_duration_ms: TAP_MAX_DURATION_MS,
            tap_max_distance: TAP_MAX_DISTANCE,
            cancel_long_press_on_multi_touch: false,
        }
    }
}

impl GestureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_swipe_min_distance(mut self, distance: f32) -> Self {
        self.swipe_min_distance = distance;
        self
    }

    pub fn with_swipe_min_velocity(mut self, velocity: f32) -> Self {
        self.swipe_min_velocity = velocity;
        self
    }

    pub fn with_long_press_min_duration_ms(mut self, duration_ms: i64) -> Self {
        self.long_press_min_duration_ms = duration_ms;
        self
    }

    pub fn with_tap_max_duration_ms(mut self, duration_ms: i64) -> Self {
        self.tap_max_duration_ms = duration_ms;
        self
    }

    pub fn with_tap_max_distance(mut self, distance: f32) -> Self {
        self.tap_max_distance = distance;
        self
    }

    pub fn with_cancel_long_press_on_multi_touch(mut self, cancel: bool) -> Self {
        self.cancel_long_press_on_multi_touch = cancel;
        self
    }

    /// Checks that every threshold is finite and strictly positive.
    ///
    /// The recognizer never panics on a bad config, but a zero or NaN
    /// threshold silently disables a gesture, so hosts building configs from
    /// user settings should validate them first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("swipe_min_distance", self.swipe_min_distance)?;
        check_threshold("swipe_min_velocity", self.swipe_min_velocity)?;
        check_threshold("tap_max_distance", self.tap_max_distance)?;
        check_duration("long_press_min_duration_ms", self.long_press_min_duration_ms)?;
        check_duration("tap_max_duration_ms", self.tap_max_duration_ms)?;
        Ok(())
    }
}

fn check_threshold(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigError::NotPositive {
            field,
            value: f64::from(value),
        });
    }
    Ok(())
}

fn check_duration(field: &'static str, value: i64) -> Result<(), ConfigError> {
    if value <= 0 {
        return Err(ConfigError::NotPositive {
            field,
            value: value as f64,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NotFinite { field: &'static str },
    NotPositive { field: &'static str, value: f64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFinite { field } => write!(f, "threshold {field} is not finite"),
            ConfigError::NotPositive { field, value } => {
                write!(f, "threshold {field} must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
