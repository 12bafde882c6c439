use crate::platform::Clock;
use tactile_geometry::Point;

/// One touch sample: where a contact is and when it was observed.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TouchPoint {
    pub position: Point,
    /// Milliseconds since an arbitrary monotonic epoch.
    pub time_ms: i64,
}

impl TouchPoint {
    pub const fn new(x: f32, y: f32, time_ms: i64) -> Self {
        Self {
            position: Point::new(x, y),
            time_ms,
        }
    }

    pub const fn at(position: Point, time_ms: i64) -> Self {
        Self { position, time_ms }
    }

    /// Stamps a position with the clock's current time.
    pub fn now(x: f32, y: f32, clock: &impl Clock) -> Self {
        Self::new(x, y, clock.now_millis())
    }

    /// Same position, observed at a different time.
    pub fn with_time(self, time_ms: i64) -> Self {
        Self {
            position: self.position,
            time_ms,
        }
    }

    pub fn distance_to(&self, other: &TouchPoint) -> f32 {
        self.position.distance_to(other.position)
    }

    /// Milliseconds from `self` to `later`. Negative if `later` is older.
    pub fn duration_to(&self, later: &TouchPoint) -> i64 {
        later.time_ms.saturating_sub(self.time_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeGesture {
    pub direction: SwipeDirection,
    /// Average speed in pixels per millisecond.
    pub velocity: f32,
    pub distance: f32,
    pub duration_ms: i64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchGesture {
    /// Current finger distance over the distance at pinch start.
    pub scale: f32,
    /// Rate of scale change, in scale units per second.
    pub velocity: f32,
    pub center: Point,
}

/// A classified gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    Tap { point: Point },
    LongPress { point: Point, duration_ms: i64 },
    Swipe(SwipeGesture),
    Pinch(PinchGesture),
}

impl GestureEvent {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureEvent::Tap { .. } => GestureKind::Tap,
            GestureEvent::LongPress { .. } => GestureKind::LongPress,
            GestureEvent::Swipe(_) => GestureKind::Swipe,
            GestureEvent::Pinch(_) => GestureKind::Pinch,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Tap,
    LongPress,
    Swipe,
    Pinch,
}
