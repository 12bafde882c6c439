//! Callback-style delivery on top of [`TouchHandler`].
//!
//! UI surfaces such as swipeable sections or sticky-note editors register up
//! to four callbacks and forward raw samples here. Each recognized gesture is
//! dispatched as soon as the handler reports it, with an optional haptic
//! pulse per gesture.

use super::handler::TouchHandler;
use super::long_press::LongPressTimer;
use super::types::{GestureEvent, PinchGesture, SwipeGesture, TouchPoint};
use crate::config::GestureConfig;
use crate::haptics::{HapticFeedback, HapticIntensity, HapticPort, NoopHaptics};
use tactile_geometry::Point;

type PointCallback = Box<dyn FnMut(Point)>;

/// Optional gesture callback slots.
#[derive(Default)]
pub struct GestureCallbacks {
    on_tap: Option<PointCallback>,
    on_long_press: Option<PointCallback>,
    on_swipe: Option<Box<dyn FnMut(SwipeGesture)>>,
    on_pinch: Option<Box<dyn FnMut(PinchGesture)>>,
}

impl GestureCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_tap(mut self, callback: impl FnMut(Point) + 'static) -> Self {
        self.on_tap = Some(Box::new(callback));
        self
    }

    pub fn on_long_press(mut self, callback: impl FnMut(Point) + 'static) -> Self {
        self.on_long_press = Some(Box::new(callback));
        self
    }

    pub fn on_swipe(mut self, callback: impl FnMut(SwipeGesture) + 'static) -> Self {
        self.on_swipe = Some(Box::new(callback));
        self
    }

    pub fn on_pinch(mut self, callback: impl FnMut(PinchGesture) + 'static) -> Self {
        self.on_pinch = Some(Box::new(callback));
        self
    }

    /// Invokes the slot for `event`. Returns false when the slot is empty.
    pub fn dispatch(&mut self, event: &GestureEvent) -> bool {
        match *event {
            GestureEvent::Tap { point } => invoke(&mut self.on_tap, point),
            GestureEvent::LongPress { point, .. } => invoke(&mut self.on_long_press, point),
            GestureEvent::Swipe(swipe) => invoke(&mut self.on_swipe, swipe),
            GestureEvent::Pinch(pinch) => invoke(&mut self.on_pinch, pinch),
        }
    }
}

fn invoke<T>(slot: &mut Option<Box<dyn FnMut(T)>>, value: T) -> bool {
    match slot {
        Some(callback) => {
            callback(value);
            true
        }
        None => false,
    }
}

/// Pulse played for a recognized gesture, if any.
pub fn feedback_for(event: &GestureEvent) -> Option<HapticIntensity> {
    match event {
        GestureEvent::Tap { .. } | GestureEvent::Swipe(_) => Some(HapticIntensity::Light),
        GestureEvent::LongPress { .. } => Some(HapticIntensity::Medium),
        GestureEvent::Pinch(_) => None,
    }
}

/// Drives a [`TouchHandler`] and routes its results to callbacks.
///
/// Each gesture reaches its callback before the call that produced it
/// returns; nothing is held between calls.
pub struct GestureDispatcher<P: HapticPort = NoopHaptics> {
    handler: TouchHandler,
    callbacks: GestureCallbacks,
    haptics: Option<HapticFeedback<P>>,
}

impl GestureDispatcher<NoopHaptics> {
    pub fn new(config: GestureConfig, callbacks: GestureCallbacks) -> Self {
        Self {
            handler: TouchHandler::new(config),
            callbacks,
            haptics: None,
        }
    }
}

impl<P: HapticPort> GestureDispatcher<P> {
    /// Plays a pulse for each dispatched tap, swipe and long press.
    pub fn with_haptics<Q: HapticPort>(self, feedback: HapticFeedback<Q>) -> GestureDispatcher<Q> {
        GestureDispatcher {
            handler: self.handler,
            callbacks: self.callbacks,
            haptics: Some(feedback),
        }
    }

    pub fn handler(&self) -> &TouchHandler {
        &self.handler
    }

    pub fn haptics(&self) -> Option<&HapticFeedback<P>> {
        self.haptics.as_ref()
    }

    pub fn on_start(&mut self, points: &[TouchPoint]) -> Option<LongPressTimer> {
        self.handler.on_start(points)
    }

    pub fn on_move(&mut self, points: &[TouchPoint]) {
        let event = self.handler.on_move(points);
        self.dispatch(event);
    }

    pub fn on_end(&mut self, points: &[TouchPoint]) {
        let event = self.handler.on_end(points);
        self.dispatch(event);
    }

    pub fn on_long_press_timer(&mut self, timer: LongPressTimer, now_ms: i64) {
        let event = self.handler.on_long_press_timer(timer, now_ms);
        self.dispatch(event);
    }

    pub fn poll(&mut self, now_ms: i64) {
        let event = self.handler.poll(now_ms);
        self.dispatch(event);
    }

    pub fn cleanup(&mut self) {
        self.handler.cleanup();
    }

    fn dispatch(&mut self, event: Option<GestureEvent>) {
        let Some(event) = event else {
            return;
        };
        if !self.callbacks.dispatch(&event) {
            log::trace!("no callback for {:?}", event.kind());
            return;
        }
        if let (Some(haptics), Some(intensity)) = (&self.haptics, feedback_for(&event)) {
            haptics.impact(intensity);
        }
    }
}
