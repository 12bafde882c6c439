//! Robot-style driver for touch sessions.
//!
//! A [`TouchRobot`] owns a [`TouchHandler`], a [`ManualClock`] and a naive
//! timer queue that plays the part of the host scheduler. The queue never
//! removes timers on cancellation, the way a platform timer that was already
//! dispatched keeps running, so tests also exercise the handler's stale-token
//! guard.
//!
//! # Example
//!
//! ```
//! use tactile_foundation::GestureEvent;
//! use tactile_testing::TouchRobot;
//!
//! let mut robot = TouchRobot::new();
//! robot.press(10.0, 10.0);
//! robot.advance(600);
//! robot.release();
//!
//! assert!(matches!(robot.events(), [GestureEvent::LongPress { .. }]));
//! ```

use crate::clock::ManualClock;
use tactile_foundation::{
    Clock, GestureConfig, GestureEvent, HandlerState, LongPressTimer, TouchHandler, TouchPoint,
};
use tactile_geometry::Point;

pub struct TouchRobot {
    handler: TouchHandler,
    clock: ManualClock,
    /// Timers handed out by the handler, in arming order.
    scheduled: Vec<LongPressTimer>,
    contacts: Vec<Point>,
    events: Vec<GestureEvent>,
}

impl Default for TouchRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchRobot {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            handler: TouchHandler::new(config),
            clock: ManualClock::new(),
            scheduled: Vec::new(),
            contacts: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    pub fn handler(&self) -> &TouchHandler {
        &self.handler
    }

    pub fn state(&self) -> HandlerState {
        self.handler.state()
    }

    /// Everything recognized so far, in order.
    pub fn events(&self) -> &[GestureEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<GestureEvent> {
        std::mem::take(&mut self.events)
    }

    /// Timers still sitting in the fake scheduler, including stale ones.
    pub fn scheduled_timers(&self) -> &[LongPressTimer] {
        &self.scheduled
    }

    /// Puts one finger down.
    pub fn press(&mut self, x: f32, y: f32) {
        self.start(vec![Point::new(x, y)]);
    }

    /// Puts two fingers down at once.
    pub fn press_two(&mut self, a: (f32, f32), b: (f32, f32)) {
        self.start(vec![Point::new(a.0, a.1), Point::new(b.0, b.1)]);
    }

    /// Moves the single active contact.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.move_contacts(vec![Point::new(x, y)]);
    }

    /// Reports two active contacts at the given positions.
    pub fn move_two(&mut self, a: (f32, f32), b: (f32, f32)) {
        self.move_contacts(vec![Point::new(a.0, a.1), Point::new(b.0, b.1)]);
    }

    /// Lifts every contact at its last position.
    pub fn release(&mut self) {
        let ended = self.stamp(&self.contacts);
        self.contacts.clear();
        let event = self.handler.on_end(&ended);
        self.record(event);
    }

    pub fn cleanup(&mut self) {
        self.contacts.clear();
        self.handler.cleanup();
    }

    /// Moves time forward, delivering every scheduled timer that comes due.
    pub fn advance(&mut self, millis: i64) {
        let now = self.clock.advance(millis);
        let (due, pending): (Vec<_>, Vec<_>) = self
            .scheduled
            .iter()
            .copied()
            .partition(|timer| timer.is_due(now));
        self.scheduled = pending;
        for timer in due {
            log::trace!("robot delivering long-press timer at {now}ms");
            let event = self.handler.on_long_press_timer(timer, now);
            self.record(event);
        }
    }

    /// Press and release in place after `hold_ms`.
    pub fn tap(&mut self, x: f32, y: f32, hold_ms: i64) {
        self.press(x, y);
        self.advance(hold_ms);
        self.release();
    }

    /// Straight-line stroke split into `steps` evenly timed move samples.
    pub fn swipe(&mut self, from: (f32, f32), to: (f32, f32), duration_ms: i64, steps: u32) {
        let steps = steps.max(1);
        let origin = self.now();
        self.press(from.0, from.1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let target = origin + duration_ms * i64::from(step) / i64::from(steps);
            self.advance(target - self.now());
            self.move_to(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
        }
        self.release();
    }

    fn start(&mut self, contacts: Vec<Point>) {
        let points = self.stamp(&contacts);
        self.contacts = contacts;
        if let Some(timer) = self.handler.on_start(&points) {
            self.scheduled.push(timer);
        }
    }

    fn move_contacts(&mut self, contacts: Vec<Point>) {
        let points = self.stamp(&contacts);
        self.contacts = contacts;
        let event = self.handler.on_move(&points);
        self.record(event);
    }

    fn stamp(&self, contacts: &[Point]) -> Vec<TouchPoint> {
        let now = self.now();
        contacts
            .iter()
            .map(|&position| TouchPoint::at(position, now))
            .collect()
    }

    fn record(&mut self, event: Option<GestureEvent>) {
        if let Some(event) = event {
            self.events.push(event);
        }
    }
}
