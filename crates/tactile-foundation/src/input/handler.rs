//! Touch session state machine.
//!
//! A [`TouchHandler`] follows one interaction from first contact to release:
//!
//! ```text
//! Idle ──start(1)──▶ Tracking(timer armed) ──move past tolerance──▶ Tracking(timer cancelled)
//!   │                      │                                               │
//!   │                      └──timer fires──▶ long-pressed ─────────────────┤
//!   └──start(2)──▶ Pinching (Pinch on every move) ─────────────────────────┤
//!                                                                          ▼
//!                                                   end / cleanup ──▶ Idle
//! ```
//!
//! Results are returned from each call instead of being pushed through
//! callbacks; wrap the handler in a [`GestureDispatcher`](super::GestureDispatcher)
//! for callback-style delivery.

use super::long_press::{LongPressSlot, LongPressTimer};
use super::recognizer::{
    classify_long_press, classify_swipe, classify_tap, compute_pinch_center, compute_pinch_scale,
};
use super::types::{GestureEvent, PinchGesture, TouchPoint};
use crate::config::GestureConfig;
use crate::gesture_constants::MAX_PINCH_VELOCITY;
use crate::velocity_tracker::VelocityTracker1D;
use smallvec::SmallVec;

type Contacts = SmallVec<[TouchPoint; 2]>;

/// Observable phase of a [`TouchHandler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandlerState {
    Idle,
    Tracking {
        contacts: usize,
        long_press_armed: bool,
    },
    Pinching,
}

#[derive(Debug)]
struct Session {
    start_points: Contacts,
    current_points: Contacts,
    /// Most contacts seen at once. Anything above one makes the session
    /// pinch-only.
    max_contacts: usize,
    long_pressed: bool,
}

impl Session {
    fn new(points: &[TouchPoint]) -> Self {
        Self {
            start_points: Contacts::from_slice(points),
            current_points: Contacts::from_slice(points),
            max_contacts: points.len(),
            long_pressed: false,
        }
    }

    /// Tap first, then swipe, else nothing.
    fn resolve_release(
        &self,
        ended: &[TouchPoint],
        config: &GestureConfig,
    ) -> Option<GestureEvent> {
        if self.max_contacts != 1 || self.long_pressed {
            return None;
        }
        let [start] = self.start_points.as_slice() else {
            return None;
        };
        let end = ended.first().or(self.current_points.first())?;

        if classify_tap(start, end, config) {
            return Some(GestureEvent::Tap {
                point: end.position,
            });
        }
        classify_swipe(start, end, config).map(GestureEvent::Swipe)
    }
}

/// Stateful recognizer for one touch surface.
///
/// Calling [`on_start`](Self::on_start) while a session is live is a caller
/// error; the handler logs it and ends the old session first, so its timer
/// token goes stale.
#[derive(Debug, Default)]
pub struct TouchHandler {
    config: GestureConfig,
    session: Option<Session>,
    long_press: LongPressSlot,
    pinch_velocity: VelocityTracker1D,
}

impl TouchHandler {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
            long_press: LongPressSlot::default(),
            pinch_velocity: VelocityTracker1D::new(),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> HandlerState {
        match &self.session {
            None => HandlerState::Idle,
            Some(session) if session.max_contacts > 1 || session.current_points.len() >= 2 => {
                HandlerState::Pinching
            }
            Some(session) => HandlerState::Tracking {
                contacts: session.current_points.len(),
                long_press_armed: self.long_press.pending().is_some(),
            },
        }
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    /// The armed long-press timer, if any.
    pub fn pending_long_press(&self) -> Option<LongPressTimer> {
        self.long_press.pending()
    }

    /// Begins a session. Returns the long-press timer the host must schedule
    /// when exactly one contact is down.
    pub fn on_start(&mut self, points: &[TouchPoint]) -> Option<LongPressTimer> {
        if self.session.is_some() {
            log::warn!("touch start while a session is live; ending the previous session");
            self.cleanup();
        }
        if points.is_empty() {
            log::trace!("touch start without contacts ignored");
            return None;
        }

        self.pinch_velocity.reset();
        self.session = Some(Session::new(points));

        match points {
            [only] => {
                let deadline_ms = only
                    .time_ms
                    .saturating_add(self.config.long_press_min_duration_ms);
                let timer = self.long_press.arm(deadline_ms);
                log::debug!(
                    "touch start at {:?}, long press armed until {deadline_ms}ms",
                    only.position
                );
                Some(timer)
            }
            [first, second] => {
                self.pinch_velocity
                    .add_data_point(first.time_ms.max(second.time_ms), 1.0);
                log::debug!("touch start with two contacts, pinch candidate");
                None
            }
            _ => {
                log::debug!("touch start with {} contacts", points.len());
                None
            }
        }
    }

    /// Delivers a fired long-press timer.
    ///
    /// Stale tokens (cancelled, superseded, or from an ended session) and
    /// early deliveries are ignored. A long press is reported only if exactly
    /// one contact is still down and it has not drifted past the tolerance.
    pub fn on_long_press_timer(
        &mut self,
        timer: LongPressTimer,
        now_ms: i64,
    ) -> Option<GestureEvent> {
        if !timer.is_due(now_ms) {
            log::trace!("long-press timer delivered early at {now_ms}ms");
            return None;
        }
        if !self.long_press.take_if_current(timer) {
            log::trace!("stale long-press timer ignored");
            return None;
        }
        let config = self.config;
        let session = self.session.as_mut()?;

        let ([start], [current]) = (
            session.start_points.as_slice(),
            session.current_points.as_slice(),
        ) else {
            log::debug!("long press dropped: contact count changed");
            return None;
        };
        let held = current.with_time(now_ms.max(current.time_ms));
        if !classify_long_press(start, &held, &config) {
            log::debug!("long press dropped: contact drifted");
            return None;
        }

        let event = GestureEvent::LongPress {
            point: held.position,
            duration_ms: start.duration_to(&held),
        };
        session.long_pressed = true;
        log::debug!("recognized {event:?}");
        Some(event)
    }

    /// Fires the pending long-press timer if its deadline has passed.
    ///
    /// For hosts that drive the handler from a frame or tick loop instead of
    /// a real timer.
    pub fn poll(&mut self, now_ms: i64) -> Option<GestureEvent> {
        let timer = self.long_press.pending()?;
        if !timer.is_due(now_ms) {
            return None;
        }
        self.on_long_press_timer(timer, now_ms)
    }

    /// Updates contact positions. Emits a `Pinch` on every two-contact sample.
    pub fn on_move(&mut self, points: &[TouchPoint]) -> Option<GestureEvent> {
        if points.is_empty() {
            log::trace!("touch move without contacts ignored");
            return None;
        }
        let config = self.config;
        let Some(session) = self.session.as_mut() else {
            log::trace!("touch move outside a session ignored");
            return None;
        };

        session.current_points = Contacts::from_slice(points);
        session.max_contacts = session.max_contacts.max(points.len());

        match points {
            [current] => {
                if let [start] = session.start_points.as_slice() {
                    if start.distance_to(current) >= config.tap_max_distance
                        && self.long_press.cancel()
                    {
                        log::debug!("long press cancelled: moved past tolerance");
                    }
                }
                None
            }
            [first, second] => {
                if config.cancel_long_press_on_multi_touch && self.long_press.cancel() {
                    log::debug!("long press cancelled: second contact");
                }
                if session.start_points.len() != 2 {
                    // Second finger joined mid-session; this pair is the baseline.
                    session.start_points = Contacts::from_slice(points);
                    self.pinch_velocity.reset();
                }

                let scale = compute_pinch_scale(&session.start_points, points);
                let center = compute_pinch_center(points);
                self.pinch_velocity
                    .add_data_point(first.time_ms.max(second.time_ms), scale);
                let velocity = self
                    .pinch_velocity
                    .calculate_velocity_with_max(MAX_PINCH_VELOCITY);

                log::trace!("pinch scale {scale:.3} around {center:?}");
                Some(GestureEvent::Pinch(PinchGesture {
                    scale,
                    velocity,
                    center,
                }))
            }
            _ => None,
        }
    }

    /// Ends the session and classifies the release.
    ///
    /// The session is cleared whether or not anything was recognized.
    pub fn on_end(&mut self, ended_points: &[TouchPoint]) -> Option<GestureEvent> {
        if self.long_press.cancel() {
            log::trace!("pending long press cancelled by release");
        }
        self.pinch_velocity.reset();
        let Some(session) = self.session.take() else {
            log::trace!("touch end outside a session ignored");
            return None;
        };

        let event = session.resolve_release(ended_points, &self.config);
        match &event {
            Some(event) => log::debug!("recognized {event:?}"),
            None => log::debug!("release matched no gesture"),
        }
        event
    }

    /// Cancels any pending timer and drops the session. Idempotent.
    pub fn cleanup(&mut self) {
        self.long_press.cancel();
        self.pinch_velocity.reset();
        if self.session.take().is_some() {
            log::debug!("touch session cleaned up");
        }
    }
}
