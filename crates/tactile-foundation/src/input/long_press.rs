//! Long-press timer tokens.
//!
//! The handler never owns a platform timer. Arming a long press hands the host
//! a [`LongPressTimer`] to schedule on whatever scheduler it runs; when the
//! timer fires the host passes the token back. Every cancellation bumps the
//! generation, so a token that is already queued when its session ends is
//! recognised as stale and ignored.

/// A long press the host should deliver back at `deadline_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LongPressTimer {
    generation: u64,
    pub deadline_ms: i64,
}

impl LongPressTimer {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_due(&self, now_ms: i64) -> bool {
        now_ms >= self.deadline_ms
    }
}

/// Holds at most one armed timer and the generation used to validate tokens.
#[derive(Debug, Default)]
pub(crate) struct LongPressSlot {
    generation: u64,
    pending: Option<LongPressTimer>,
}

impl LongPressSlot {
    /// Arms a new timer, invalidating any previous token.
    pub(crate) fn arm(&mut self, deadline_ms: i64) -> LongPressTimer {
        self.generation = self.generation.wrapping_add(1);
        let timer = LongPressTimer {
            generation: self.generation,
            deadline_ms,
        };
        self.pending = Some(timer);
        timer
    }

    /// Invalidates every outstanding token. Safe to call repeatedly.
    pub(crate) fn cancel(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.pending.take().is_some()
    }

    pub(crate) fn pending(&self) -> Option<LongPressTimer> {
        self.pending
    }

    /// Consumes the pending timer if `timer` is it.
    pub(crate) fn take_if_current(&mut self, timer: LongPressTimer) -> bool {
        match self.pending {
            Some(pending)
                if pending.generation == timer.generation
                    && timer.generation == self.generation =>
            {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
