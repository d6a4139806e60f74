//! Drives the typing state machine from an event loop.
//!
//! The machine itself only reports delays; the driver owns the due
//! `Instant` and fires steps whenever `poll` observes that the due time has
//! passed. Polling with an explicit `now` keeps the driver testable without
//! sleeping.

use std::time::{Duration, Instant};

use super::jitter::JitterSource;
use super::surface::DisplaySurface;
use super::typing::{TypingAnimator, STARTUP_DELAY};

/// Schedules [`TypingAnimator`] steps against wall-clock instants.
pub struct AnimatorDriver {
    animator: TypingAnimator,
    jitter: Box<dyn JitterSource + Send>,
    due: Instant,
}

impl AnimatorDriver {
    /// Start driving `animator`, firing the first step one startup delay
    /// after `now`.
    pub fn start(animator: TypingAnimator, jitter: Box<dyn JitterSource + Send>, now: Instant) -> Self {
        Self {
            animator,
            jitter,
            due: now + STARTUP_DELAY,
        }
    }

    /// Run every step whose due time has passed as of `now`.
    ///
    /// Returns true when at least one step fired, i.e. the surface may have
    /// changed and a redraw is warranted.
    pub fn poll(&mut self, now: Instant, surface: &mut dyn DisplaySurface) -> bool {
        let mut stepped = false;
        while now >= self.due {
            let delay = self.animator.step(surface, self.jitter.as_mut());
            self.due += delay;
            stepped = true;
        }
        stepped
    }

    /// How long until the next step is due. Zero when overdue.
    ///
    /// Event loops use this to bound their poll timeout so typing stays
    /// smooth without busy-waiting.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }

    /// The underlying state machine.
    pub fn animator(&self) -> &TypingAnimator {
        &self.animator
    }
}
