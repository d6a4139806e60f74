//! The typing-effect state machine.
//!
//! Four states, looping forever:
//!
//! ```text
//! Typing --(full phrase rendered)--> PausedAtEnd
//! PausedAtEnd --(pause elapsed)----> Deleting
//! Deleting --(prefix emptied)------> PausedAtStart
//! PausedAtStart --(next phrase)----> Typing
//! ```
//!
//! Each `step` performs exactly one transition and returns the delay until
//! the next step. The machine never schedules itself; the caller (an
//! [`AnimatorDriver`](super::AnimatorDriver) or a test) owns time.

use std::time::Duration;

use super::jitter::JitterSource;
use super::surface::DisplaySurface;

/// Delay before the very first step after construction.
pub const STARTUP_DELAY: Duration = Duration::from_millis(600);
/// Base delay between forward typing steps.
pub const TYPE_DELAY: Duration = Duration::from_millis(40);
/// Upper bound (exclusive) of the jitter added to each forward step.
pub const JITTER_MAX: Duration = Duration::from_millis(40);
/// Hold time after a phrase has been fully typed.
pub const END_PAUSE: Duration = Duration::from_millis(1400);
/// Delay between deletion steps (half the typing speed).
pub const DELETE_DELAY: Duration = Duration::from_millis(20);
/// Delay between emptying the surface and typing the next phrase.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(220);

/// The four animation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing the current phrase one character per step
    Typing,
    /// Holding the fully typed phrase before deletion starts
    PausedAtEnd,
    /// Removing one character per step
    Deleting,
    /// Empty surface, about to advance to the next phrase
    PausedAtStart,
}

/// Character progression direction, derived from the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Typing-effect animator over a fixed, non-empty phrase list.
///
/// State is `(phrase_idx, char_idx, phase)`. `char_idx` counts characters
/// of the current phrase and stays within `[0, len]` after every step.
/// The phrase list wraps circularly; there is no terminal state.
#[derive(Debug, Clone)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    phrase_idx: usize,
    char_idx: usize,
    phase: Phase,
}

impl TypingAnimator {
    /// Create an animator over `phrases`.
    ///
    /// Returns `None` when the list is empty: the animation is simply
    /// disabled, nothing else happens. This is the only error condition.
    pub fn new(phrases: Vec<String>) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase_idx: 0,
            char_idx: 0,
            phase: Phase::Typing,
        })
    }

    /// The phrase currently being typed or deleted.
    pub fn phrase(&self) -> &str {
        &self.phrases[self.phrase_idx]
    }

    /// Index of the current phrase.
    pub fn phrase_idx(&self) -> usize {
        self.phrase_idx
    }

    /// Number of characters currently revealed.
    pub fn char_idx(&self) -> usize {
        self.char_idx
    }

    /// Current animation phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Character progression direction for the current phase.
    pub fn direction(&self) -> Direction {
        match self.phase {
            Phase::Typing | Phase::PausedAtEnd => Direction::Forward,
            Phase::Deleting | Phase::PausedAtStart => Direction::Backward,
        }
    }

    /// Perform one state transition.
    ///
    /// Renders to `surface` only in the `Typing` and `Deleting` phases;
    /// pause steps touch nothing. Returns the delay the caller should wait
    /// before invoking `step` again. Jitter is resampled on every forward
    /// step and applies only there.
    pub fn step(&mut self, surface: &mut dyn DisplaySurface, jitter: &mut dyn JitterSource) -> Duration {
        match self.phase {
            Phase::Typing => {
                surface.render_prefix(&self.prefix());
                if self.char_idx == self.phrase_chars() {
                    self.phase = Phase::PausedAtEnd;
                } else {
                    self.char_idx += 1;
                }
                TYPE_DELAY + jitter.sample(JITTER_MAX)
            }
            Phase::PausedAtEnd => {
                self.phase = Phase::Deleting;
                END_PAUSE
            }
            Phase::Deleting => {
                // char_idx can be 0 here only for an empty phrase
                if self.char_idx > 0 {
                    self.char_idx -= 1;
                    surface.render_prefix(&self.prefix());
                }
                if self.char_idx == 0 {
                    self.phase = Phase::PausedAtStart;
                }
                DELETE_DELAY
            }
            Phase::PausedAtStart => {
                self.phrase_idx = (self.phrase_idx + 1) % self.phrases.len();
                self.phase = Phase::Typing;
                ADVANCE_DELAY
            }
        }
    }

    /// Character count of the current phrase.
    fn phrase_chars(&self) -> usize {
        self.phrase().chars().count()
    }

    /// The first `char_idx` characters of the current phrase.
    fn prefix(&self) -> String {
        self.phrase().chars().take(self.char_idx).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::{FixedJitter, RecordingSurface};

    fn animator(phrases: &[&str]) -> TypingAnimator {
        TypingAnimator::new(phrases.iter().map(|s| s.to_string()).collect())
            .expect("non-empty phrase list")
    }

    #[test]
    fn empty_phrase_list_disables_animator() {
        assert!(TypingAnimator::new(Vec::new()).is_none());
    }

    #[test]
    fn initial_state() {
        let a = animator(&["Hi"]);
        assert_eq!(a.phrase_idx(), 0);
        assert_eq!(a.char_idx(), 0);
        assert_eq!(a.phase(), Phase::Typing);
        assert_eq!(a.direction(), Direction::Forward);
    }

    #[test]
    fn forward_renders_grow_by_one_character() {
        let mut a = animator(&["Hi"]);
        let mut surface = RecordingSurface::new();
        let mut jitter = FixedJitter::zero();

        a.step(&mut surface, &mut jitter);
        a.step(&mut surface, &mut jitter);
        a.step(&mut surface, &mut jitter);

        assert_eq!(surface.renders(), &["", "H", "Hi"]);
        assert_eq!(a.phase(), Phase::PausedAtEnd);
    }

    #[test]
    fn char_idx_stays_in_bounds_for_many_steps() {
        let mut a = animator(&["abc", "de", ""]);
        let mut surface = RecordingSurface::new();
        let mut jitter = FixedJitter::zero();

        for _ in 0..500 {
            a.step(&mut surface, &mut jitter);
            let len = a.phrase().chars().count();
            assert!(a.char_idx() <= len, "char_idx {} > len {}", a.char_idx(), len);
        }
    }

    #[test]
    fn pause_step_renders_nothing_and_waits() {
        let mut a = animator(&["A"]);
        let mut surface = RecordingSurface::new();
        let mut jitter = FixedJitter::zero();

        a.step(&mut surface, &mut jitter); // ""
        a.step(&mut surface, &mut jitter); // "A", enters PausedAtEnd
        let before = surface.renders().len();
        let delay = a.step(&mut surface, &mut jitter);

        assert_eq!(surface.renders().len(), before);
        assert_eq!(delay, END_PAUSE);
        assert_eq!(a.phase(), Phase::Deleting);
    }

    #[test]
    fn deletion_shrinks_by_one_until_empty() {
        let mut a = animator(&["Hi"]);
        let mut surface = RecordingSurface::new();
        let mut jitter = FixedJitter::zero();

        for _ in 0..4 {
            a.step(&mut surface, &mut jitter); // "", "H", "Hi", pause
        }
        surface.clear();
        a.step(&mut surface, &mut jitter);
        a.step(&mut surface, &mut jitter);

        assert_eq!(surface.renders(), &["H", ""]);
        assert_eq!(a.phase(), Phase::PausedAtStart);
    }

    #[test]
    fn advance_wraps_phrase_index() {
        let mut a = animator(&["Hi", "Yo"]);
        let mut surface = RecordingSurface::new();
        let mut jitter = FixedJitter::zero();

        // One full cycle per phrase: 3 typing + pause + 2 deleting + advance
        for _ in 0..7 {
            a.step(&mut surface, &mut jitter);
        }
        assert_eq!(a.phrase_idx(), 1);

        for _ in 0..7 {
            a.step(&mut surface, &mut jitter);
        }
        assert_eq!(a.phrase_idx(), 0, "last phrase wraps back to the first");
    }

    #[test]
    fn hi_yo_trace_matches_expected_renders() {
        let mut a = animator(&["Hi", "Yo"]);
        let mut surface = RecordingSurface::new();
        let mut jitter = FixedJitter::zero();

        for _ in 0..10 {
            a.step(&mut surface, &mut jitter);
        }

        assert_eq!(
            surface.renders(),
            &["", "H", "Hi", "H", "", "", "Y", "Yo"]
        );
    }

    #[test]
    fn forward_delay_includes_jitter_deletion_does_not() {
        let mut a = animator(&["Hi"]);
        let mut surface = RecordingSurface::new();
        let mut jitter = FixedJitter::new(Duration::from_millis(7));

        let typing = a.step(&mut surface, &mut jitter);
        assert_eq!(typing, TYPE_DELAY + Duration::from_millis(7));

        a.step(&mut surface, &mut jitter); // "H"
        a.step(&mut surface, &mut jitter); // "Hi", enters pause
        a.step(&mut surface, &mut jitter); // pause
        let deleting = a.step(&mut surface, &mut jitter);
        assert_eq!(deleting, DELETE_DELAY);
    }

    #[test]
    fn empty_phrase_cycles_without_underflow() {
        let mut a = animator(&["", "ok"]);
        let mut surface = RecordingSurface::new();
        let mut jitter = FixedJitter::zero();

        a.step(&mut surface, &mut jitter); // renders "", enters PausedAtEnd
        assert_eq!(a.phase(), Phase::PausedAtEnd);
        a.step(&mut surface, &mut jitter); // pause -> Deleting
        a.step(&mut surface, &mut jitter); // nothing to delete -> PausedAtStart
        assert_eq!(a.phase(), Phase::PausedAtStart);
        a.step(&mut surface, &mut jitter);
        assert_eq!(a.phrase_idx(), 1);
    }

    #[test]
    fn multibyte_phrases_step_per_character() {
        let mut a = animator(&["héllo"]);
        let mut surface = RecordingSurface::new();
        let mut jitter = FixedJitter::zero();

        for _ in 0..6 {
            a.step(&mut surface, &mut jitter);
        }
        assert_eq!(surface.renders().last().map(String::as_str), Some("héllo"));
        assert_eq!(a.phase(), Phase::PausedAtEnd);
    }
}
