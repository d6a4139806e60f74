//! Typing-effect animator
//!
//! Cycles through a fixed list of phrases, typing and deleting them
//! character by character into a display surface, forever.
//!
//! # Architecture
//!
//! The animator is organized into submodules:
//! - `typing`: the `TypingAnimator` state machine and its timing constants
//! - `surface`: the `DisplaySurface` output seam and the `TextSurface` impl
//! - `jitter`: the `JitterSource` seam for per-keystroke timing variation
//! - `driver`: `AnimatorDriver`, which owns the due time and fires steps
//!   when polled from an event loop
//!
//! The state machine itself never touches a clock. Each `step` returns the
//! delay until the next step, so tests can drive it synchronously while the
//! TUI drives it from its tick loop.

mod driver;
mod jitter;
mod surface;
mod typing;

pub use driver::AnimatorDriver;
pub use jitter::{FixedJitter, JitterSource, RandomJitter};
pub use surface::{DisplaySurface, RecordingSurface, TextSurface};
pub use typing::{
    Direction, Phase, TypingAnimator, ADVANCE_DELAY, DELETE_DELAY, END_PAUSE, JITTER_MAX,
    STARTUP_DELAY, TYPE_DELAY,
};
