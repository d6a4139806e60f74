//! Timing jitter seam.
//!
//! Forward typing steps add a small random delay so the animation reads as
//! human typing rather than a metronome. The source is injected so tests
//! stay deterministic.

use std::time::Duration;

/// Supplies the per-keystroke timing variation.
pub trait JitterSource {
    /// Sample a delay in `[0, max)`.
    fn sample(&mut self, max: Duration) -> Duration;
}

/// `rand`-backed jitter, uniform over `[0, max)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn sample(&mut self, max: Duration) -> Duration {
        max.mul_f64(rand::random::<f64>())
    }
}

/// Constant jitter for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(Duration);

impl FixedJitter {
    pub fn new(value: Duration) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(Duration::ZERO)
    }
}

impl JitterSource for FixedJitter {
    fn sample(&mut self, _max: Duration) -> Duration {
        self.0
    }
}
