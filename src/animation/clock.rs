//! Time sources that drive animation playback.

use std::time::Instant;

/// Anything that reports milliseconds elapsed since it was last queried.
pub trait Clock {
    fn get_time(&mut self) -> u32;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn get_time(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_millis();
        self.last = now;
        u32::try_from(elapsed).unwrap_or(u32::MAX)
    }
}

/// Deterministic clock that advances by the same step on every query.
///
/// Used for headless runs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStepClock {
    pub step_ms: u32,
}

impl FixedStepClock {
    pub fn new(step_ms: u32) -> Self {
        Self { step_ms }
    }
}

impl Clock for FixedStepClock {
    fn get_time(&mut self) -> u32 {
        self.step_ms
    }
}
