//! Tick-advanced animation clocks.
//!
//! All motion in the engine is expressed through these timers rather than
//! scheduled callbacks: the frame loop feeds every clock the same delta, so
//! a pending delay can be superseded or completed early without juggling
//! cancellation handles.

use std::time::Duration;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// One-shot timer for a fixed-duration effect.
#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Jump straight to the finished state (reduced motion).
    pub fn complete(&mut self) {
        self.elapsed = self.duration;
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Repeating timer: reports how many whole intervals elapsed this tick.
///
/// The accumulator only moves when `tick` is called, so pausing a component
/// is simply not ticking it.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    accumulated: Duration,
    interval: Duration,
}

impl IntervalTimer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            accumulated: Duration::ZERO,
            interval,
        }
    }

    /// Advance the accumulator and return the number of intervals that fired.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.accumulated = self.accumulated.saturating_add(delta);
        let mut fired = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            fired += 1;
        }
        fired
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
