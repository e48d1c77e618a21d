//! Count-up animation for numeric highlights.
//!
//! When a stat row reveals with enough of the info section on screen, its
//! number runs from zero to the real value and then holds. One-shot per
//! arming cycle, like every other reveal.

use std::time::Duration;

use crate::animation::normalized_progress;

#[derive(Debug, Clone)]
pub struct StatCounter {
    target: u32,
    clock: Duration,
    duration: Duration,
    triggered: bool,
}

impl StatCounter {
    #[must_use]
    pub fn new(target: u32, duration: Duration) -> Self {
        Self {
            target,
            clock: Duration::ZERO,
            duration,
            triggered: false,
        }
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn trigger(&mut self) {
        if !self.triggered {
            self.triggered = true;
            self.clock = Duration::ZERO;
        }
    }

    pub fn rearm(&mut self) {
        self.triggered = false;
        self.clock = Duration::ZERO;
    }

    pub fn complete(&mut self) {
        self.triggered = true;
        self.clock = self.duration;
    }

    pub fn tick(&mut self, delta: Duration) {
        if self.triggered {
            self.clock = self.clock.saturating_add(delta);
        }
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.triggered && self.clock >= self.duration
    }

    /// The value currently shown. Zero until triggered, the exact target
    /// once the run finishes.
    #[must_use]
    pub fn current(&self) -> u32 {
        if !self.triggered {
            return 0;
        }
        let progress = normalized_progress(self.clock, self.duration);
        if (progress - 1.0).abs() < f32::EPSILON {
            return self.target;
        }
        (self.target as f32 * progress) as u32
    }
}
