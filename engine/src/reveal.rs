//! One-shot staggered reveals for page sections.
//!
//! Whether a section has revealed is an explicit flag, not an artifact of
//! how it was last drawn. A section triggers at most once per arming cycle;
//! switching projects re-arms everything on the incoming page. Once the
//! trigger fires the stagger clock runs to completion regardless of where
//! the user scrolls next.

use std::time::Duration;

use crate::animation::normalized_progress;

#[derive(Debug, Clone)]
pub struct SectionReveal {
    triggered: bool,
    clock: Duration,
    child_count: usize,
    child_step: Duration,
    fade: Duration,
}

impl SectionReveal {
    #[must_use]
    pub fn new(child_count: usize, child_step: Duration, fade: Duration) -> Self {
        Self {
            triggered: false,
            clock: Duration::ZERO,
            child_count,
            child_step,
            fade,
        }
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.child_count
    }

    /// Fire the reveal. Repeat calls within one arming cycle do nothing.
    pub fn trigger(&mut self) {
        if !self.triggered {
            self.triggered = true;
            self.clock = Duration::ZERO;
        }
    }

    /// Back to the hidden/offset pose; the next trigger replays the
    /// whole sequence.
    pub fn rearm(&mut self) {
        self.triggered = false;
        self.clock = Duration::ZERO;
    }

    pub fn tick(&mut self, delta: Duration) {
        if self.triggered {
            self.clock = self.clock.saturating_add(delta);
        }
    }

    /// Jump the whole sequence to its settled pose (reduced motion).
    pub fn complete(&mut self) {
        self.triggered = true;
        self.clock = self.fade + self.child_step * self.child_count as u32;
    }

    /// Pose of the section container itself: 0.0 hidden, 1.0 settled.
    #[must_use]
    pub fn section_progress(&self) -> f32 {
        if !self.triggered {
            return 0.0;
        }
        normalized_progress(self.clock, self.fade)
    }

    /// Pose of child `index`, which starts `index * child_step` after the
    /// trigger, in document order.
    #[must_use]
    pub fn child_progress(&self, index: usize) -> f32 {
        if !self.triggered {
            return 0.0;
        }
        let start = self.child_step * index as u32;
        let Some(elapsed) = self.clock.checked_sub(start) else {
            return 0.0;
        };
        normalized_progress(elapsed, self.fade)
    }

    #[must_use]
    pub fn is_child_revealed(&self, index: usize) -> bool {
        self.child_progress(index) > 0.0
    }

    /// All children fully settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        if !self.triggered {
            return false;
        }
        let last = self.child_count.saturating_sub(1);
        (self.child_progress(last) - 1.0).abs() < f32::EPSILON
    }
}
