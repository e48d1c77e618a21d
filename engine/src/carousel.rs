//! Cyclic slide carousel for a single project.
//!
//! Exactly one slide is active at a time; every index is normalized by
//! modulo arithmetic so there is no out-of-range path. The auto-advance
//! clock lives here and only moves when the owning project is the one on
//! screen — the caller simply stops ticking a carousel that is not.

use std::time::Duration;

use crate::animation::IntervalTimer;

#[derive(Debug, Clone)]
pub struct Carousel {
    active: usize,
    count: usize,
    auto: IntervalTimer,
}

impl Carousel {
    /// `None` when there are no slides: a project without a carousel simply
    /// doesn't get one.
    #[must_use]
    pub fn new(count: usize, interval: Duration) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self {
            active: 0,
            count,
            auto: IntervalTimer::new(interval),
        })
    }

    #[must_use]
    pub fn active_slide(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.count
    }

    /// Exactly the slide (and indicator) at `index % count` becomes active.
    pub fn show_slide(&mut self, index: usize) {
        self.active = index % self.count;
    }

    pub fn next(&mut self) {
        self.show_slide(self.active + 1);
    }

    pub fn prev(&mut self) {
        self.show_slide(self.active + self.count - 1);
    }

    /// Indicator jump. Resets the auto-advance clock so the chosen slide
    /// gets a full interval on screen.
    pub fn select(&mut self, index: usize) {
        self.show_slide(index);
        self.auto.reset();
    }

    #[must_use]
    pub fn is_indicator_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Advance the auto-advance clock. Only called while the owning
    /// project is active.
    pub fn tick(&mut self, delta: Duration) {
        for _ in 0..self.auto.tick(delta) {
            self.next();
        }
    }
}
