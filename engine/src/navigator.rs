//! Project navigator: which project owns the page, and the transition
//! between them.
//!
//! Switching is an explicit three-state machine. The exit phase runs for a
//! fixed delay before the incoming project is activated; a second request
//! that arrives mid-flight supersedes the pending one instead of racing it,
//! so the page can never end up with zero or two active projects.

use std::time::Duration;

use crate::animation::EffectTimer;

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    /// Exit transition for the current project; `target` activates when the
    /// timer lands.
    LeavingCurrent { target: usize, timer: EffectTimer },
    /// Fade-in of the freshly activated project.
    EnteringNext { timer: EffectTimer },
}

#[derive(Debug, Clone)]
pub struct Navigator {
    active: usize,
    count: usize,
    phase: Phase,
    transition_delay: Duration,
    enter_duration: Duration,
    menu_open: bool,
    menu_cursor: usize,
}

impl Navigator {
    #[must_use]
    pub fn new(count: usize, transition_delay: Duration, enter_duration: Duration) -> Self {
        Self {
            active: 0,
            count,
            phase: Phase::Idle,
            transition_delay,
            enter_duration,
            menu_open: false,
            menu_cursor: 0,
        }
    }

    /// The project currently marked active. Exactly one at all times.
    #[must_use]
    pub fn active_project(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn is_project_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Where the navigator is headed: the in-flight target if a switch is
    /// pending, otherwise the active project. Arrow stepping is based on
    /// this so rapid presses walk the list instead of fighting the timer.
    #[must_use]
    pub fn destination(&self) -> usize {
        match &self.phase {
            Phase::LeavingCurrent { target, .. } => *target,
            Phase::Idle | Phase::EnteringNext { .. } => self.active,
        }
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Request a switch. Selecting the project that is already active (and
    /// not being left) is a no-op; a request during a transition retargets
    /// it. Returns whether a transition was started or retargeted.
    pub fn show_project(&mut self, index: usize) -> bool {
        debug_assert!(index < self.count);
        match &self.phase {
            Phase::Idle | Phase::EnteringNext { .. } if index == self.active => false,
            Phase::LeavingCurrent { target, .. } if index == *target => false,
            Phase::LeavingCurrent { .. } => {
                // Supersede: restart the exit clock toward the new target.
                self.phase = Phase::LeavingCurrent {
                    target: index,
                    timer: EffectTimer::new(self.transition_delay),
                };
                true
            }
            Phase::Idle | Phase::EnteringNext { .. } => {
                self.phase = Phase::LeavingCurrent {
                    target: index,
                    timer: EffectTimer::new(self.transition_delay),
                };
                true
            }
        }
    }

    pub fn next(&mut self) -> bool {
        let index = (self.destination() + 1) % self.count;
        self.show_project(index)
    }

    pub fn prev(&mut self) -> bool {
        let index = (self.destination() + self.count - 1) % self.count;
        self.show_project(index)
    }

    /// Advance the transition clocks. Returns `Some(index)` at the instant a
    /// new project becomes active so the caller can re-arm its content.
    pub fn tick(&mut self, delta: Duration) -> Option<usize> {
        match &mut self.phase {
            Phase::Idle => None,
            Phase::LeavingCurrent { target, timer } => {
                timer.advance(delta);
                if !timer.is_finished() {
                    return None;
                }
                self.active = *target;
                self.phase = Phase::EnteringNext {
                    timer: EffectTimer::new(self.enter_duration),
                };
                Some(self.active)
            }
            Phase::EnteringNext { timer } => {
                timer.advance(delta);
                if timer.is_finished() {
                    self.phase = Phase::Idle;
                }
                None
            }
        }
    }

    /// Collapse any pending transition immediately (reduced motion).
    pub fn complete_pending(&mut self) -> Option<usize> {
        let activated = match &self.phase {
            Phase::LeavingCurrent { target, .. } => {
                self.active = *target;
                Some(self.active)
            }
            Phase::Idle | Phase::EnteringNext { .. } => None,
        };
        self.phase = Phase::Idle;
        activated
    }

    /// Page opacity analog: 1.0 at rest, falling through the exit phase and
    /// rising again through the enter phase.
    #[must_use]
    pub fn page_visibility(&self) -> f32 {
        match &self.phase {
            Phase::Idle => 1.0,
            Phase::LeavingCurrent { timer, .. } => 1.0 - timer.progress(),
            Phase::EnteringNext { timer } => timer.progress(),
        }
    }

    // --- menu ---

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
        self.menu_cursor = self.destination();
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    pub fn menu_up(&mut self) {
        self.menu_cursor = (self.menu_cursor + self.count - 1) % self.count;
    }

    pub fn menu_down(&mut self) {
        self.menu_cursor = (self.menu_cursor + 1) % self.count;
    }

    /// Selecting an entry switches (or retargets) and closes the menu.
    pub fn menu_confirm(&mut self) -> bool {
        let started = self.show_project(self.menu_cursor);
        self.close_menu();
        started
    }

    /// Direct selection by position (number keys).
    pub fn menu_select(&mut self, index: usize) -> bool {
        self.close_menu();
        if index >= self.count {
            return false;
        }
        self.show_project(index)
    }
}
