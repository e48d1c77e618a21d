//! Typewriter effect for headlines.
//!
//! Characters appear one grapheme at a time with a small random jitter per
//! character, after an initial lead-in. A block cursor trails the text and
//! lingers briefly once typing finishes. Like the section reveals, a
//! headline types at most once per arming cycle.

use std::time::Duration;

use rand::RngExt;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: &'static str,
    /// Grapheme count of `text`, cached.
    total: usize,
    shown: usize,
    triggered: bool,
    /// Time until the next character (or, before the first one, the lead-in).
    pending: Duration,
    /// Time since the last grapheme appeared, once complete.
    since_done: Duration,
    char_delay: Duration,
    jitter: Duration,
    lead: Duration,
    cursor_linger: Duration,
}

impl Typewriter {
    #[must_use]
    pub fn new(
        text: &'static str,
        char_delay: Duration,
        jitter: Duration,
        lead: Duration,
        cursor_linger: Duration,
    ) -> Self {
        Self {
            text,
            total: text.graphemes(true).count(),
            shown: 0,
            triggered: false,
            pending: lead,
            since_done: Duration::ZERO,
            char_delay,
            jitter,
            lead,
            cursor_linger,
        }
    }

    #[must_use]
    pub fn full_text(&self) -> &'static str {
        self.text
    }

    /// Start typing after the lead-in. One-shot per arming cycle.
    pub fn trigger(&mut self) {
        if !self.triggered {
            self.triggered = true;
            self.pending = self.lead;
        }
    }

    pub fn rearm(&mut self) {
        self.triggered = false;
        self.shown = 0;
        self.pending = self.lead;
        self.since_done = Duration::ZERO;
    }

    /// Show everything at once (reduced motion).
    pub fn complete(&mut self) {
        self.triggered = true;
        self.shown = self.total;
        self.since_done = self.cursor_linger;
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.triggered && self.shown == self.total
    }

    pub fn tick(&mut self, delta: Duration) {
        if !self.triggered {
            return;
        }
        if self.shown == self.total {
            self.since_done = self.since_done.saturating_add(delta);
            return;
        }

        let mut budget = delta;
        while self.shown < self.total {
            if let Some(rest) = budget.checked_sub(self.pending) {
                budget = rest;
                self.shown += 1;
                self.pending = self.next_char_delay();
            } else {
                self.pending -= budget;
                return;
            }
        }
    }

    fn next_char_delay(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.char_delay;
        }
        self.char_delay + Duration::from_millis(rand::rng().random_range(0..=jitter_ms))
    }

    /// The currently visible prefix, cut on a grapheme boundary.
    #[must_use]
    pub fn visible(&self) -> &'static str {
        if self.shown >= self.total {
            return self.text;
        }
        let end = self
            .text
            .grapheme_indices(true)
            .nth(self.shown)
            .map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }

    /// Whether the trailing block cursor is drawn: while typing, and for a
    /// short linger after the last character.
    #[must_use]
    pub fn show_cursor(&self) -> bool {
        if !self.triggered {
            return false;
        }
        self.shown < self.total || self.since_done < self.cursor_linger
    }
}
