//! Contact form with locally simulated submission.
//!
//! No network: a valid submit shows a sending state for a fixed delay,
//! then a confirmation, then the form clears itself. Name, email and
//! message are required; project type is optional.

use std::time::Duration;

use crate::animation::EffectTimer;

pub const MISSING_FIELDS_NOTICE: &str = "Please fill in all required fields.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    ProjectType,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::ProjectType,
        ContactField::Message,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::ProjectType => "Project type",
            ContactField::Message => "Message",
        }
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, ContactField::ProjectType)
    }

    fn position(self) -> usize {
        match self {
            ContactField::Name => 0,
            ContactField::Email => 1,
            ContactField::ProjectType => 2,
            ContactField::Message => 3,
        }
    }
}

#[derive(Debug, Clone)]
enum Submission {
    Idle,
    Sending(EffectTimer),
    Sent(EffectTimer),
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: [String; 4],
    focus: ContactField,
    submission: Submission,
    notice: Option<&'static str>,
    send_delay: Duration,
    reset_delay: Duration,
}

impl ContactForm {
    #[must_use]
    pub fn new(send_delay: Duration, reset_delay: Duration) -> Self {
        Self {
            fields: Default::default(),
            focus: ContactField::Name,
            submission: Submission::Idle,
            notice: None,
            send_delay,
            reset_delay,
        }
    }

    #[must_use]
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        &self.fields[field.position()]
    }

    /// Blocking validation notice, if any. Cleared on the next edit.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Inputs are frozen while a submission is playing out.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !matches!(self.submission, Submission::Idle)
    }

    /// Submit button caption for the current state.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.submission {
            Submission::Idle => "Send Message",
            Submission::Sending(_) => "Sending...",
            Submission::Sent(_) => "Message Sent!",
        }
    }

    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self.submission, Submission::Sent(_))
    }

    pub fn focus_next(&mut self) {
        if self.is_busy() {
            return;
        }
        let next = (self.focus.position() + 1) % ContactField::ALL.len();
        self.focus = ContactField::ALL[next];
    }

    pub fn focus_prev(&mut self) {
        if self.is_busy() {
            return;
        }
        let len = ContactField::ALL.len();
        let prev = (self.focus.position() + len - 1) % len;
        self.focus = ContactField::ALL[prev];
    }

    pub fn push_char(&mut self, c: char) {
        if self.is_busy() {
            return;
        }
        self.notice = None;
        self.fields[self.focus.position()].push(c);
    }

    pub fn backspace(&mut self) {
        if self.is_busy() {
            return;
        }
        self.notice = None;
        self.fields[self.focus.position()].pop();
    }

    /// Validate and start the simulated send. Returns whether the
    /// submission was accepted.
    pub fn submit(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        let missing = ContactField::ALL
            .iter()
            .any(|field| field.is_required() && self.value(*field).trim().is_empty());
        if missing {
            self.notice = Some(MISSING_FIELDS_NOTICE);
            return false;
        }
        self.notice = None;
        self.submission = Submission::Sending(EffectTimer::new(self.send_delay));
        true
    }

    pub fn tick(&mut self, delta: Duration) {
        match &mut self.submission {
            Submission::Idle => {}
            Submission::Sending(timer) => {
                timer.advance(delta);
                if timer.is_finished() {
                    self.submission = Submission::Sent(EffectTimer::new(self.reset_delay));
                }
            }
            Submission::Sent(timer) => {
                timer.advance(delta);
                if timer.is_finished() {
                    self.reset();
                }
            }
        }
    }

    fn reset(&mut self) {
        self.fields = Default::default();
        self.focus = ContactField::Name;
        self.submission = Submission::Idle;
        self.notice = None;
    }
}
