//! Contact form lifecycle through the real key dispatch.

use std::time::Duration;

use crossterm::event::KeyCode;
use vitrine_engine::{App, ContactField, InputMode, MISSING_FIELDS_NOTICE};

use super::press;

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn submitting_an_empty_form_blocks_with_a_notice() {
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.mode(), InputMode::Contact);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.contact().notice(), Some(MISSING_FIELDS_NOTICE));
    assert!(!app.contact().is_busy());
}

#[test]
fn valid_submission_sends_confirms_and_resets() {
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char('c'));

    type_text(&mut app, "Ada Lovelace");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "ada@example.com");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab); // project type left empty (optional)
    type_text(&mut app, "We have a narrow plot and big ideas.");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.contact().submit_label(), "Sending...");

    app.advance(Duration::from_millis(1500));
    assert_eq!(app.contact().submit_label(), "Message Sent!");

    app.advance(Duration::from_millis(2000));
    assert_eq!(app.contact().submit_label(), "Send Message");
    assert_eq!(app.contact().value(ContactField::Name), "");
    assert_eq!(app.contact().value(ContactField::Message), "");
}

#[test]
fn typing_is_scoped_to_the_form() {
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char('c'));
    // arrow keys must not switch projects while the form is up
    press(&mut app, KeyCode::Right);
    assert_eq!(app.navigator().destination(), 0);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode(), InputMode::Browse);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.navigator().destination(), 1);
}

#[test]
fn backspace_edits_the_focused_field() {
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "Adaa");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.contact().value(ContactField::Name), "Ada");
}
