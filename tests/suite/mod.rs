mod form;
mod render;
mod showcase;

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent};
use vitrine_engine::App;

pub fn press(app: &mut App, code: KeyCode) {
    vitrine_tui::apply_event(app, Event::Key(KeyEvent::from(code)));
}

/// Run the frame clock until any pending project transition lands.
pub fn settle(app: &mut App) {
    for _ in 0..60 {
        app.advance(Duration::from_millis(50));
        if !app.navigator().is_transitioning() {
            break;
        }
    }
}
