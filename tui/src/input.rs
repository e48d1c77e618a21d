//! Input handling for the Vitrine TUI.
//!
//! Crossterm events are read on a blocking thread and forwarded over a
//! bounded channel; the frame loop drains them without blocking. Key
//! dispatch is scoped by the engine's input mode: the menu overlay and the
//! contact form own the keyboard while they are up, so the project-switch
//! arrows never fire from inside another surface.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;

use vitrine_engine::{App, InputMode};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the input thread unblocks if it is
        // backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                tracing::warn!("input poll failed: {e}");
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending events into the app. Returns `true` when the app should
/// quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

pub fn apply_event(app: &mut App, event: Event) -> bool {
    if let Event::Key(key) = event {
        if matches!(key.kind, KeyEventKind::Release) {
            return app.should_quit();
        }

        // Ctrl+C quits from anywhere.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match app.mode() {
            InputMode::Browse => handle_browse(app, key),
            InputMode::Menu => handle_menu(app, key),
            InputMode::Contact => handle_contact(app, key),
        }
    }
    app.should_quit()
}

fn handle_browse(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
        }
        // Project switching (scoped to this surface)
        KeyCode::Left => {
            app.project_prev();
        }
        KeyCode::Right => {
            app.project_next();
        }
        // Page scrolling
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down();
        }
        KeyCode::PageUp => {
            app.scroll_page_up();
        }
        KeyCode::PageDown => {
            app.scroll_page_down();
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.scroll_to_top();
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.scroll_to_bottom();
        }
        // Carousel
        KeyCode::Char(',') | KeyCode::Char('[') => {
            app.carousel_prev();
        }
        KeyCode::Char('.') | KeyCode::Char(']') => {
            app.carousel_next();
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c.to_digit(10).unwrap_or(0);
            if digit > 0 {
                app.carousel_select((digit - 1) as usize);
            }
        }
        // Overlays
        KeyCode::Char('p') | KeyCode::Tab => {
            app.open_menu();
        }
        KeyCode::Char('c') => {
            app.open_contact();
        }
        _ => {}
    }
}

fn handle_menu(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_menu();
        }
        KeyCode::Enter => {
            app.menu_confirm();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.menu_up();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.menu_down();
        }
        // Direct selection with number keys
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c.to_digit(10).unwrap_or(0);
            if digit > 0 {
                app.menu_select((digit - 1) as usize);
            }
        }
        // Anything aimed outside the menu closes it, like a click
        // elsewhere on the page.
        _ => {
            app.close_menu();
        }
    }
}

fn handle_contact(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_contact();
        }
        KeyCode::Enter => {
            app.contact_mut().submit();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.contact_mut().focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.contact_mut().focus_prev();
        }
        KeyCode::Backspace => {
            app.contact_mut().backspace();
        }
        KeyCode::Char(c) if c != '\r' => {
            app.contact_mut().push_char(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use vitrine_engine::ContactField;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn arrows_switch_projects_in_browse() {
        let mut app = App::new(None);
        apply_event(&mut app, press(KeyCode::Right));
        assert_eq!(app.navigator().destination(), 1);
        apply_event(&mut app, press(KeyCode::Left));
        assert_eq!(app.navigator().destination(), 0);
    }

    #[test]
    fn arrows_do_not_switch_projects_from_the_menu() {
        let mut app = App::new(None);
        apply_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.mode(), InputMode::Menu);
        // Left is not a menu key: it closes the menu and nothing else
        apply_event(&mut app, press(KeyCode::Left));
        assert_eq!(app.mode(), InputMode::Browse);
        assert_eq!(app.navigator().destination(), 0);
        assert!(!app.navigator().is_menu_open());
    }

    #[test]
    fn escape_closes_the_menu() {
        let mut app = App::new(None);
        apply_event(&mut app, press(KeyCode::Tab));
        assert!(app.navigator().is_menu_open());
        apply_event(&mut app, press(KeyCode::Esc));
        assert!(!app.navigator().is_menu_open());
        assert_eq!(app.mode(), InputMode::Browse);
    }

    #[test]
    fn menu_digit_selects_directly() {
        let mut app = App::new(None);
        apply_event(&mut app, press(KeyCode::Tab));
        apply_event(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.mode(), InputMode::Browse);
        assert_eq!(app.navigator().destination(), 3);
    }

    #[test]
    fn contact_form_captures_typing() {
        let mut app = App::new(None);
        apply_event(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.mode(), InputMode::Contact);
        apply_event(&mut app, press(KeyCode::Char('A')));
        apply_event(&mut app, press(KeyCode::Char('d')));
        apply_event(&mut app, press(KeyCode::Char('a')));
        assert_eq!(app.contact().value(ContactField::Name), "Ada");
        // 'c' while in the form types, it does not re-open the overlay
        apply_event(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.contact().value(ContactField::Name), "Adac");
    }

    #[test]
    fn empty_submit_raises_the_blocking_notice() {
        let mut app = App::new(None);
        apply_event(&mut app, press(KeyCode::Char('c')));
        apply_event(&mut app, press(KeyCode::Enter));
        assert!(app.contact().notice().is_some());
    }

    #[test]
    fn q_quits_only_from_browse() {
        let mut app = App::new(None);
        apply_event(&mut app, press(KeyCode::Tab));
        apply_event(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.mode(), InputMode::Browse);
        apply_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}
