//! Full-frame rendering against a test backend.

use std::time::Duration;

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use vitrine_engine::App;

use super::{press, settle};

fn render(app: &mut App) -> String {
    let backend = TestBackend::new(100, 32);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| vitrine_tui::draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn masthead_title_types_in_over_time() {
    let mut app = App::new(None);
    assert!(!render(&mut app).contains("VITRINE"));

    // lead-in plus seven characters
    app.advance(Duration::from_millis(500));
    app.advance(Duration::from_millis(700));
    assert!(render(&mut app).contains("VITRINE"));
}

#[test]
fn switching_projects_changes_the_masthead_name() {
    let mut app = App::new(None);
    assert!(render(&mut app).contains("Sky Garden Residence"));

    press(&mut app, KeyCode::Right);
    settle(&mut app);
    let text = render(&mut app);
    assert!(text.contains("Riverbend Art Centre"));
}

#[test]
fn carousel_indicator_row_tracks_the_active_slide() {
    let mut app = App::new(None);
    let _ = render(&mut app);
    assert!(render(&mut app).contains("● ○ ○"));

    press(&mut app, KeyCode::Char('.'));
    assert!(render(&mut app).contains("○ ● ○"));

    press(&mut app, KeyCode::Char('3'));
    assert!(render(&mut app).contains("○ ○ ●"));
}

#[test]
fn story_section_renders_after_scrolling_and_revealing() {
    let mut app = App::new(None);
    // first draw reports the layout; then scroll to the bottom
    let _ = render(&mut app);
    app.scroll_to_bottom();
    app.advance(Duration::from_millis(50));
    let _ = render(&mut app);

    assert!(app.active_page().story().is_triggered());
    let text = render(&mut app);
    assert!(text.contains("FIELD NOTES"));
}

#[test]
fn ascii_mode_uses_plain_indicators() {
    let config = vitrine_engine::VitrineConfig {
        app: Some(vitrine_engine::AppConfig {
            ascii_only: true,
            ..Default::default()
        }),
        ..Default::default()
    };
    let mut app = App::new(Some(&config));
    let _ = render(&mut app);
    let text = render(&mut app);
    assert!(text.contains("* o o"));
    assert!(!text.contains('●'));
}
