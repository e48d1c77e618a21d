//! Navigator and carousel behavior through the public API.

use std::time::Duration;

use crossterm::event::KeyCode;
use vitrine_engine::{App, PROJECT_COUNT, PageLayout, RowSpan, project_names};

use super::{press, settle};

fn layout_with_everything_visible() -> PageLayout {
    PageLayout {
        content_rows: 40,
        headline: RowSpan { top: 0, height: 2 },
        info: RowSpan { top: 10, height: 8 },
        story: RowSpan { top: 20, height: 10 },
    }
}

#[test]
fn every_slide_jump_marks_exactly_one_indicator() {
    let mut app = App::new(None);
    let slide_count = app.active_page().carousel().unwrap().slide_count();
    for i in 0..slide_count {
        app.carousel_select(i);
        let carousel = app.active_page().carousel().unwrap();
        assert_eq!(carousel.active_slide(), i);
        let active: Vec<usize> =
            (0..slide_count).filter(|&j| carousel.is_indicator_active(j)).collect();
        assert_eq!(active, vec![i]);
    }
}

#[test]
fn advancing_through_all_slides_returns_to_the_start() {
    let mut app = App::new(None);
    let slide_count = app.active_page().carousel().unwrap().slide_count();
    for _ in 0..slide_count {
        press(&mut app, KeyCode::Char('.'));
    }
    assert_eq!(app.active_page().carousel().unwrap().active_slide(), 0);
}

#[test]
fn reselecting_the_active_project_schedules_nothing() {
    let mut app = App::new(None);
    app.show_project(0);
    assert!(!app.navigator().is_transitioning());
}

#[test]
fn keyboard_arrows_wrap_across_all_projects() {
    for start in 0..PROJECT_COUNT {
        let mut app = App::new(None);
        app.show_project(start);
        settle(&mut app);

        press(&mut app, KeyCode::Right);
        settle(&mut app);
        assert_eq!(app.navigator().active_project(), (start + 1) % PROJECT_COUNT);

        press(&mut app, KeyCode::Left);
        settle(&mut app);
        assert_eq!(app.navigator().active_project(), start);
    }
}

#[test]
fn activation_shows_the_right_name_with_a_single_active_marker() {
    let names = project_names();
    for k in 1..PROJECT_COUNT {
        let mut app = App::new(None);
        app.show_project(k);
        settle(&mut app);
        assert_eq!(app.current_project_name(), names[k]);

        let active: Vec<usize> = (0..PROJECT_COUNT)
            .filter(|&i| app.navigator().is_project_active(i))
            .collect();
        assert_eq!(active, vec![k]);
    }
}

#[test]
fn menu_closes_on_outside_input_and_on_escape() {
    let mut app = App::new(None);

    press(&mut app, KeyCode::Tab);
    assert!(app.navigator().is_menu_open());
    // a key the menu does not own lands "outside" and closes it
    press(&mut app, KeyCode::Char('g'));
    assert!(!app.navigator().is_menu_open());

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Esc);
    assert!(!app.navigator().is_menu_open());
}

#[test]
fn three_rights_then_a_visibility_enter_reveals_the_info_section() {
    let mut app = App::new(None);
    for _ in 0..3 {
        press(&mut app, KeyCode::Right);
        settle(&mut app);
    }
    assert_eq!(app.navigator().active_project(), 3);

    app.record_layout(40, layout_with_everything_visible());

    // run out the configured stagger window for the info details
    let details = app.page(3).project().details.len() as u32;
    let window = Duration::from_millis(600) + Duration::from_millis(200) * details;
    let mut elapsed = Duration::ZERO;
    while elapsed <= window {
        app.advance(Duration::from_millis(50));
        elapsed += Duration::from_millis(50);
    }

    let info = app.page(3).info();
    assert!(info.is_triggered());
    assert!(info.is_settled());
}

#[test]
fn rapid_reselection_supersedes_the_pending_switch() {
    let mut app = App::new(None);
    press(&mut app, KeyCode::Right);
    app.advance(Duration::from_millis(150));
    press(&mut app, KeyCode::Right);
    settle(&mut app);
    // the first pending activation never landed on its own
    assert_eq!(app.navigator().active_project(), 2);
}

#[test]
fn carousel_only_runs_for_the_project_on_screen() {
    let mut app = App::new(None);
    app.show_project(2);
    settle(&mut app);

    // five seconds on project 2: its carousel advances, others hold
    for _ in 0..100 {
        app.advance(Duration::from_millis(50));
    }
    assert_eq!(app.page(2).carousel().unwrap().active_slide(), 1);
    assert_eq!(app.page(0).carousel().unwrap().active_slide(), 0);
}
