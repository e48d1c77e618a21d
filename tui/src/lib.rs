//! TUI rendering for Vitrine using ratatui.

mod contact_view;
mod effects;
mod input;
mod menu;
mod showcase;
mod theme;

pub use effects::{PagePose, blend, ease_out_cubic, page_pose, reveal_fg, reveal_style};
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use vitrine_engine::{App, InputMode, MASTHEAD_TAGLINE};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Masthead
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_masthead(frame, app, chunks[0], &palette, &glyphs);
    showcase::draw(frame, app, chunks[1], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[2], &palette);

    match app.mode() {
        InputMode::Browse => {}
        InputMode::Menu => menu::draw(frame, app, &palette, &glyphs),
        InputMode::Contact => contact_view::draw(frame, app, &palette, &glyphs),
    }
}

fn draw_masthead(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    if area.height < 3 {
        return;
    }
    let title_row = Rect { height: 1, ..area };
    let tagline_row = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    let progress_row = Rect {
        y: area.y + 2,
        height: 1,
        ..area
    };

    // Typed title on the left, active project name on the right.
    let masthead = app.masthead();
    let mut title_spans = vec![Span::styled(
        masthead.visible().to_string(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if masthead.show_cursor() {
        title_spans.push(Span::styled(
            glyphs.cursor.to_string(),
            Style::default().fg(palette.accent),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(title_spans)), title_row);

    let name = app.current_project_name();
    let name_width = name.width() as u16;
    if area.width > name_width {
        let name_area = Rect {
            x: area.x + area.width - name_width,
            width: name_width,
            ..title_row
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                name,
                Style::default()
                    .fg(palette.gold)
                    .add_modifier(Modifier::BOLD),
            )),
            name_area,
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            MASTHEAD_TAGLINE,
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )),
        tagline_row,
    );

    // Reading progress across the full width.
    let width = usize::from(area.width);
    let filled = ((app.scroll().progress() * area.width as f32).round() as usize).min(width);
    let bar = Line::from(vec![
        Span::styled(
            glyphs.progress_filled.repeat(filled),
            Style::default().fg(palette.accent),
        ),
        Span::styled(
            glyphs.progress_empty.repeat(width - filled),
            Style::default().fg(palette.text_faint),
        ),
    ]);
    frame.render_widget(Paragraph::new(bar), progress_row);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints = match app.mode() {
        InputMode::Browse => {
            "</> projects  up/down scroll  ,/. slides  Tab menu  c contact  q quit"
        }
        InputMode::Menu => "up/down move  Enter select  Esc close",
        InputMode::Contact => "Tab fields  Enter send  Esc close",
    };
    let mut spans = vec![Span::styled(hints, Style::default().fg(palette.text_faint))];

    if let Some(status) = app.status_message() {
        let used = hints.width();
        let status_width = status.width();
        let total = usize::from(area.width);
        if total > used + status_width + 2 {
            spans.push(Span::raw(
                " ".repeat(total - used - status_width),
            ));
            spans.push(Span::styled(
                status.to_string(),
                Style::default().fg(palette.text_muted),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Centered overlay rectangle, clamped to the frame.
pub(crate) fn overlay_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
