//! Project menu overlay: the dropdown analog.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use vitrine_engine::{App, project_names};

use crate::overlay_rect;
use crate::theme::{Glyphs, Palette};

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let names = project_names();
    let height = names.len() as u16 + 4;
    let area = overlay_rect(frame.area(), 40, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Projects ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_popup));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let navigator = app.navigator();
    let mut lines: Vec<Line> = Vec::new();
    for (index, name) in names.iter().enumerate() {
        let is_cursor = navigator.menu_cursor() == index;
        let is_active = navigator.is_project_active(index);

        let marker = if is_active {
            glyphs.indicator_active
        } else {
            glyphs.indicator_idle
        };
        let pointer = if is_cursor { glyphs.pointer } else { " " };

        let name_style = if is_cursor {
            Style::default()
                .fg(palette.text_primary)
                .bg(palette.bg_highlight)
                .add_modifier(Modifier::BOLD)
        } else if is_active {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.text_secondary)
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{pointer} {} ", index + 1),
                Style::default().fg(palette.text_muted),
            ),
            Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
            Span::styled((*name).to_string(), name_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter select / Esc close",
        Style::default().fg(palette.text_faint),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
