//! Contact form overlay.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use vitrine_engine::{App, ContactField};

use crate::overlay_rect;
use crate::theme::{Glyphs, Palette};

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let area = overlay_rect(frame.area(), 56, 13);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Get in touch ")
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

    let form = app.contact();
    let mut lines: Vec<Line> = Vec::new();

    for field in ContactField::ALL {
        let focused = form.focus() == field && !form.is_busy();
        let label_style = if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_muted)
        };
        let value_style = Style::default().fg(palette.text_primary);

        let required = if field.is_required() {
            glyphs.required
        } else {
            " "
        };
        let mut spans = vec![
            Span::styled(format!("{:<13}{required} ", field.label()), label_style),
            Span::styled(form.value(field).to_string(), value_style),
        ];
        if focused {
            spans.push(Span::styled(
                glyphs.cursor.to_string(),
                Style::default().fg(palette.accent),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(notice) = form.notice() {
        lines.push(Line::from(Span::styled(
            notice,
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        let label_style = if form.is_sent() {
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD)
        } else if form.is_busy() {
            Style::default().fg(palette.text_muted)
        } else {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", form.submit_label()),
            label_style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab next field / Enter send / Esc close",
        Style::default().fg(palette.text_faint),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
