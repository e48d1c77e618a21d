//! The project page: headline, carousel, info section, story section.
//!
//! The page is built as one virtual column of rows and drawn through the
//! engine's scroll offset. Building and measuring happen together so the
//! extents reported back to the engine always describe exactly what was
//! drawn, wrapping included.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use vitrine_engine::{App, PageLayout, ProjectPage, RowSpan};

use crate::effects::{self, PagePose};
use crate::theme::{Glyphs, Palette};

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let inner = Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width.saturating_sub(4),
        height: area.height,
    };
    if inner.width < 10 || inner.height == 0 {
        return;
    }

    let (lines, layout) = build_page(app.active_page(), inner.width as usize, palette, glyphs);
    app.record_layout(inner.height, layout);

    let pose = effects::page_pose(app.navigator().page_visibility());
    if pose == PagePose::Hidden {
        return;
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .style(effects::pose_style(pose))
        .scroll((app.scroll().offset(), 0));
    frame.render_widget(paragraph, inner);
}

/// Assemble the full page and measure its sections as it grows.
fn build_page(
    page: &ProjectPage,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> (Vec<Line<'static>>, PageLayout) {
    let project = page.project();
    let mut lines: Vec<Line<'static>> = Vec::new();

    // Headline block: typed title over a static byline.
    let headline_top = lines.len();
    let typed = page.headline();
    let mut headline_spans = vec![Span::styled(
        typed.visible().to_string(),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    )];
    if typed.show_cursor() {
        headline_spans.push(Span::styled(
            glyphs.cursor.to_string(),
            Style::default().fg(palette.accent),
        ));
    }
    lines.push(Line::from(headline_spans));
    lines.push(Line::from(Span::styled(
        format!("{} | {}", project.location, project.year),
        Style::default().fg(palette.text_muted),
    )));
    let headline = span_from(headline_top, lines.len());
    lines.push(Line::from(""));

    if page.carousel().is_some() {
        push_carousel(&mut lines, page, carousel_width(project), width, palette, glyphs);
        lines.push(Line::from(""));
    }

    // Info section.
    let info_top = lines.len();
    push_section_header(
        &mut lines,
        "PROJECT DETAILS",
        page.info().section_progress(),
        width,
        palette,
        glyphs,
    );
    let label_width = project
        .details
        .iter()
        .map(|detail| detail.label.width())
        .max()
        .unwrap_or(0);
    for (index, detail) in project.details.iter().enumerate() {
        let progress = page.info().child_progress(index);
        let label_style = effects::reveal_style(palette, palette.accent, progress);
        let text_style = effects::reveal_style(palette, palette.text_secondary, progress);
        let stat_style = effects::reveal_style(palette, palette.gold, progress);

        let mut spans = vec![
            Span::styled(format!("{:<label_width$}  ", detail.label), label_style),
        ];
        if let Some(stat) = detail.stat {
            let shown = page
                .counter(index)
                .map_or(stat.value, |counter| {
                    if counter.is_triggered() {
                        counter.current()
                    } else {
                        stat.value
                    }
                });
            spans.push(Span::styled(format!("{shown} {}  ", stat.unit), stat_style));
        }
        spans.push(Span::styled(detail.text.to_string(), text_style));
        lines.push(Line::from(spans));
    }
    let info = span_from(info_top, lines.len());
    lines.push(Line::from(""));

    // Story section.
    let story_top = lines.len();
    push_section_header(
        &mut lines,
        "FIELD NOTES",
        page.story().section_progress(),
        width,
        palette,
        glyphs,
    );
    for (index, paragraph) in project.story.iter().enumerate() {
        let progress = page.story().child_progress(index);
        let style = effects::reveal_style(palette, palette.text_secondary, progress);
        for wrapped in wrap_text(paragraph, width) {
            lines.push(Line::from(Span::styled(wrapped, style)));
        }
        if index + 1 < project.story.len() {
            lines.push(Line::from(""));
        }
    }
    let story = span_from(story_top, lines.len());

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press c to get in touch about a project like this one.",
        Style::default().fg(palette.text_faint),
    )));

    let layout = PageLayout {
        content_rows: lines.len() as u16,
        headline,
        info,
        story,
    };
    (lines, layout)
}

fn span_from(top: usize, end: usize) -> RowSpan {
    RowSpan {
        top: top as u16,
        height: end.saturating_sub(top) as u16,
    }
}

fn carousel_width(project: &vitrine_engine::Project) -> usize {
    project
        .slides
        .iter()
        .flat_map(|slide| slide.art.iter())
        .map(|line| line.width())
        .max()
        .unwrap_or(0)
}

fn push_carousel(
    lines: &mut Vec<Line<'static>>,
    page: &ProjectPage,
    art_width: usize,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let Some(carousel) = page.carousel() else {
        return;
    };
    let project = page.project();
    let slide = &project.slides[carousel.active_slide()];

    let frame_width = art_width + 4;
    let top = format!("+{}+", glyphs.rule.repeat(frame_width.saturating_sub(2)));
    lines.push(centered(top, width, Style::default().fg(palette.border)));
    for art_line in slide.art {
        let padded = format!("| {art_line:<art_width$} |");
        lines.push(centered(
            padded,
            width,
            Style::default().fg(palette.text_primary),
        ));
    }
    let bottom = format!("+{}+", glyphs.rule.repeat(frame_width.saturating_sub(2)));
    lines.push(centered(bottom, width, Style::default().fg(palette.border)));

    lines.push(centered(
        slide.caption.to_string(),
        width,
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::ITALIC),
    ));

    // Indicator row: one dot per slide, arrows as the prev/next affordance.
    let mut dots = String::new();
    dots.push_str(glyphs.arrow_left);
    dots.push(' ');
    for index in 0..carousel.slide_count() {
        if carousel.is_indicator_active(index) {
            dots.push_str(glyphs.indicator_active);
        } else {
            dots.push_str(glyphs.indicator_idle);
        }
        dots.push(' ');
    }
    dots.push_str(glyphs.arrow_right);
    lines.push(centered(dots, width, Style::default().fg(palette.accent)));
}

fn push_section_header(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    progress: f32,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let style = effects::reveal_style(palette, palette.accent, progress)
        .add_modifier(Modifier::BOLD);
    lines.push(Line::from(Span::styled(title.to_string(), style)));
    let rule_width = width.min(title.width().max(12));
    lines.push(Line::from(Span::styled(
        glyphs.rule.repeat(rule_width),
        effects::reveal_style(palette, palette.border, progress),
    )));
}

fn centered(text: String, width: usize, style: Style) -> Line<'static> {
    let text_width = text.width();
    let pad = width.saturating_sub(text_width) / 2;
    Line::from(Span::styled(format!("{}{text}", " ".repeat(pad)), style))
}

/// Greedy word wrap on display width.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width == 0 {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            wrapped.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        wrapped.push(current);
    }
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }
    wrapped
}
