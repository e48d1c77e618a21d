//! Easing and pose helpers that turn engine progress values into styles.

use ratatui::style::{Color, Modifier, Style};

use crate::theme::Palette;

#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Linear blend between two colors. Non-RGB colors (high-contrast theme)
/// snap to whichever endpoint the progress is closer to.
#[must_use]
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let lerp = |a: u8, b: u8| -> u8 {
                (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
            };
            Color::Rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

/// Foreground for an element mid-reveal: invisible against the background
/// at 0, the target color at 1.
#[must_use]
pub fn reveal_fg(palette: &Palette, target: Color, progress: f32) -> Color {
    blend(palette.bg, target, ease_out_cubic(progress))
}

/// Style for a revealing element; fully hidden elements still occupy their
/// rows so the page never reflows mid-animation.
#[must_use]
pub fn reveal_style(palette: &Palette, target: Color, progress: f32) -> Style {
    Style::default().fg(reveal_fg(palette, target, progress))
}

/// Whole-page pose during a project transition. Below the floor the page
/// is blanked entirely; in between it renders dimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePose {
    Hidden,
    Dimmed,
    Settled,
}

#[must_use]
pub fn page_pose(visibility: f32) -> PagePose {
    if visibility < 0.3 {
        PagePose::Hidden
    } else if visibility < 1.0 {
        PagePose::Dimmed
    } else {
        PagePose::Settled
    }
}

#[must_use]
pub fn pose_style(pose: PagePose) -> Style {
    match pose {
        PagePose::Dimmed => Style::default().add_modifier(Modifier::DIM),
        PagePose::Hidden | PagePose::Settled => Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_endpoints() {
        assert!(ease_out_cubic(0.0) < f32::EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f32::EPSILON);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn blend_interpolates_rgb() {
        let mid = blend(Color::Rgb(0, 0, 0), Color::Rgb(100, 200, 50), 0.5);
        assert_eq!(mid, Color::Rgb(50, 100, 25));
    }

    #[test]
    fn blend_snaps_indexed_colors() {
        assert_eq!(blend(Color::Black, Color::White, 0.2), Color::Black);
        assert_eq!(blend(Color::Black, Color::White, 0.8), Color::White);
    }

    #[test]
    fn page_pose_bands() {
        assert_eq!(page_pose(0.0), PagePose::Hidden);
        assert_eq!(page_pose(0.5), PagePose::Dimmed);
        assert_eq!(page_pose(1.0), PagePose::Settled);
    }

    #[test]
    fn hidden_element_matches_the_background() {
        let palette = Palette::standard();
        assert_eq!(
            reveal_fg(&palette, palette.text_primary, 0.0),
            palette.bg
        );
        assert_eq!(
            reveal_fg(&palette, palette.text_primary, 1.0),
            palette.text_primary
        );
    }
}
