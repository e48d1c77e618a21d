//! Color theme and glyphs for the Vitrine TUI.
//!
//! A print-magazine palette: warm paper tones on deep ink, with a
//! terracotta accent. High-contrast override maps everything onto the
//! terminal's base colors.

use ratatui::style::Color;

use vitrine_engine::UiOptions;

mod colors {
    use super::Color;

    // === Ink (backgrounds) ===
    pub const INK: Color = Color::Rgb(24, 22, 20);
    pub const INK_PANEL: Color = Color::Rgb(34, 31, 28);
    pub const INK_HIGHLIGHT: Color = Color::Rgb(48, 43, 38);
    pub const INK_POPUP: Color = Color::Rgb(40, 36, 32);
    pub const INK_BORDER: Color = Color::Rgb(92, 82, 72);

    // === Paper (foregrounds) ===
    pub const PAPER: Color = Color::Rgb(238, 230, 211);
    pub const PAPER_SOFT: Color = Color::Rgb(203, 193, 170);
    pub const PAPER_MUTED: Color = Color::Rgb(138, 128, 112);
    pub const PAPER_FAINT: Color = Color::Rgb(84, 77, 68);

    // === Accents ===
    pub const TERRACOTTA: Color = Color::Rgb(204, 98, 62);
    pub const TERRACOTTA_DIM: Color = Color::Rgb(148, 84, 62);
    pub const GOLD: Color = Color::Rgb(196, 160, 90);
    pub const MOSS: Color = Color::Rgb(138, 154, 91);
    pub const BRICK: Color = Color::Rgb(186, 74, 70);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_popup: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_faint: Color,
    pub accent: Color,
    pub accent_dim: Color,
    pub gold: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg: colors::INK,
            bg_panel: colors::INK_PANEL,
            bg_highlight: colors::INK_HIGHLIGHT,
            bg_popup: colors::INK_POPUP,
            border: colors::INK_BORDER,
            text_primary: colors::PAPER,
            text_secondary: colors::PAPER_SOFT,
            text_muted: colors::PAPER_MUTED,
            text_faint: colors::PAPER_FAINT,
            accent: colors::TERRACOTTA,
            accent_dim: colors::TERRACOTTA_DIM,
            gold: colors::GOLD,
            success: colors::MOSS,
            error: colors::BRICK,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_popup: Color::Black,
            border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            text_faint: Color::DarkGray,
            accent: Color::Yellow,
            accent_dim: Color::Yellow,
            gold: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for chrome and indicators.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub indicator_active: &'static str,
    pub indicator_idle: &'static str,
    pub arrow_left: &'static str,
    pub arrow_right: &'static str,
    pub cursor: &'static str,
    pub pointer: &'static str,
    pub bullet: &'static str,
    pub rule: &'static str,
    pub progress_filled: &'static str,
    pub progress_empty: &'static str,
    pub required: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            indicator_active: "*",
            indicator_idle: "o",
            arrow_left: "<",
            arrow_right: ">",
            cursor: "_",
            pointer: ">",
            bullet: "-",
            rule: "-",
            progress_filled: "=",
            progress_empty: "-",
            required: "*",
        }
    } else {
        Glyphs {
            indicator_active: "●",
            indicator_idle: "○",
            arrow_left: "‹",
            arrow_right: "›",
            cursor: "▌",
            pointer: "▸",
            bullet: "•",
            rule: "─",
            progress_filled: "━",
            progress_empty: "╌",
            required: "*",
        }
    }
}
