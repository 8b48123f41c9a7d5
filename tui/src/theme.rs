//! Color palettes and glyphs for the Folio TUI.
//!
//! A light and a dark palette (slate/blue, after the page's Tailwind colors),
//! each with a high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use folio_types::SkillIcon;
use folio_types::ui::UiOptions;

/// Slate and blue palette constants.
mod colors {
    use super::Color;

    // === Light ===
    pub const LIGHT_BG: Color = Color::Rgb(255, 255, 255);
    pub const LIGHT_PANEL: Color = Color::Rgb(241, 245, 249); // slate-100
    pub const LIGHT_BORDER: Color = Color::Rgb(203, 213, 225); // slate-300
    pub const LIGHT_TEXT: Color = Color::Rgb(15, 23, 42); // slate-900
    pub const LIGHT_TEXT_SECONDARY: Color = Color::Rgb(71, 85, 105); // slate-600
    pub const LIGHT_TEXT_MUTED: Color = Color::Rgb(148, 163, 184); // slate-400
    pub const LIGHT_PRIMARY: Color = Color::Rgb(37, 99, 235); // blue-600
    pub const LIGHT_PRIMARY_BG: Color = Color::Rgb(239, 246, 255); // blue-50

    // === Dark ===
    pub const DARK_BG: Color = Color::Rgb(15, 23, 42); // slate-900
    pub const DARK_PANEL: Color = Color::Rgb(30, 41, 59); // slate-800
    pub const DARK_BORDER: Color = Color::Rgb(51, 65, 85); // slate-700
    pub const DARK_TEXT: Color = Color::Rgb(241, 245, 249); // slate-100
    pub const DARK_TEXT_SECONDARY: Color = Color::Rgb(203, 213, 225); // slate-300
    pub const DARK_TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // slate-500
    pub const DARK_PRIMARY: Color = Color::Rgb(96, 165, 250); // blue-400
    pub const DARK_PRIMARY_BG: Color = Color::Rgb(30, 58, 138); // blue-900
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub primary_bg: Color,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: colors::LIGHT_BG,
            bg_panel: colors::LIGHT_PANEL,
            border: colors::LIGHT_BORDER,
            text_primary: colors::LIGHT_TEXT,
            text_secondary: colors::LIGHT_TEXT_SECONDARY,
            text_muted: colors::LIGHT_TEXT_MUTED,
            primary: colors::LIGHT_PRIMARY,
            primary_bg: colors::LIGHT_PRIMARY_BG,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: colors::DARK_BG,
            bg_panel: colors::DARK_PANEL,
            border: colors::DARK_BORDER,
            text_primary: colors::DARK_TEXT,
            text_secondary: colors::DARK_TEXT_SECONDARY,
            text_muted: colors::DARK_TEXT_MUTED,
            primary: colors::DARK_PRIMARY,
            primary_bg: colors::DARK_PRIMARY_BG,
        }
    }

    #[must_use]
    pub fn high_contrast_light() -> Self {
        Self {
            bg: Color::White,
            bg_panel: Color::White,
            border: Color::Black,
            text_primary: Color::Black,
            text_secondary: Color::Black,
            text_muted: Color::DarkGray,
            primary: Color::Blue,
            primary_bg: Color::Gray,
        }
    }

    #[must_use]
    pub fn high_contrast_dark() -> Self {
        Self {
            bg: Color::Black,
            bg_panel: Color::Black,
            border: Color::White,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            primary: Color::Cyan,
            primary_bg: Color::DarkGray,
        }
    }
}

#[must_use]
pub fn palette(dark: bool, options: UiOptions) -> Palette {
    match (dark, options.high_contrast) {
        (false, false) => Palette::light(),
        (true, false) => Palette::dark(),
        (false, true) => Palette::high_contrast_light(),
        (true, true) => Palette::high_contrast_dark(),
    }
}

/// ASCII/Unicode glyphs for icons and decorations.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub menu: &'static str,
    pub close: &'static str,
    pub sun: &'static str,
    pub moon: &'static str,
    pub bullet: &'static str,
    pub selected: &'static str,
    pub separator: &'static str,
    pub rule: &'static str,
    pub bar_full: &'static str,
    pub bar_empty: &'static str,
    pub download: &'static str,
    pub link: &'static str,
    pub code: &'static str,
    pub palette: &'static str,
    pub smartphone: &'static str,
    pub globe: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
}

impl Glyphs {
    #[must_use]
    pub fn skill_icon(&self, icon: SkillIcon) -> &'static str {
        match icon {
            SkillIcon::Code => self.code,
            SkillIcon::Palette => self.palette,
            SkillIcon::Smartphone => self.smartphone,
            SkillIcon::Globe => self.globe,
        }
    }
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            menu: "=",
            close: "x",
            sun: "*",
            moon: "C",
            bullet: "*",
            selected: ">",
            separator: "|",
            rule: "-",
            bar_full: "#",
            bar_empty: "-",
            download: "v",
            link: "->",
            code: "<>",
            palette: "~",
            smartphone: "[]",
            globe: "@",
            arrow_up: "^",
            arrow_down: "v",
            track: "|",
            thumb: "#",
        }
    } else {
        Glyphs {
            menu: "☰",
            close: "✕",
            sun: "☀",
            moon: "☾",
            bullet: "•",
            selected: "▸",
            separator: "│",
            rule: "─",
            bar_full: "█",
            bar_empty: "░",
            download: "⤓",
            link: "↗",
            code: "‹›",
            palette: "◆",
            smartphone: "▯",
            globe: "◍",
            arrow_up: "↑",
            arrow_down: "↓",
            track: "│",
            thumb: "█",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn section_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .bg(palette.primary_bg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_idle(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn tag(palette: &Palette) -> Style {
        Style::default().fg(palette.primary).bg(palette.bg_panel)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }
}
