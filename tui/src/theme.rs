//! Color theme and glyphs for the emotion analyzer.
//!
//! Two palettes, light and dark, looked up by [`ThemeMode`].

use ratatui::style::{Color, Modifier, Style};

use emotion_types::{ThemeMode, UiOptions};

/// Light palette constants.
mod light {
    use super::Color;

    pub const BG: Color = Color::Rgb(250, 245, 255);
    pub const BG_PANEL: Color = Color::Rgb(255, 255, 255);
    pub const BORDER: Color = Color::Rgb(196, 181, 253);

    pub const TEXT_PRIMARY: Color = Color::Rgb(31, 41, 55);
    pub const TEXT_SECONDARY: Color = Color::Rgb(75, 85, 99);
    pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128);
    pub const TEXT_DISABLED: Color = Color::Rgb(156, 163, 175);

    pub const PRIMARY: Color = Color::Rgb(124, 58, 237); // violet
    pub const ACCENT: Color = Color::Rgb(219, 39, 119); // pink
    pub const SUCCESS: Color = Color::Rgb(22, 163, 74);
    pub const ERROR: Color = Color::Rgb(220, 38, 38);
    pub const ERROR_BG: Color = Color::Rgb(254, 226, 226);
    pub const TRACK: Color = Color::Rgb(229, 231, 235);
}

/// Dark palette constants (Kanagawa Wave).
mod dark {
    use super::Color;

    pub const BG: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const TEXT_DISABLED: Color = Color::Rgb(84, 84, 109);

    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const ACCENT: Color = Color::Rgb(210, 126, 153); // sakuraPink
    pub const SUCCESS: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const ERROR: Color = Color::Rgb(255, 93, 98); // peachRed
    pub const ERROR_BG: Color = Color::Rgb(67, 36, 42); // winterRed
    pub const TRACK: Color = Color::Rgb(42, 42, 55); // sumiInk4
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
    pub text_disabled: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub error_bg: Color,
    pub track: Color,
}

impl Palette {
    #[must_use]
    pub const fn light() -> Self {
        Self {
            bg: light::BG,
            bg_panel: light::BG_PANEL,
            border: light::BORDER,
            text_primary: light::TEXT_PRIMARY,
            text_secondary: light::TEXT_SECONDARY,
            text_muted: light::TEXT_MUTED,
            text_disabled: light::TEXT_DISABLED,
            primary: light::PRIMARY,
            accent: light::ACCENT,
            success: light::SUCCESS,
            error: light::ERROR,
            error_bg: light::ERROR_BG,
            track: light::TRACK,
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self {
            bg: dark::BG,
            bg_panel: dark::BG_PANEL,
            border: dark::BORDER,
            text_primary: dark::TEXT_PRIMARY,
            text_secondary: dark::TEXT_SECONDARY,
            text_muted: dark::TEXT_MUTED,
            text_disabled: dark::TEXT_DISABLED,
            primary: dark::PRIMARY,
            accent: dark::ACCENT,
            success: dark::SUCCESS,
            error: dark::ERROR,
            error_bg: dark::ERROR_BG,
            track: dark::TRACK,
        }
    }
}

const PALETTES: [(ThemeMode, Palette); 2] = [
    (ThemeMode::Light, Palette::light()),
    (ThemeMode::Dark, Palette::dark()),
];

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    PALETTES
        .iter()
        .find(|(mode, _)| *mode == options.theme)
        .map_or_else(Palette::light, |(_, palette)| *palette)
}

/// ASCII/Unicode glyphs for icons, the confidence bar and the spinner.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub sparkle: &'static str,
    pub error: &'static str,
    pub bar_filled: &'static str,
    pub bar_empty: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            sparkle: "*",
            error: "!",
            bar_filled: "#",
            bar_empty: "-",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            sparkle: "✨",
            error: "✗",
            bar_filled: "█",
            bar_empty: "░",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_enabled(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_panel)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_disabled(palette: &Palette) -> Style {
        Style::default().fg(palette.text_disabled).bg(palette.track)
    }

    #[must_use]
    pub fn emotion_name(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}
