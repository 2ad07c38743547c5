//! Presentation options for the TUI layer.
//!
//! Pure data, no ratatui dependency. The engine stores these next to (never inside)
//! the request state; the TUI turns them into palettes and glyphs.

use thiserror::Error;

/// Color scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid theme '{0}'; expected one of: light, dark")]
pub struct ThemeParseError(pub String);

impl ThemeMode {
    /// Parse a theme name (case-insensitive, surrounding whitespace ignored).
    pub fn parse(raw: &str) -> Result<Self, ThemeParseError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ThemeParseError(raw.to_string())),
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    pub theme: ThemeMode,
    /// Use ASCII-only glyphs for icons and spinners.
    pub ascii_only: bool,
    /// Freeze the spinner.
    pub reduced_motion: bool,
}
