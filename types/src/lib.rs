//! Core domain types for the emotion analyzer.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application: the HTTP client decodes
//! into [`EmotionResult`], the engine owns [`InputText`] and [`RequestState`], and the TUI
//! reads them (plus [`UiOptions`]) for rendering.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod emotion;
mod input;
mod request;
mod sanitize;
pub mod ui;

pub use emotion::{EmotionResult, ErrorMessage, GENERIC_FAILURE_MESSAGE};
pub use input::InputText;
pub use request::{RequestState, RequestTag};
pub use sanitize::sanitize_terminal_text;
pub use ui::{ThemeMode, ThemeParseError, UiOptions};
