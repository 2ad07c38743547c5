//! Values produced by a settled analysis request.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The one message shown for every failed request, whatever went wrong.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Classification returned by the remote service.
///
/// Decoded verbatim from the service payload: the label is not checked for emptiness and
/// `confidence` is not clamped to `[0, 1]`. A missing or wrong-typed field fails decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    emotion: String,
    confidence: f64,
    emoji: String,
}

impl EmotionResult {
    pub fn new(emotion: impl Into<String>, confidence: f64, emoji: impl Into<String>) -> Self {
        Self {
            emotion: emotion.into(),
            confidence,
            emoji: emoji.into(),
        }
    }

    #[must_use]
    pub fn emotion(&self) -> &str {
        &self.emotion
    }

    /// Raw score as sent by the service, nominally in `[0, 1]`.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Display glyph; may be empty.
    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }
}

/// Opaque, display-only description of a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage(Cow<'static, str>);

impl ErrorMessage {
    /// The fixed message every failure collapses to.
    #[must_use]
    pub const fn generic() -> Self {
        Self(Cow::Borrowed(GENERIC_FAILURE_MESSAGE))
    }

    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self(message.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
