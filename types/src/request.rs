//! Request lifecycle state.

use std::fmt;

use crate::{EmotionResult, ErrorMessage};

/// Lifecycle of the form's analysis request.
///
/// Exactly one variant is active at a time. Entering `Submitting` replaces whatever
/// result or error was held before, so a stale result never coexists with a new request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Submitting,
    Succeeded(EmotionResult),
    Failed(ErrorMessage),
}

impl RequestState {
    #[must_use]
    pub fn tag(&self) -> RequestTag {
        match self {
            RequestState::Idle => RequestTag::Idle,
            RequestState::Submitting => RequestTag::Submitting,
            RequestState::Succeeded(_) => RequestTag::Succeeded,
            RequestState::Failed(_) => RequestTag::Failed,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestState::Submitting)
    }

    #[must_use]
    pub fn result(&self) -> Option<&EmotionResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ErrorMessage> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Field-less discriminant of [`RequestState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestTag {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl RequestTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestTag::Idle => "idle",
            RequestTag::Submitting => "submitting",
            RequestTag::Succeeded => "succeeded",
            RequestTag::Failed => "failed",
        }
    }
}

impl fmt::Display for RequestTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
