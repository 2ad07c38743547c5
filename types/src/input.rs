//! Form input text.

use std::fmt;

/// Text typed into the form.
///
/// Any value is accepted while typing; only [`InputText::is_submittable`] decides whether a
/// submission may go out. The text itself is never trimmed or rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputText(String);

impl InputText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the text contains something other than whitespace.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.0.trim().is_empty()
    }

    pub fn replace(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }
}

impl fmt::Display for InputText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
