use crate::sanitize::sanitize;
use serde::Serialize;
use thiserror::Error;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("Text must not be empty")]
pub struct EmptyTextError;

/// Non-blank, HTML-escaped text of a post or comment.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Serialize)]
#[serde(transparent)]
pub struct BoardText(String);

impl BoardText {
    /// Validates untrusted input and escapes it.
    ///
    /// Only the raw text is checked for blankness; escaping never empties it.
    pub fn new(raw: &str) -> Result<Self, EmptyTextError> {
        if raw.trim().is_empty() {
            return Err(EmptyTextError);
        }

        Ok(Self(sanitize(raw)))
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for BoardText {
    type Error = EmptyTextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}
