//! Decoding of the encoded post-creation payload.
//!
//! Clients send the JSON object `{"text": ...}` wrapped in standard base64.

use crate::model::text::{BoardText, EmptyTextError};
use base64::{DecodeError, Engine, prelude::BASE64_STANDARD};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadDecodeError {
    #[error("Decoding base64 failed: {0}")]
    Base64(#[from] DecodeError),
    #[error("Payload was not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("Payload was not a valid JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("Field `text` must be a string")]
pub struct InvalidTextFieldError;

/// Structured body shared by post and comment creation.
///
/// Only JSON objects are accepted. `text` is optional so that a missing field
/// is reported as a validation failure rather than a decoding failure.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct TextPayload {
    pub text: Option<String>,
}

impl TryFrom<Map<String, Value>> for TextPayload {
    type Error = InvalidTextFieldError;

    fn try_from(mut value: Map<String, Value>) -> Result<Self, Self::Error> {
        let text = match value.remove("text") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text),
            Some(_) => return Err(InvalidTextFieldError),
        };

        Ok(Self { text })
    }
}

impl TextPayload {
    pub fn validate(&self) -> Result<BoardText, EmptyTextError> {
        BoardText::new(self.text.as_deref().unwrap_or_default())
    }
}

/// Unwraps a base64 body into a [`TextPayload`].
pub fn decode_text_payload(body: &[u8]) -> Result<TextPayload, PayloadDecodeError> {
    let decoded = BASE64_STANDARD.decode(body.trim_ascii())?;
    let json = String::from_utf8(decoded)?;

    Ok(serde_json::from_str(&json)?)
}
