//! Client error type.

use schema::FieldError;
use serde::Deserialize;

/// Stable machine-readable code plus a retry hint.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Errors produced by runner API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, timeout, body read).
    #[error("API request failed: {0}")]
    Request(String),

    /// The server answered with a non-success HTTP status.
    #[error("API response error: status {status}")]
    Response { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    Parse(String),

    /// The envelope carried a non-success `code`.
    #[error("API returned code {code}: {message}")]
    Envelope { code: i64, message: String },

    /// An update was requested for a record without an id.
    #[error("record has no id; cannot update")]
    MissingId,

    /// A dependent-option mapping names a field the source record lacks.
    #[error("option source record has no field `{0}`")]
    UnknownField(String),

    /// A `DictSelect` names a dictionary that is not registered.
    #[error("unknown dictionary: {0}")]
    UnknownDictionary(String),
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "E_CONFIG_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Request(_) => "E_API_REQUEST",
            Self::Response { .. } => "E_API_RESPONSE",
            Self::Parse(_) => "E_API_PARSE",
            Self::Envelope { .. } => "E_API_ENVELOPE",
            Self::MissingId => "E_MISSING_ID",
            Self::UnknownField(_) => "E_UNKNOWN_FIELD",
            Self::UnknownDictionary(_) => "E_UNKNOWN_DICTIONARY",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    errors: Option<ErrorDetails>,
}

#[derive(Deserialize)]
struct ErrorDetails {
    #[serde(default)]
    detail: Vec<FieldError>,
}

impl ApiError {
    /// Field violations carried by a `422` response, if any.
    #[must_use]
    pub fn field_errors(&self) -> Option<Vec<FieldError>> {
        let Self::Response { status: 422, body } = self else {
            return None;
        };
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed.errors.map(|e| e.detail)
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
