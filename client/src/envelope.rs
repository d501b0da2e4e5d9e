//! Response envelope decoding.
//!
//! Every runner API body is `{code, message, data}`; list bodies add
//! `{total, page, page_size}`. Parsing is pure so it can be tested without a
//! server.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// One page of a list call.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default = "ok_code")]
    code: i64,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

#[derive(Deserialize)]
struct PageEnvelope<T> {
    #[serde(default = "ok_code")]
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default = "Vec::new")]
    data: Vec<T>,
    total: u64,
    #[serde(default = "first_page")]
    page: u32,
    #[serde(default = "default_page_size")]
    page_size: u32,
}

fn ok_code() -> i64 {
    200
}

fn first_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

fn check_code(code: i64, message: String) -> Result<(), ApiError> {
    if (200..300).contains(&code) { Ok(()) } else { Err(ApiError::Envelope { code, message }) }
}

/// Decode an envelope and return its `data`, which may be `null`.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] for malformed bodies and
/// [`ApiError::Envelope`] for non-2xx envelope codes.
pub fn parse_data<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    let env: Envelope<T> = serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    check_code(env.code, env.message)?;
    Ok(env.data)
}

/// Decode an envelope whose `data` must be present.
///
/// # Errors
///
/// As [`parse_data`], plus [`ApiError::Parse`] when `data` is `null`.
pub fn parse_record<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    parse_data(body)?.ok_or_else(|| ApiError::Parse("response envelope has no data".to_owned()))
}

/// Decode a paginated envelope.
///
/// # Errors
///
/// As [`parse_data`].
pub fn parse_page<T: DeserializeOwned>(body: &str) -> Result<Page<T>, ApiError> {
    let env: PageEnvelope<T> = serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    check_code(env.code, env.message)?;
    Ok(Page { items: env.data, total: env.total, page: env.page, page_size: env.page_size })
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;
