//! Response envelopes and the handler error type.
//!
//! DESIGN
//! ======
//! Success bodies are `{code, message, data}`; list bodies add
//! `{total, page, page_size}`. Errors answer with a matching HTTP status and
//! `{code, message, errors}` where `code` repeats the status. Extractor
//! rejections (malformed JSON, a non-numeric id) are converted into
//! [`ApiError::BadRequest`] so they answer with the same shape.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schema::{FormErrors, ResourceKind};
use serde::Serialize;
use serde_json::{Value, json};

pub const SUCCESS_MESSAGE: &str = "success";

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub message: &'static str,
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self { code: 200, message: SUCCESS_MESSAGE, data: Some(data) })
    }
}

/// `DELETE` answers with `data: null`.
pub fn empty() -> Json<Envelope<()>> {
    Json(Envelope { code: 200, message: SUCCESS_MESSAGE, data: None })
}

#[derive(Debug, Serialize)]
pub struct PageEnvelope<T> {
    pub code: u16,
    pub message: &'static str,
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T: Serialize> PageEnvelope<T> {
    pub fn ok(data: Vec<T>, total: u64, page: u32, page_size: u32) -> Json<Self> {
        Json(Self { code: 200, message: SUCCESS_MESSAGE, data, total, page, page_size })
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{resource} {id} not found")]
    NotFound { resource: ResourceKind, id: i64 },

    #[error("unknown resource: {0}")]
    UnknownResource(String),

    #[error("validation failed")]
    Validation(#[from] FormErrors),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::UnknownResource(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn errors(&self) -> Value {
        match self {
            Self::NotFound { resource, id } => json!({ "resource": resource, "id": id }),
            Self::UnknownResource(resource) => json!({ "resource": resource }),
            Self::Validation(errors) => json!({ "detail": errors.0 }),
            Self::BadRequest(detail) => json!({ "detail": detail }),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::debug!(error = %self, "request rejected");
        }
        let body = json!({
            "code": status.as_u16(),
            "message": self.to_string(),
            "errors": self.errors(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod tests;
