pub mod events;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use evreg_core::EvRegError;

/// The `{status, message, data}` wrapper applied to every JSON response
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Envelope {
            status: "success",
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Success envelope without a data payload (delete acknowledgments)
    pub fn success_empty(message: impl Into<String>) -> Self {
        Envelope {
            status: "success",
            message: message.into(),
            data: None,
        }
    }
}

/// Convert domain errors to HTTP responses with error envelopes
pub enum AppError {
    NotFound,
    Validation(String),
    Internal(String),
}

impl From<EvRegError> for AppError {
    fn from(err: EvRegError) -> Self {
        match err {
            EvRegError::NotFound(_) => AppError::NotFound,
            EvRegError::Validation(reason) => AppError::Validation(reason),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Event not found.".to_string()),
            AppError::Validation(reason) => (StatusCode::UNPROCESSABLE_ENTITY, reason),
            AppError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason),
        };
        let body = Json(json!({ "status": "error", "message": message }));
        (code, body).into_response()
    }
}
