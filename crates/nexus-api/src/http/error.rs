//! Application error type mapping to HTTP status codes.
//!
//! Every error body has the narration error shape `{ "error": "..." }`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use nexus_types::error::NarrationError;
use nexus_types::narration::NarrationErrorBody;

#[derive(Debug)]
pub enum AppError {
    /// Narration failed; the client only ever sees the fallback text.
    Narration {
        fallback: String,
        source: NarrationError,
    },
    /// Request body could not be parsed.
    Validation(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Narration { fallback, source } => {
                tracing::warn!(error = %source, "Narration request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, fallback)
            }
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, Json(NarrationErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narration_error_is_500() {
        let response = AppError::Narration {
            fallback: "Explorer Nexus offline. Retry expedition.".to_string(),
            source: NarrationError::Disabled,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_error_is_400() {
        let response = AppError::Validation("missing field `message`".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
