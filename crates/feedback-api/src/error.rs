//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use feedback_core::error::{AppError, ErrorKind};

use crate::dto::response::ErrorResponse;

/// Error returned by every handler.
///
/// Wraps [`AppError`] so the HTTP mapping can live in this crate. Extractor
/// rejections keep the status axum chose for them (413, 415, ...).
#[derive(Debug)]
pub struct ApiError {
    /// The domain error rendered into the body.
    pub error: AppError,
    /// Status override for rejected requests.
    status: Option<StatusCode>,
}

impl ApiError {
    fn rejected(status: StatusCode, message: String) -> Self {
        Self {
            error: AppError::validation(message),
            status: Some(status),
        }
    }

    /// The HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(match self.error.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Storage
            | ErrorKind::Serialization
            | ErrorKind::Configuration
            | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        })
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self {
            error,
            status: None,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::rejected(
            rejection.status(),
            format!("Invalid JSON body: {}", rejection.body_text()),
        )
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::rejected(
            rejection.status(),
            format!("Invalid query string: {}", rejection.body_text()),
        )
    }
}

fn error_code(status: StatusCode, kind: ErrorKind) -> &'static str {
    match (status, kind) {
        (StatusCode::PAYLOAD_TOO_LARGE, _) => "PAYLOAD_TOO_LARGE",
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, _) => "UNSUPPORTED_MEDIA_TYPE",
        (_, ErrorKind::Validation) => "VALIDATION_ERROR",
        (_, ErrorKind::Unauthorized) => "UNAUTHORIZED",
        _ => "INTERNAL_ERROR",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let err = self.error;

        if !err.kind.is_client_error() {
            tracing::error!(
                error = %err.message,
                source = ?err.source,
                "Request failed"
            );
        }

        let body = ErrorResponse {
            error: err.message,
            code: error_code(status, err.kind).to_string(),
            details: err.details,
        };

        (status, Json(body)).into_response()
    }
}
