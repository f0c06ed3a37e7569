use std::{collections::HashMap, fmt::Debug, sync::OnceLock};

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::ApiError;

static ERROR_CODES: OnceLock<HashMap<String, String>> = OnceLock::new();

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::ValidationError(message) => {
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::PersistenceError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::UnknownError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status_code, Json(ErrorResponse { error: message })).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

impl<T, E: Debug> IntoApiResponse<T> for Result<T, E> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            let error = api_error(error_code);
            match error {
                ApiError::ValidationError(_) | ApiError::NotFound(_) => {
                    warn!(code = error_code, error = ?e)
                }
                _ => error!(code = error_code, error = ?e),
            }
            error
        })
    }
}

/// Builds the error for `error_code`. The code's status part picks the
/// variant: `400` validation, `404` not found, `502` a backing store,
/// anything else unknown.
pub(crate) fn api_error(error_code: &str) -> ApiError {
    let message = error_message(error_code);
    match error_code.split('-').next() {
        Some("400") => ApiError::ValidationError(message),
        Some("404") => ApiError::NotFound(message),
        Some("502") => ApiError::PersistenceError(message),
        _ => ApiError::UnknownError(message),
    }
}

pub(crate) fn error_message(error_code: &str) -> String {
    let errors = ERROR_CODES.get_or_init(|| {
        serde_json::from_str(include_str!("error-code.json"))
            .unwrap_or_default()
    });

    errors
        .get(error_code)
        .or_else(|| errors.get("500-000"))
        .cloned()
        .unwrap_or_else(|| "internal server error".to_string())
}
