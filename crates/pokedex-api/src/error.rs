use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pokedex_db::StoreError;
use serde_json::json;

/// Application error type that converts to HTTP responses.
///
/// Store failures are logged server-side with full detail and rendered as a
/// generic message; a miss is an expected outcome and is not logged.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Store(StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Store(e) => {
                tracing::error!(error = %e, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}
