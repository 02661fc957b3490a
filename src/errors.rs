use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::store::StoreError;

#[derive(Debug)]
pub enum ApiError {
    /// One or more field violations; messages are joined into the envelope's
    /// description in the order they were collected.
    Validation(Vec<String>),
    NotFound(&'static str),
    Storage(StoreError),
    Upstream(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Storage(err)
    }
}

/// Every route answers through this conversion, so success and failure share
/// one envelope shape: a payload on success, `{error, description?}` otherwise.
/// Infrastructure details are logged here and never sent to the client.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(messages) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                  "error": "Invalid input",
                  "description": messages.join(", ")
                })),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                  "error": message
                })),
            )
                .into_response(),
            ApiError::Storage(err) => {
                error!("Store operation failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({
                      "error": "Internal server error"
                    })),
                )
                    .into_response()
            }
            ApiError::Upstream(detail) => {
                error!("Upstream request failed: {}", detail);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(serde_json::json!({
                      "error": "Upstream request failed"
                    })),
                )
                    .into_response()
            }
        }
    }
}
