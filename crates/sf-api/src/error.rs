use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sf_feed::ParseTopicError;
use thiserror::Error;

use crate::feed::generator::UpstreamError;

/// Errors a feed request can fail with.
///
/// Invalid input is reported synchronously with a descriptive message and
/// never reaches the generator. Any upstream failure rejects the batch as a
/// whole; partial batches are never returned.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidTopic(#[from] ParseTopicError),
    #[error("Page must be a positive integer")]
    InvalidPage,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidTopic(_) | Self::InvalidPage => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::Upstream(err) => {
                // The caller only sees a generic message; the detail goes to
                // the logs.
                tracing::error!("Content generation failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate content".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
