//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jb_source::AddressError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Request path does not name a docs page.
    #[error("Page not found: {path}")]
    PageNotFound {
        path: String,
        #[source]
        source: AddressError,
    },

    /// Blocking render task panicked or was cancelled.
    #[error("Render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound { path, source } => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path, "reason": source.to_string()}),
            ),
            Self::Task(_) => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": self.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
