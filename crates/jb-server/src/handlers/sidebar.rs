//! Sidebar API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/sidebar.
///
/// An unreachable or malformed sidebar yields an empty list.
pub(crate) async fn get_sidebar(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let sidebar = tokio::task::spawn_blocking(move || state.viewer.sidebar()).await?;

    Ok(Json(sidebar))
}
