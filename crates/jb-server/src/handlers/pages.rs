//! HTML page endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use jb_source::PageAddress;

use crate::error::ServerError;
use crate::handlers::parse_address;
use crate::state::AppState;

/// Handle GET /docs (root document).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    render(state, PageAddress::root()).await
}

/// Handle GET /docs/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let address = parse_address(&path)?;
    render(state, address).await
}

async fn render(state: Arc<AppState>, address: PageAddress) -> Result<impl IntoResponse, ServerError> {
    let html = tokio::task::spawn_blocking(move || state.viewer.render_page(&address)).await?;

    Ok(([(header::CACHE_CONTROL, "no-cache")], Html(html)))
}
