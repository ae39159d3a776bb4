//! Document API endpoint.
//!
//! Returns a rendered document as JSON together with its headings and the
//! state the page view ended in.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use jb_renderer::HeadingEntry;
use jb_source::PageAddress;
use jb_viewer::{DocsView, ViewState};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::parse_address;
use crate::state::AppState;

/// Response for GET /api/docs/{path}.
#[derive(Debug, Serialize)]
struct DocumentResponse {
    /// Page route, e.g. `/docs/intro`.
    path: String,
    /// Resolved document URL.
    url: Option<String>,
    state: ViewState,
    /// Raw Markdown, or the placeholder when the fetch failed.
    markdown: String,
    /// Rendered HTML.
    content: String,
    /// Outline of the document.
    headings: Vec<HeadingEntry>,
}

impl From<DocsView> for DocumentResponse {
    fn from(view: DocsView) -> Self {
        let path = view.address().map(PageAddress::route).unwrap_or_default();
        let url = view.url().map(str::to_owned);
        let state = view.state();
        let document = view.into_document();

        Self {
            path,
            url,
            state,
            markdown: document.content().text().to_owned(),
            content: document.html().to_owned(),
            headings: document.headings().to_vec(),
        }
    }
}

/// Handle GET /api/docs/ (root document).
pub(crate) async fn get_root_document(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    load(state, PageAddress::root()).await
}

/// Handle GET /api/docs/{path}.
pub(crate) async fn get_document(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let address = parse_address(&path)?;
    load(state, address).await
}

async fn load(state: Arc<AppState>, address: PageAddress) -> Result<impl IntoResponse, ServerError> {
    let view = tokio::task::spawn_blocking(move || state.viewer.load(&address)).await?;

    Ok(Json(DocumentResponse::from(view)))
}
