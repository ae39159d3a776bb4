//! Application state.

use jb_viewer::DocsViewer;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Read-only viewer; each request builds its own page view.
    pub(crate) viewer: DocsViewer,
}
