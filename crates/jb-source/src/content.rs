//! Fetched document content.

use crate::source::FetchError;

/// Text shown in place of a document that could not be fetched.
pub const FETCH_ERROR_PLACEHOLDER: &str = "Error loading content.";

/// Markdown content of the current page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DocumentContent {
    /// No fetch has resolved yet.
    #[default]
    Empty,
    /// Fetched document body.
    Markdown(String),
    /// The fetch failed.
    Unavailable,
}

impl DocumentContent {
    /// Collapse a fetch result. Errors are logged and become [`Unavailable`].
    ///
    /// [`Unavailable`]: DocumentContent::Unavailable
    #[must_use]
    pub fn from_fetch(result: Result<String, FetchError>) -> Self {
        match result {
            Ok(body) => Self::Markdown(body),
            Err(e) => {
                tracing::warn!(url = e.url(), error = %e, "Failed to fetch document");
                Self::Unavailable
            }
        }
    }

    /// Markdown text to render: empty, the body, or the error placeholder.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Markdown(body) => body,
            Self::Unavailable => FETCH_ERROR_PLACEHOLDER,
        }
    }

    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}
