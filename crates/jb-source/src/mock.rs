//! Mock document source for testing.
//!
//! Provides [`MockSource`] for unit testing without network access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::source::{DocumentSource, FetchError};

#[derive(Clone, Debug)]
enum MockResponse {
    Document(String),
    Status(u16),
    Transport(String),
}

/// In-memory document source.
///
/// Serves canned responses by URL and records every requested URL. URLs
/// with no configured response answer with HTTP 404.
///
/// # Example
///
/// ```
/// use jb_source::{DocumentSource, MockSource};
///
/// let source = MockSource::new()
///     .with_document("https://docs/index.md", "# Home")
///     .with_status("https://docs/broken.md", 500);
///
/// assert_eq!(source.fetch("https://docs/index.md").unwrap(), "# Home");
/// assert!(source.fetch("https://docs/broken.md").is_err());
/// assert_eq!(source.request_count("https://docs/index.md"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    responses: RwLock<HashMap<String, MockResponse>>,
    requests: RwLock<Vec<String>>,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.set_document(url, body);
        self
    }

    /// Answer `url` with an HTTP status error.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.set_response(url.into(), MockResponse::Status(status));
        self
    }

    /// Fail requests to `url` with a transport error.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_transport_error(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.set_response(url.into(), MockResponse::Transport(message.into()));
        self
    }

    /// Replace the document served for `url`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_document(&self, url: impl Into<String>, body: impl Into<String>) {
        self.set_response(url.into(), MockResponse::Document(body.into()));
    }

    /// Every requested URL in request order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }

    /// Number of requests made for `url`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .read()
            .unwrap()
            .iter()
            .filter(|requested| *requested == url)
            .count()
    }

    fn set_response(&self, url: String, response: MockResponse) {
        self.responses.write().unwrap().insert(url, response);
    }
}

impl DocumentSource for MockSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requests.write().unwrap().push(url.to_owned());

        let response = self.responses.read().unwrap().get(url).cloned();
        match response {
            Some(MockResponse::Document(body)) => Ok(body),
            Some(MockResponse::Status(status)) => Err(FetchError::Status {
                url: url.to_owned(),
                status,
            }),
            Some(MockResponse::Transport(message)) => Err(FetchError::Transport {
                url: url.to_owned(),
                source: std::io::Error::other(message).into(),
            }),
            None => Err(FetchError::Status {
                url: url.to_owned(),
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_mock_source_is_send_sync() {
        assert_send_sync::<MockSource>();
    }

    #[test]
    fn test_unknown_url_is_404() {
        let err = MockSource::new().fetch("https://docs/missing.md").unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[test]
    fn test_transport_error() {
        let source = MockSource::new().with_transport_error("https://docs/a.md", "timed out");
        let err = source.fetch("https://docs/a.md").unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[test]
    fn test_set_document_replaces_body() {
        let source = MockSource::new().with_document("https://docs/a.md", "old");
        assert_eq!(source.fetch("https://docs/a.md").unwrap(), "old");

        source.set_document("https://docs/a.md", "new");
        assert_eq!(source.fetch("https://docs/a.md").unwrap(), "new");
    }

    #[test]
    fn test_records_requests() {
        let source = MockSource::new();
        let _ = source.fetch("https://docs/a.md");
        let _ = source.fetch("https://docs/b.md");
        let _ = source.fetch("https://docs/a.md");

        assert_eq!(
            source.requests(),
            vec![
                "https://docs/a.md".to_owned(),
                "https://docs/b.md".to_owned(),
                "https://docs/a.md".to_owned(),
            ]
        );
        assert_eq!(source.request_count("https://docs/a.md"), 2);
    }
}
