//! Document source abstraction.

/// Boxed underlying cause of a fetch failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error fetching a remote document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// Server answered with a non-2xx status.
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body could not be read as text.
    #[error("Failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: BoxError,
    },
}

impl FetchError {
    /// URL of the failed request.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Body { url, .. } => url,
        }
    }
}

/// Fetches raw Markdown by URL.
///
/// Implementations are blocking and must be shareable across threads.
pub trait DocumentSource: Send + Sync {
    /// Fetch the document body at `url`.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<T: DocumentSource + ?Sized> DocumentSource for std::sync::Arc<T> {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = FetchError::Status {
            url: "https://x/a.md".to_owned(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Request to https://x/a.md returned HTTP 404");
        assert_eq!(err.url(), "https://x/a.md");
    }

    #[test]
    fn test_transport_source_chain() {
        let err = FetchError::Transport {
            url: "https://x/a.md".to_owned(),
            source: std::io::Error::other("connection refused").into(),
        };
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "connection refused");
    }
}
