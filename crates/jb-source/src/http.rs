//! HTTP document source.

use std::time::Duration;

use ureq::Agent;

use crate::source::{DocumentSource, FetchError};

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocking HTTP GET source backed by a shared [`ureq::Agent`].
pub struct HttpSource {
    agent: Agent,
}

impl HttpSource {
    /// Create a source whose requests time out after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "Fetching document");

        let response = self
            .agent
            .get(url)
            .header("Accept", "text/markdown, text/plain, */*")
            .call()
            .map_err(|e| FetchError::Transport {
                url: url.to_owned(),
                source: Box::new(e),
            })?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(FetchError::Status {
                url: url.to_owned(),
                status,
            });
        }

        let mut body_reader = response.into_body();
        body_reader.read_to_string().map_err(|e| FetchError::Body {
            url: url.to_owned(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_http_source_is_send_sync() {
        assert_send_sync::<HttpSource>();
    }

    #[test]
    fn test_unreachable_host_is_transport_error() {
        let source = HttpSource::new(Duration::from_secs(2));
        let err = source.fetch("http://127.0.0.1:1/index.md").unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
        assert_eq!(err.url(), "http://127.0.0.1:1/index.md");
    }
}
