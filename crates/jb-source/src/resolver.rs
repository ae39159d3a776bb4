//! Page address to document URL mapping.

use crate::address::PageAddress;

/// Raw docs directory of the JugadBase repository.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/ItsSitanshu/jugadbase/refs/heads/main/docs";

/// Document served for the docs root.
pub const DEFAULT_ROOT_DOCUMENT: &str = "index.md";

/// Sidebar table of contents of the JugadBase repository.
pub const DEFAULT_SIDEBAR_URL: &str =
    "https://raw.githubusercontent.com/ItsSitanshu/jugadbase/main/docs/config.json";

/// Maps page addresses to remote Markdown URLs.
///
/// | Address        | URL                         |
/// |----------------|-----------------------------|
/// | `()`           | `{base}/{root_document}`    |
/// | `(a)`          | `{base}/a/index.md`         |
/// | `(a, b)`       | `{base}/a/b.md`             |
/// | `(a, b, c)`    | `{base}/a/b/c.md`           |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlResolver {
    base_url: String,
    root_document: String,
}

impl UrlResolver {
    /// Create a resolver. Trailing slashes on `base_url` are ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>, root_document: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            root_document: root_document.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Document URL for an address.
    #[must_use]
    pub fn resolve(&self, address: &PageAddress) -> String {
        let base = &self.base_url;
        let url = match (address.category(), address.subpage(), address.subsubpage()) {
            (Some(category), Some(subpage), Some(subsubpage)) => {
                format!("{base}/{category}/{subpage}/{subsubpage}.md")
            }
            (Some(category), Some(subpage), None) => format!("{base}/{category}/{subpage}.md"),
            (Some(category), None, _) => format!("{base}/{category}/index.md"),
            (None, ..) => format!("{base}/{}", self.root_document),
        };
        tracing::debug!(%address, %url, "Resolved document URL");
        url
    }
}

impl Default for UrlResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_ROOT_DOCUMENT)
    }
}
