//! Page addressing and remote document fetching.
//!
//! A [`PageAddress`] names a documentation page by up to three path
//! segments. [`UrlResolver`] maps it to the URL of a raw Markdown file, and a
//! [`DocumentSource`] fetches that file. [`DocumentContent`] is what the
//! viewer keeps: the body on success, a fixed placeholder on any failure.
//!
//! # Example
//!
//! ```
//! use jb_source::{PageAddress, UrlResolver};
//!
//! let resolver = UrlResolver::new("https://docs.example.com/raw/", "index.md");
//! let address = PageAddress::new(Some("sql"), Some("select"), None).unwrap();
//!
//! assert_eq!(resolver.resolve(&address), "https://docs.example.com/raw/sql/select.md");
//! assert_eq!(resolver.resolve(&PageAddress::root()), "https://docs.example.com/raw/index.md");
//! ```

mod address;
mod content;
mod http;
#[cfg(feature = "mock")]
mod mock;
mod resolver;
mod source;

pub use address::{AddressError, MAX_SEGMENTS, PageAddress};
pub use content::{DocumentContent, FETCH_ERROR_PLACEHOLDER};
pub use http::{DEFAULT_TIMEOUT_SECS, HttpSource};
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use resolver::{DEFAULT_BASE_URL, DEFAULT_ROOT_DOCUMENT, DEFAULT_SIDEBAR_URL, UrlResolver};
pub use source::{DocumentSource, FetchError};
