//! Documentation table of contents.
//!
//! The sidebar is a JSON object mapping keys to entries:
//!
//! ```json
//! {
//!   "intro": { "title": "Introduction", "file": "intro" },
//!   "sql": {
//!     "title": "SQL",
//!     "file": "sql",
//!     "description": "Query language reference",
//!     "subsections": {
//!       "select": { "title": "SELECT", "file": "sql/select" }
//!     }
//!   }
//! }
//! ```
//!
//! Key order is kept as written.

use std::fmt;

use jb_source::{DocumentSource, FetchError};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error loading the sidebar.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    #[error("Failed to fetch sidebar")]
    Fetch(#[from] FetchError),

    #[error("Invalid sidebar JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One sidebar link, possibly with nested entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarEntry {
    pub key: String,
    pub title: String,
    /// Docs path relative to `/docs`.
    pub file: String,
    /// Hover text.
    pub description: Option<String>,
    pub subsections: Sidebar,
}

impl SidebarEntry {
    /// Site route of the entry, `/docs/{file}`.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/docs/{}", self.file)
    }
}

/// Ordered list of top-level sidebar entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebar {
    entries: Vec<SidebarEntry>,
}

impl Sidebar {
    #[must_use]
    pub fn new(entries: Vec<SidebarEntry>) -> Self {
        Self { entries }
    }

    /// Parse the sidebar JSON.
    pub fn from_json(json: &str) -> Result<Self, SidebarError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fetch and parse the sidebar from `url`.
    pub fn fetch(source: &dyn DocumentSource, url: &str) -> Result<Self, SidebarError> {
        let body = source.fetch(url)?;
        Self::from_json(&body)
    }

    /// Fetch the sidebar, logging any failure and falling back to empty.
    #[must_use]
    pub fn fetch_or_empty(source: &dyn DocumentSource, url: &str) -> Self {
        Self::fetch(source, url).unwrap_or_else(|e| {
            tracing::error!(url, error = %e, "Failed to load sidebar");
            Self::default()
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Deserialize)]
struct EntryBody {
    title: String,
    file: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    subsections: Option<Sidebar>,
}

#[derive(Serialize)]
struct EntryBodyRef<'a> {
    title: &'a str,
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "is_empty_sidebar")]
    subsections: &'a Sidebar,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // Signature required by serde
fn is_empty_sidebar(sidebar: &&Sidebar) -> bool {
    sidebar.is_empty()
}

struct SidebarVisitor;

impl<'de> Visitor<'de> for SidebarVisitor {
    type Value = Sidebar;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of sidebar entries")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, body)) = map.next_entry::<String, EntryBody>()? {
            entries.push(SidebarEntry {
                key,
                title: body.title,
                file: body.file,
                description: body.description,
                subsections: body.subsections.unwrap_or_default(),
            });
        }
        Ok(Sidebar { entries })
    }
}

impl<'de> Deserialize<'de> for Sidebar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SidebarVisitor)
    }
}

impl Serialize for Sidebar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(
                &entry.key,
                &EntryBodyRef {
                    title: &entry.title,
                    file: &entry.file,
                    description: entry.description.as_deref(),
                    subsections: &entry.subsections,
                },
            )?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use jb_source::MockSource;
    use pretty_assertions::assert_eq;

    use super::*;

    const SIDEBAR_JSON: &str = r#"{
        "zeta": { "title": "Zeta", "file": "zeta" },
        "alpha": {
            "title": "Alpha",
            "file": "alpha",
            "description": "First steps",
            "subsections": {
                "install": { "title": "Install", "file": "alpha/install" }
            }
        }
    }"#;

    #[test]
    fn test_parse_preserves_key_order() {
        let sidebar = Sidebar::from_json(SIDEBAR_JSON).unwrap();
        let keys: Vec<_> = sidebar.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn test_parse_nested_entries() {
        let sidebar = Sidebar::from_json(SIDEBAR_JSON).unwrap();
        let alpha = &sidebar.entries()[1];
        assert_eq!(alpha.description.as_deref(), Some("First steps"));
        assert_eq!(alpha.subsections.entries().len(), 1);

        let install = &alpha.subsections.entries()[0];
        assert_eq!(install.title, "Install");
        assert_eq!(install.href(), "/docs/alpha/install");
        assert!(install.subsections.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_title() {
        let err = Sidebar::from_json(r#"{"a": {"file": "a"}}"#).unwrap_err();
        assert!(matches!(err, SidebarError::Parse(_)));
    }

    #[test]
    fn test_parse_null_subsections() {
        let sidebar =
            Sidebar::from_json(r#"{"a": {"title": "A", "file": "a", "subsections": null}}"#)
                .unwrap();
        assert!(sidebar.entries()[0].subsections.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(Sidebar::from_json("[]").is_err());
    }

    #[test]
    fn test_serialize_keeps_order_and_skips_empty() {
        let sidebar = Sidebar::from_json(SIDEBAR_JSON).unwrap();
        let json = serde_json::to_string(&sidebar).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"zeta":{"title":"Zeta","file":"zeta"},"#,
                r#""alpha":{"title":"Alpha","file":"alpha","description":"First steps","#,
                r#""subsections":{"install":{"title":"Install","file":"alpha/install"}}}}"#
            )
        );
    }

    #[test]
    fn test_fetch_from_source() {
        let source = MockSource::new().with_document("https://docs.test/config.json", SIDEBAR_JSON);
        let sidebar = Sidebar::fetch(&source, "https://docs.test/config.json").unwrap();
        assert_eq!(sidebar.entries().len(), 2);
    }

    #[test]
    fn test_fetch_or_empty_on_failure() {
        let source = MockSource::new().with_status("https://docs.test/config.json", 404);
        let sidebar = Sidebar::fetch_or_empty(&source, "https://docs.test/config.json");
        assert!(sidebar.is_empty());
    }

    #[test]
    fn test_fetch_or_empty_on_invalid_json() {
        let source = MockSource::new().with_document("https://docs.test/config.json", "not json");
        assert!(Sidebar::fetch_or_empty(&source, "https://docs.test/config.json").is_empty());
    }
}
