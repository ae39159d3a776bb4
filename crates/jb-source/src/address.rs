//! Documentation page addresses.

use std::fmt;

/// Maximum number of path segments in an address.
pub const MAX_SEGMENTS: usize = 3;

const SEGMENT_NAMES: [&str; MAX_SEGMENTS] = ["category", "subpage", "subsubpage"];

/// Error constructing a [`PageAddress`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// A more specific segment was given without the one before it.
    #[error("{segment} given without a {parent}")]
    MissingParent {
        segment: &'static str,
        parent: &'static str,
    },

    /// More than three segments.
    #[error("Too many path segments: {0} (at most 3)")]
    TooManySegments(usize),
}

/// Category, optional subpage and optional subsubpage of a docs page.
///
/// Empty segments count as absent. Segment contents are not validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PageAddress {
    segments: Vec<String>,
}

impl PageAddress {
    /// The docs root page (no segments).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Build an address from its three optional parts.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::MissingParent`] if a subpage is given without a
    /// category, or a subsubpage without a subpage.
    pub fn new(
        category: Option<&str>,
        subpage: Option<&str>,
        subsubpage: Option<&str>,
    ) -> Result<Self, AddressError> {
        Self::from_segments([category, subpage, subsubpage].map(|s| s.unwrap_or_default()))
    }

    /// Build an address from positional path segments.
    ///
    /// Trailing empty segments are dropped; an empty segment followed by a
    /// non-empty one is a missing parent.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::TooManySegments`] for more than three
    /// non-empty segments and [`AddressError::MissingParent`] for gaps.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, AddressError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = segments
            .into_iter()
            .map(|s| s.as_ref().to_owned())
            .collect();
        let len = raw
            .iter()
            .rposition(|s| !s.is_empty())
            .map_or(0, |last| last + 1);

        if len > MAX_SEGMENTS {
            return Err(AddressError::TooManySegments(len));
        }
        if let Some(gap) = raw[..len].iter().position(String::is_empty) {
            let next = raw[gap + 1..len]
                .iter()
                .position(|s| !s.is_empty())
                .map_or(gap, |offset| gap + 1 + offset);
            return Err(AddressError::MissingParent {
                segment: SEGMENT_NAMES[next],
                parent: SEGMENT_NAMES[gap],
            });
        }

        let mut segments = raw;
        segments.truncate(len);
        Ok(Self { segments })
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.segment(0)
    }

    #[must_use]
    pub fn subpage(&self) -> Option<&str> {
        self.segment(1)
    }

    #[must_use]
    pub fn subsubpage(&self) -> Option<&str> {
        self.segment(2)
    }

    /// Present segments, least specific first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Site route of this page, e.g. `/docs/sql/select`.
    #[must_use]
    pub fn route(&self) -> String {
        let mut route = String::from("/docs");
        for segment in &self.segments {
            route.push('/');
            route.push_str(segment);
        }
        route
    }

    fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }
}

impl fmt::Display for PageAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_root() {
        let address = PageAddress::root();
        assert!(address.is_root());
        assert_eq!(address.category(), None);
        assert_eq!(address.route(), "/docs");
    }

    #[test]
    fn test_new_full() {
        let address = PageAddress::new(Some("a"), Some("b"), Some("c")).unwrap();
        assert_eq!(address.category(), Some("a"));
        assert_eq!(address.subpage(), Some("b"));
        assert_eq!(address.subsubpage(), Some("c"));
        assert_eq!(address.to_string(), "/docs/a/b/c");
    }

    #[test]
    fn test_new_empty_strings_are_absent() {
        let address = PageAddress::new(Some("a"), Some(""), None).unwrap();
        assert_eq!(address.segments(), ["a"]);

        assert_eq!(
            PageAddress::new(Some(""), None, None).unwrap(),
            PageAddress::root()
        );
    }

    #[test]
    fn test_new_subpage_without_category() {
        assert_eq!(
            PageAddress::new(None, Some("b"), None),
            Err(AddressError::MissingParent {
                segment: "subpage",
                parent: "category",
            })
        );
    }

    #[test]
    fn test_new_subsubpage_without_subpage() {
        assert_eq!(
            PageAddress::new(Some("a"), None, Some("c")),
            Err(AddressError::MissingParent {
                segment: "subsubpage",
                parent: "subpage",
            })
        );
    }

    #[test]
    fn test_from_segments_trailing_empty() {
        let address = PageAddress::from_segments(["a", "b", ""]).unwrap();
        assert_eq!(address.segments(), ["a", "b"]);
    }

    #[test]
    fn test_from_segments_too_many() {
        assert_eq!(
            PageAddress::from_segments(["a", "b", "c", "d"]),
            Err(AddressError::TooManySegments(4))
        );
    }

    #[test]
    fn test_segments_not_validated() {
        let address = PageAddress::from_segments(["..", "secret"]).unwrap();
        assert_eq!(address.segments(), ["..", "secret"]);
    }

    #[test]
    fn test_error_message() {
        let err = PageAddress::new(None, Some("b"), None).unwrap_err();
        assert_eq!(err.to_string(), "subpage given without a category");
    }
}
