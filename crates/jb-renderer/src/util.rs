//! Shared utility functions for markdown rendering.

use pulldown_cmark::HeadingLevel;

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Language tag of a fenced code block: the first word of the info string.
///
/// Returns `None` for an empty info string.
pub(crate) fn fence_language(info: &str) -> Option<&str> {
    info.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_to_num() {
        assert_eq!(heading_level_to_num(HeadingLevel::H1), 1);
        assert_eq!(heading_level_to_num(HeadingLevel::H4), 4);
        assert_eq!(heading_level_to_num(HeadingLevel::H6), 6);
    }

    #[test]
    fn test_fence_language() {
        assert_eq!(fence_language("rust"), Some("rust"));
        assert_eq!(fence_language("sql title=query.sql"), Some("sql"));
        assert_eq!(fence_language("  "), None);
        assert_eq!(fence_language(""), None);
    }
}
