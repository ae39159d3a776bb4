//! Heading slug derivation.

/// Convert heading text to an anchor id.
///
/// Lowercases the text and replaces every run of whitespace with a single
/// `-`. Punctuation is kept as is, and identical texts always produce
/// identical slugs.
///
/// # Examples
///
/// ```
/// use jb_renderer::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("What's  New?"), "what's-new?");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_whitespace = false;

    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("Installation"), "installation");
    }

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("Tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn test_slugify_keeps_punctuation() {
        assert_eq!(slugify("SELECT ... WHERE"), "select-...-where");
        assert_eq!(slugify("snake_case"), "snake_case");
    }

    #[test]
    fn test_slugify_edge_whitespace_becomes_hyphen() {
        assert_eq!(slugify(" padded "), "-padded-");
    }

    #[test]
    fn test_slugify_unicode_lowercase() {
        assert_eq!(slugify("Über Straße"), "über-straße");
    }

    #[test]
    fn test_slugify_final_sigma() {
        assert_eq!(slugify("ΟΔΟΣ Guide"), "οδος-guide");
        assert_eq!(slugify("ΣΟΦΙΑ"), "σοφια");
    }

    #[test]
    fn test_slugify_deterministic() {
        let text = "Real-Time Database";
        assert_eq!(slugify(text), slugify(text));
        assert_eq!(slugify(&slugify(text)), slugify(text));
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
    }
}
