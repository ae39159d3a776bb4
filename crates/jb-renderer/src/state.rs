//! Context tracked by [`HtmlRenderer`](crate::HtmlRenderer) while it walks
//! the event stream.

/// State for tracking image alt text capture.
///
/// Images nest inline content (`![**bold** alt](x.png)`), so the alt text is
/// collected until the matching end tag and written as a plain attribute.
#[derive(Default)]
pub(crate) struct ImageState {
    /// Nesting depth of open image tags.
    depth: usize,
    /// Buffer for alt text.
    alt_text: String,
}

impl ImageState {
    pub(crate) fn start(&mut self) {
        if self.depth == 0 {
            self.alt_text.clear();
        }
        self.depth += 1;
    }

    /// End image capture. Returns the alt text once the outermost image closes.
    pub(crate) fn end(&mut self) -> Option<String> {
        self.depth = self.depth.saturating_sub(1);
        (self.depth == 0).then(|| std::mem::take(&mut self.alt_text))
    }

    pub(crate) fn is_active(&self) -> bool {
        self.depth > 0
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.alt_text.push_str(text);
    }
}

/// Escape HTML special characters.
///
/// ```
/// use jb_renderer::escape_html;
///
/// assert_eq!(escape_html("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#x27;y&#x27;&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_image_state() {
        let mut state = ImageState::default();
        assert!(!state.is_active());

        state.start();
        assert!(state.is_active());

        state.push_str("alt text");
        assert_eq!(state.end(), Some("alt text".to_owned()));
        assert!(!state.is_active());
    }

    #[test]
    fn test_image_state_nested() {
        let mut state = ImageState::default();
        state.start();
        state.push_str("outer ");
        state.start();
        state.push_str("inner");
        assert_eq!(state.end(), None);
        assert!(state.is_active());
        assert_eq!(state.end(), Some("outer inner".to_owned()));
    }
}
