use std::sync::Arc;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag};

use crate::highlight::Highlighter;
use crate::state::escape_html;
use crate::transform::Transform;
use crate::tree::MarkdownTree;
use crate::util::fence_language;

/// Replaces fenced code blocks in known languages with highlighted HTML.
///
/// Output shape:
///
/// ```html
/// <pre class="language-sql"><code class="language-sql code-highlight">…</code></pre>
/// ```
///
/// Blocks with no language, an unknown language, or a highlighting failure
/// stay in the tree and render as a plain escaped `<pre><code>` block.
pub struct HighlightCode {
    highlighter: Arc<Highlighter>,
}

impl HighlightCode {
    #[must_use]
    pub fn new(highlighter: Arc<Highlighter>) -> Self {
        Self { highlighter }
    }

    fn highlight_block(&self, events: &[Event<'_>]) -> Option<String> {
        let Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) = events.first()? else {
            return None;
        };
        let language = fence_language(info)?;
        if !self.highlighter.supports(language) {
            return None;
        }

        let mut code = String::new();
        for event in &events[1..] {
            if let Event::Text(text) = event {
                code.push_str(text);
            }
        }

        match self.highlighter.highlight(&code, language) {
            Ok(Some(html)) => {
                let language = escape_html(language);
                Some(format!(
                    r#"<pre class="language-{language}"><code class="language-{language} code-highlight">{html}</code></pre>"#
                ))
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(language, error = %e, "Code highlighting failed");
                None
            }
        }
    }
}

impl Transform for HighlightCode {
    fn name(&self) -> &'static str {
        "highlight-code"
    }

    fn apply<'a>(&self, tree: MarkdownTree<'a>) -> MarkdownTree<'a> {
        let spans = tree.code_block_spans();
        let mut events = tree.into_events();

        for (start, end) in spans.into_iter().rev() {
            if let Some(html) = self.highlight_block(&events[start..end]) {
                events.splice(start..=end, [Event::Html(html.into())]);
            } else if let Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) =
                &mut events[start]
            {
                // Unhighlighted blocks render without a language class.
                *info = CowStr::Borrowed("");
            }
        }

        MarkdownTree::from_events(events)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Pipeline;

    fn render(markdown: &str) -> String {
        Pipeline::new()
            .with_stage(HighlightCode::new(Arc::new(Highlighter::default())))
            .render(markdown)
    }

    #[test]
    fn test_known_language_is_highlighted() {
        let html = render("```sql\nSELECT 1;\n```");
        assert!(html.starts_with(
            r#"<pre class="language-sql"><code class="language-sql code-highlight"><span class="hl-source hl-sql">"#
        ));
        assert!(html.ends_with("</code></pre>"));
    }

    #[test]
    fn test_info_string_attributes_ignored() {
        let html = render("```rust title=main.rs\nfn main() {}\n```");
        assert!(html.starts_with(r#"<pre class="language-rust">"#));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_block() {
        assert_eq!(
            render("```mystery\n<tag>\n```"),
            "<pre><code>&lt;tag&gt;\n</code></pre>"
        );
    }

    #[test]
    fn test_unknown_language_after_highlighted_block() {
        assert_eq!(
            render("```mystery\nx\n```\n\n```sql\nSELECT 1;\n```")
                .split("</pre>")
                .next(),
            Some("<pre><code>x\n</code>")
        );
    }

    #[test]
    fn test_missing_language_falls_back_to_plain_block() {
        assert_eq!(render("```\nplain\n```"), "<pre><code>plain\n</code></pre>");
    }

    #[test]
    fn test_indented_block_not_highlighted() {
        assert_eq!(
            render("    indented code\n"),
            "<pre><code>indented code\n</code></pre>"
        );
    }

    #[test]
    fn test_multiple_blocks_with_surrounding_text() {
        let html = render("Before\n\n```sql\nSELECT 1;\n```\n\nMiddle\n\n```rust\nlet x = 1;\n```\n\nAfter");
        assert!(html.starts_with("<p>Before</p><pre class=\"language-sql\">"));
        assert!(html.contains("</pre><p>Middle</p><pre class=\"language-rust\">"));
        assert!(html.ends_with("</pre><p>After</p>"));
    }
}
