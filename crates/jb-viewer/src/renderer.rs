//! Document rendering.
//!
//! Provides [`PageRenderer`], which turns fetched [`DocumentContent`] into a
//! [`RenderedDocument`]: the content itself, its heading outline and its HTML.

use std::sync::Arc;

use jb_renderer::{HeadingEntry, Highlighter, Pipeline, extract_headings};
use jb_source::DocumentContent;

/// Content, outline and HTML of one fetched document.
///
/// All three fields come from the same [`DocumentContent`]; there is no way
/// to replace one without the others.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedDocument {
    content: DocumentContent,
    headings: Vec<HeadingEntry>,
    html: String,
}

impl RenderedDocument {
    #[must_use]
    pub fn content(&self) -> &DocumentContent {
        &self.content
    }

    /// Level 2-4 heading outline. Empty unless the fetch succeeded.
    #[must_use]
    pub fn headings(&self) -> &[HeadingEntry] {
        &self.headings
    }

    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Markdown to [`RenderedDocument`] renderer.
///
/// # Example
///
/// ```
/// use jb_source::DocumentContent;
/// use jb_viewer::PageRenderer;
///
/// let renderer = PageRenderer::default();
/// let document = renderer.render(DocumentContent::Markdown("## Usage".to_owned()));
///
/// assert_eq!(document.headings()[0].id, "usage");
/// assert!(document.html().starts_with(r#"<h2 id="usage">"#));
/// ```
pub struct PageRenderer {
    pipeline: Pipeline,
}

impl PageRenderer {
    /// Create a renderer around a custom pipeline.
    #[must_use]
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Create a renderer with the standard pipeline.
    #[must_use]
    pub fn with_highlighter(highlighter: Arc<Highlighter>) -> Self {
        Self::new(Pipeline::standard(highlighter))
    }

    /// Render content. Headings are extracted from fetched Markdown only.
    #[must_use]
    pub fn render(&self, content: DocumentContent) -> RenderedDocument {
        let headings = match &content {
            DocumentContent::Markdown(markdown) => extract_headings(markdown),
            DocumentContent::Empty | DocumentContent::Unavailable => Vec::new(),
        };
        let html = self.pipeline.render(content.text());
        RenderedDocument {
            content,
            headings,
            html,
        }
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::with_highlighter(Arc::new(Highlighter::default()))
    }
}

#[cfg(test)]
mod tests {
    use jb_renderer::{AutolinkHeadings, SlugHeadings};
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain_renderer() -> PageRenderer {
        PageRenderer::new(
            Pipeline::new()
                .with_stage(SlugHeadings)
                .with_stage(AutolinkHeadings),
        )
    }

    #[test]
    fn test_render_markdown() {
        let document =
            plain_renderer().render(DocumentContent::Markdown("# T\n## A\n### B".to_owned()));

        let ids: Vec<_> = document.headings().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(
            document.html(),
            r##"<h1 id="t"><a href="#t">T</a></h1><h2 id="a"><a href="#a">A</a></h2><h3 id="b"><a href="#b">B</a></h3>"##
        );
    }

    #[test]
    fn test_render_unavailable_uses_placeholder() {
        let document = plain_renderer().render(DocumentContent::Unavailable);
        assert_eq!(document.content(), &DocumentContent::Unavailable);
        assert!(document.headings().is_empty());
        assert_eq!(document.html(), "<p>Error loading content.</p>");
    }

    #[test]
    fn test_render_empty() {
        let document = plain_renderer().render(DocumentContent::Empty);
        assert_eq!(document, RenderedDocument::default());
    }

    #[test]
    fn test_every_outline_id_exists_in_html() {
        let markdown = "## Getting Started\n\n### Install `jb`\n\n#### Linux & macOS\n\n## FAQ";
        let document = PageRenderer::default().render(DocumentContent::Markdown(markdown.to_owned()));

        assert_eq!(document.headings().len(), 4);
        for heading in document.headings() {
            let id = jb_renderer::escape_html(&heading.id);
            assert!(
                document.html().contains(&format!(r#" id="{id}""#)),
                "missing id {id}"
            );
            assert!(document.html().contains(&format!(r##"href="#{id}""##)));
        }
    }
}
