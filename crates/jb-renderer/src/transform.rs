//! Ordered document transforms and the render pipeline.

use std::sync::Arc;

use crate::highlight::Highlighter;
use crate::html::HtmlRenderer;
use crate::stages::{AutolinkHeadings, HighlightCode, SlugHeadings};
use crate::tree::MarkdownTree;

/// A pure rewrite of a parsed document.
///
/// Stages run in the order they were added to a [`Pipeline`]; each receives
/// the output of the previous one.
pub trait Transform: Send + Sync {
    /// Short stage name used in logs.
    fn name(&self) -> &'static str;

    /// Rewrite the document.
    fn apply<'a>(&self, tree: MarkdownTree<'a>) -> MarkdownTree<'a>;
}

/// Markdown to HTML render pipeline.
///
/// # Example
///
/// ```
/// use jb_renderer::{Pipeline, SlugHeadings};
///
/// let pipeline = Pipeline::new().with_stage(SlugHeadings);
/// assert_eq!(pipeline.render("## Hi there"), r#"<h2 id="hi-there">Hi there</h2>"#);
/// ```
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Transform>>,
}

impl Pipeline {
    /// Create a pipeline with no stages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug headings, autolink headings, then highlight code blocks.
    #[must_use]
    pub fn standard(highlighter: Arc<Highlighter>) -> Self {
        Self::new()
            .with_stage(SlugHeadings)
            .with_stage(AutolinkHeadings)
            .with_stage(HighlightCode::new(highlighter))
    }

    /// Append a stage.
    #[must_use]
    pub fn with_stage<T: Transform + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|stage| stage.name())
    }

    /// Run every stage over the parsed document.
    #[must_use]
    pub fn apply<'a>(&self, tree: MarkdownTree<'a>) -> MarkdownTree<'a> {
        self.stages.iter().fold(tree, |tree, stage| {
            tracing::debug!(stage = stage.name(), "Applying transform");
            stage.apply(tree)
        })
    }

    /// Parse, transform and render Markdown to HTML.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let tree = self.apply(MarkdownTree::parse(markdown));
        HtmlRenderer::new().render(tree.into_events())
    }
}
