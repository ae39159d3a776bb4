use pulldown_cmark::{Event, Tag};

use crate::headings::heading_text;
use crate::slug::slugify;
use crate::transform::Transform;
use crate::tree::MarkdownTree;

/// Sets every heading's id to the slug of its text.
///
/// Uses the same text collection as [`extract_headings`](crate::extract_headings),
/// so outline ids always match rendered ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlugHeadings;

impl Transform for SlugHeadings {
    fn name(&self) -> &'static str {
        "slug-headings"
    }

    fn apply<'a>(&self, mut tree: MarkdownTree<'a>) -> MarkdownTree<'a> {
        for (start, end) in tree.heading_spans() {
            let slug = slugify(&heading_text(&tree.events()[start + 1..end]));
            if let Event::Start(Tag::Heading { id, .. }) = &mut tree.events_mut()[start] {
                *id = Some(slug.into());
            }
        }
        tree
    }
}
