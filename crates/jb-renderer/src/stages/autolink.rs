use pulldown_cmark::{CowStr, Event, Tag, TagEnd};

use crate::state::escape_html;
use crate::transform::Transform;
use crate::tree::MarkdownTree;

/// Wraps the content of every heading that has an id in `<a href="#id">`.
///
/// Headings without an id are left alone, so this stage runs after
/// [`SlugHeadings`](crate::SlugHeadings).
#[derive(Clone, Copy, Debug, Default)]
pub struct AutolinkHeadings;

impl Transform for AutolinkHeadings {
    fn name(&self) -> &'static str {
        "autolink-headings"
    }

    fn apply<'a>(&self, tree: MarkdownTree<'a>) -> MarkdownTree<'a> {
        let spans = tree.heading_spans();
        let mut events = tree.into_events();

        // Back to front so earlier indices stay valid.
        for (start, end) in spans.into_iter().rev() {
            let Event::Start(Tag::Heading { id: Some(id), .. }) = &events[start] else {
                continue;
            };
            let open = format!(r##"<a href="#{}">"##, escape_html(id));

            // Anchors cannot nest; links inside the heading keep only their text.
            let content: Vec<Event<'a>> = events
                .drain(start + 1..end)
                .filter(|event| {
                    !matches!(event, Event::Start(Tag::Link { .. }) | Event::End(TagEnd::Link))
                })
                .collect();

            let mut wrapped = Vec::with_capacity(content.len() + 2);
            wrapped.push(Event::Html(open.into()));
            wrapped.extend(content);
            wrapped.push(Event::Html(CowStr::Borrowed("</a>")));
            events.splice(start + 1..start + 1, wrapped);
        }

        MarkdownTree::from_events(events)
    }
}
