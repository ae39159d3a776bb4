//! Parsed Markdown document as an owned event sequence.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Parser options shared by the heading extractor and the render pipeline.
///
/// GitHub Flavored Markdown: tables, strikethrough, task lists and alerts.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// A Markdown document as the flat list of parser events.
///
/// Transform stages rewrite the list in place and hand it on; nothing
/// re-parses the source after [`MarkdownTree::parse`].
///
/// Raw HTML in the source is downgraded to text while parsing, so the only
/// [`Event::Html`] events in a tree are those inserted by transform stages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkdownTree<'a> {
    events: Vec<Event<'a>>,
}

impl<'a> MarkdownTree<'a> {
    /// Parse Markdown text with [`parser_options`].
    #[must_use]
    pub fn parse(markdown: &'a str) -> Self {
        let events = Parser::new_ext(markdown, parser_options())
            .map(|event| match event {
                Event::Start(Tag::HtmlBlock) => Event::Start(Tag::Paragraph),
                Event::End(TagEnd::HtmlBlock) => Event::End(TagEnd::Paragraph),
                Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
                other => other,
            })
            .collect();
        Self { events }
    }

    /// Build a tree from already prepared events.
    #[must_use]
    pub fn from_events(events: Vec<Event<'a>>) -> Self {
        Self { events }
    }

    #[must_use]
    pub fn events(&self) -> &[Event<'a>] {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut Vec<Event<'a>> {
        &mut self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<Event<'a>> {
        self.events
    }

    /// Index pairs `(start, end)` of every heading's start and end event.
    pub(crate) fn heading_spans(&self) -> Vec<(usize, usize)> {
        spans(
            &self.events,
            |event| matches!(event, Event::Start(Tag::Heading { .. })),
            |event| matches!(event, Event::End(TagEnd::Heading(_))),
        )
    }

    /// Index pairs `(start, end)` of every code block's start and end event.
    pub(crate) fn code_block_spans(&self) -> Vec<(usize, usize)> {
        spans(
            &self.events,
            |event| matches!(event, Event::Start(Tag::CodeBlock(_))),
            |event| matches!(event, Event::End(TagEnd::CodeBlock)),
        )
    }
}

/// Collect non-nesting spans between matching start and end events.
fn spans(
    events: &[Event<'_>],
    is_start: impl Fn(&Event<'_>) -> bool,
    is_end: impl Fn(&Event<'_>) -> bool,
) -> Vec<(usize, usize)> {
    let mut result = Vec::new();
    let mut open = None;
    for (index, event) in events.iter().enumerate() {
        if is_start(event) {
            open = Some(index);
        } else if is_end(event)
            && let Some(start) = open.take()
        {
            result.push((start, index));
        }
    }
    result
}
