//! Heading outline extraction.

use std::ops::RangeInclusive;

use pulldown_cmark::{Event, Tag};

use crate::slug::slugify;
use crate::tree::MarkdownTree;
use crate::util::heading_level_to_num;

/// Heading depths included in the document outline.
pub const OUTLINE_LEVELS: RangeInclusive<u8> = 2..=4;

/// One entry of the "On this document" outline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadingEntry {
    /// Heading depth, 2 to 4.
    pub level: u8,
    /// Concatenated heading text.
    pub text: String,
    /// Anchor id, `slugify(text)`.
    pub id: String,
}

/// Extract the level 2-4 headings of a Markdown document in document order.
///
/// Identical heading texts produce identical ids; no suffix is added.
///
/// # Examples
///
/// ```
/// use jb_renderer::extract_headings;
///
/// let outline = extract_headings("# Title\n## Setup\n### Linux\n## Usage");
/// let ids: Vec<_> = outline.iter().map(|h| h.id.as_str()).collect();
/// assert_eq!(ids, ["setup", "linux", "usage"]);
/// ```
#[must_use]
pub fn extract_headings(markdown: &str) -> Vec<HeadingEntry> {
    let tree = MarkdownTree::parse(markdown);
    let events = tree.events();

    tree.heading_spans()
        .into_iter()
        .filter_map(|(start, end)| {
            let Event::Start(Tag::Heading { level, .. }) = &events[start] else {
                return None;
            };
            let level = heading_level_to_num(*level);
            if !OUTLINE_LEVELS.contains(&level) {
                return None;
            }
            let text = heading_text(&events[start + 1..end]);
            Some(HeadingEntry {
                level,
                id: slugify(&text),
                text,
            })
        })
        .collect()
}

/// Plain text of a heading's inner events.
///
/// Text and inline code are concatenated; line breaks become `\n`.
pub(crate) fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(value) | Event::Code(value) => text.push_str(value),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            _ => {}
        }
    }
    text
}
