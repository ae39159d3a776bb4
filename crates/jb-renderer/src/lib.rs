//! Markdown heading extraction and HTML rendering for the docs viewer.
//!
//! Two independent consumers read the same Markdown text:
//!
//! - [`extract_headings`] walks the parsed document and returns the
//!   level 2-4 outline as [`HeadingEntry`] values.
//! - [`Pipeline`] parses the text into a [`MarkdownTree`], runs an ordered
//!   list of [`Transform`] stages over it, and renders the result with
//!   [`HtmlRenderer`].
//!
//! Both sides derive anchor ids with [`slugify`] from the same heading text,
//! so every outline entry links to a heading id present in the rendered HTML.
//!
//! # Example
//!
//! ```
//! use jb_renderer::{Pipeline, SlugHeadings, AutolinkHeadings, extract_headings};
//!
//! let markdown = "# Guide\n\n## Getting Started\n\nText.";
//! let pipeline = Pipeline::new()
//!     .with_stage(SlugHeadings)
//!     .with_stage(AutolinkHeadings);
//!
//! let html = pipeline.render(markdown);
//! let outline = extract_headings(markdown);
//!
//! assert_eq!(outline[0].id, "getting-started");
//! assert!(html.contains(r##"<h2 id="getting-started"><a href="#getting-started">"##));
//! ```

mod headings;
mod highlight;
mod html;
mod slug;
mod stages;
mod state;
mod transform;
mod tree;
mod util;

pub use headings::{HeadingEntry, OUTLINE_LEVELS, extract_headings};
pub use highlight::{DEFAULT_CODE_THEME, HighlightError, Highlighter};
pub use html::HtmlRenderer;
pub use slug::slugify;
pub use stages::{AutolinkHeadings, HighlightCode, SlugHeadings};
pub use state::escape_html;
pub use transform::{Pipeline, Transform};
pub use tree::{MarkdownTree, parser_options};
