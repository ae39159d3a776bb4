//! HTML output for transformed Markdown events.
//!
//! Produces semantic HTML5. Text is always escaped; [`Event::Html`] is
//! written verbatim, which is how transform stages inject markup.

use std::fmt::Write;

use pulldown_cmark::{Alignment, BlockQuoteKind, CodeBlockKind, Event, Tag, TagEnd};

use crate::state::{ImageState, escape_html};
use crate::util::{fence_language, heading_level_to_num};

/// URL schemes never written into `href`/`src` attributes.
const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Event-to-HTML writer.
///
/// # Example
///
/// ```
/// use jb_renderer::{HtmlRenderer, MarkdownTree};
///
/// let tree = MarkdownTree::parse("Hello, *world*!");
/// let html = HtmlRenderer::new().render(tree.into_events());
/// assert_eq!(html, "<p>Hello, <em>world</em>!</p>");
/// ```
#[derive(Default)]
pub struct HtmlRenderer {
    output: String,
    /// Code block being collected, written whole at its end tag.
    code: Option<PendingCode>,
    table: TableCursor,
    image: ImageState,
    pending_image: Option<(String, String)>,
    /// Alert kinds of open blockquotes (plain blockquotes push `None`).
    alert_stack: Vec<Option<BlockQuoteKind>>,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            ..Self::default()
        }
    }

    /// Render events and return the HTML.
    pub fn render<'a, I>(&mut self, events: I) -> String
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }
        std::mem::take(&mut self.output)
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.output.push_str(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.output.push_str("<br>"),
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(checked) => self.task_list_marker(checked),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not enabled in the parser options
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, id, .. } => {
                let level = heading_level_to_num(level);
                match id {
                    Some(id) => {
                        write!(self.output, r#"<h{level} id="{}">"#, escape_html(&id)).unwrap();
                    }
                    None => write!(self.output, "<h{level}>").unwrap(),
                }
            }
            Tag::BlockQuote(kind) => {
                self.alert_stack.push(kind);
                match kind {
                    Some(kind) => {
                        let (class, title) = alert_label(kind);
                        write!(
                            self.output,
                            r#"<div class="alert alert-{class}"><p class="alert-title">{title}</p>"#
                        )
                        .unwrap();
                    }
                    None => self.output.push_str("<blockquote>"),
                }
            }
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(ref info) => fence_language(info).map(str::to_owned),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some(PendingCode {
                    language,
                    text: String::new(),
                });
            }
            Tag::List(Some(1)) => self.output.push_str("<ol>"),
            Tag::List(Some(start)) => write!(self.output, r#"<ol start="{start}">"#).unwrap(),
            Tag::List(None) => self.output.push_str("<ul>"),
            Tag::Item => self.output.push_str("<li>"),
            Tag::FootnoteDefinition(_) | Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList => self.output.push_str("<dl>"),
            Tag::DefinitionListTitle => self.output.push_str("<dt>"),
            Tag::DefinitionListDefinition => self.output.push_str("<dd>"),
            Tag::Table(alignments) => {
                self.table = TableCursor {
                    alignments,
                    ..TableCursor::default()
                };
                self.output.push_str("<table>");
            }
            Tag::TableHead => {
                self.table.in_head = true;
                self.table.column = 0;
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.column = 0;
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let (tag, align) = (self.table.cell_tag(), self.table.align_attr());
                write!(self.output, "<{tag}{align}>").unwrap();
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<del>"),
            Tag::Superscript => self.push_inline("<sup>"),
            Tag::Subscript => self.push_inline("<sub>"),
            Tag::Link {
                dest_url, title, ..
            } => {
                if self.image.is_active() {
                    return;
                }
                write!(self.output, r#"<a href="{}""#, escape_html(safe_url(&dest_url))).unwrap();
                if !title.is_empty() {
                    write!(self.output, r#" title="{}""#, escape_html(&title)).unwrap();
                }
                self.output.push('>');
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                if !self.image.is_active() {
                    self.pending_image = Some((dest_url.to_string(), title.to_string()));
                }
                self.image.start();
            }
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(level) => {
                write!(self.output, "</h{}>", heading_level_to_num(level)).unwrap();
            }
            TagEnd::BlockQuote(_) => match self.alert_stack.pop() {
                Some(Some(_)) => self.output.push_str("</div>"),
                _ => self.output.push_str("</blockquote>"),
            },
            TagEnd::CodeBlock => {
                let Some(PendingCode {
                    language,
                    text: content,
                }) = self.code.take()
                else {
                    return;
                };
                match language {
                    Some(language) => write!(
                        self.output,
                        r#"<pre><code class="language-{}">{}</code></pre>"#,
                        escape_html(&language),
                        escape_html(&content)
                    )
                    .unwrap(),
                    None => {
                        write!(self.output, "<pre><code>{}</code></pre>", escape_html(&content))
                            .unwrap();
                    }
                }
            }
            TagEnd::List(ordered) => self.output.push_str(if ordered { "</ol>" } else { "</ul>" }),
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::FootnoteDefinition | TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => {}
            TagEnd::DefinitionList => self.output.push_str("</dl>"),
            TagEnd::DefinitionListTitle => self.output.push_str("</dt>"),
            TagEnd::DefinitionListDefinition => self.output.push_str("</dd>"),
            TagEnd::Table => self.output.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.in_head = false;
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                write!(self.output, "</{}>", self.table.cell_tag()).unwrap();
                self.table.column += 1;
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</del>"),
            TagEnd::Superscript => self.push_inline("</sup>"),
            TagEnd::Subscript => self.push_inline("</sub>"),
            TagEnd::Link => self.push_inline("</a>"),
            TagEnd::Image => {
                if let Some(alt) = self.image.end()
                    && let Some((src, title)) = self.pending_image.take()
                {
                    self.write_image(&src, &alt, &title);
                }
            }
        }
    }

    /// Inline markup is dropped while collecting image alt text.
    fn push_inline(&mut self, html: &str) {
        if !self.image.is_active() {
            self.output.push_str(html);
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(code) = &mut self.code {
            code.text.push_str(text);
        } else if self.image.is_active() {
            self.image.push_str(text);
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.image.is_active() {
            self.image.push_str(code);
        } else {
            write!(self.output, "<code>{}</code>", escape_html(code)).unwrap();
        }
    }

    fn soft_break(&mut self) {
        if self.image.is_active() {
            self.image.push_str(" ");
        } else {
            self.output.push('\n');
        }
    }

    fn task_list_marker(&mut self, checked: bool) {
        if checked {
            self.output
                .push_str(r#"<input type="checkbox" disabled checked> "#);
        } else {
            self.output.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }

    fn write_image(&mut self, src: &str, alt: &str, title: &str) {
        write!(
            self.output,
            r#"<img src="{}" alt="{}""#,
            escape_html(safe_url(src)),
            escape_html(alt)
        )
        .unwrap();
        if !title.is_empty() {
            write!(self.output, r#" title="{}""#, escape_html(title)).unwrap();
        }
        self.output.push('>');
    }
}

struct PendingCode {
    language: Option<String>,
    text: String,
}

/// Position inside the open table.
#[derive(Default)]
struct TableCursor {
    alignments: Vec<Alignment>,
    in_head: bool,
    column: usize,
}

impl TableCursor {
    fn cell_tag(&self) -> &'static str {
        if self.in_head { "th" } else { "td" }
    }

    fn align_attr(&self) -> &'static str {
        match self.alignments.get(self.column) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// CSS class suffix and title of a GFM alert.
fn alert_label(kind: BlockQuoteKind) -> (&'static str, &'static str) {
    match kind {
        BlockQuoteKind::Note => ("note", "Note"),
        BlockQuoteKind::Tip => ("tip", "Tip"),
        BlockQuoteKind::Important => ("important", "Important"),
        BlockQuoteKind::Warning => ("warning", "Warning"),
        BlockQuoteKind::Caution => ("caution", "Caution"),
    }
}

/// Replace script-capable URLs with `#`.
fn safe_url(url: &str) -> &str {
    let lower = url.trim_start().to_ascii_lowercase();
    if BLOCKED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        "#"
    } else {
        url
    }
}
