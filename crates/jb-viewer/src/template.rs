//! HTML page template.
//!
//! Layout: navbar, then the sidebar, the rendered document and the
//! "On this document" outline side by side.

use std::fmt::Write;

use jb_renderer::{HeadingEntry, escape_html};
use jb_source::PageAddress;

use crate::sidebar::Sidebar;

/// Site name shown in the navbar and page titles.
pub const SITE_NAME: &str = "jugadbase";

const GITHUB_URL: &str = "https://github.com/itssitanshu/jugadbase";

/// How the page references the theme stylesheet.
#[derive(Clone, Copy, Debug)]
pub enum StylesheetRef<'a> {
    /// `<link rel="stylesheet">` to a served stylesheet.
    Link(&'a str),
    /// Stylesheet embedded in a `<style>` element.
    Inline(&'a str),
}

/// All data needed to render a docs page.
pub struct PageData<'a> {
    pub address: &'a PageAddress,
    pub content_html: &'a str,
    pub headings: &'a [HeadingEntry],
    pub sidebar: &'a Sidebar,
    pub stylesheet: StylesheetRef<'a>,
    pub fonts_url: &'a str,
}

/// Render a complete HTML page.
///
/// The outline is only shown when the address has a category.
#[must_use]
pub fn render_page(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(8192 + page.content_html.len());

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&page_title(page.address)));
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{}\">",
        escape_html(page.fonts_url)
    );
    match page.stylesheet {
        StylesheetRef::Link(href) => {
            let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{}\">", escape_html(href));
        }
        StylesheetRef::Inline(css) => {
            let _ = writeln!(html, "<style>\n{css}</style>");
        }
    }
    html.push_str("</head>\n<body>\n");

    render_navbar(&mut html);

    html.push_str("<div class=\"doc-wrapper\">\n");
    render_sidebar(&mut html, page.sidebar);

    html.push_str("<div class=\"content-wrapper\">\n<div class=\"markdown-content\">\n");
    html.push_str(page.content_html);
    html.push_str("\n</div>\n</div>\n");

    if !page.address.is_root() {
        render_outline(&mut html, page.headings);
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn page_title(address: &PageAddress) -> String {
    match address.segments().last() {
        Some(segment) => format!("{segment} | {SITE_NAME} docs"),
        None => format!("{SITE_NAME} docs"),
    }
}

fn render_navbar(html: &mut String) {
    html.push_str("<header class=\"navbar\">\n");
    let _ = writeln!(html, "<a href=\"/docs\" class=\"brand\">{SITE_NAME}</a>");
    html.push_str("<nav>\n");
    html.push_str("<a href=\"/docs\">Docs</a>\n");
    let _ = writeln!(html, "<a href=\"{GITHUB_URL}\">GitHub</a>");
    html.push_str("</nav>\n</header>\n");
}

fn render_sidebar(html: &mut String, sidebar: &Sidebar) {
    html.push_str("<aside class=\"sidebar\">\n<h2>Documentation</h2>\n");
    if !sidebar.is_empty() {
        render_sidebar_entries(html, sidebar);
    }
    html.push_str("</aside>\n");
}

fn render_sidebar_entries(html: &mut String, sidebar: &Sidebar) {
    html.push_str("<ul>\n");
    for entry in sidebar.entries() {
        html.push_str("<li>");
        let _ = write!(
            html,
            "<a href=\"{}\">{}</a>",
            escape_html(&entry.href()),
            escape_html(&entry.title)
        );
        if let Some(description) = &entry.description {
            let _ = write!(
                html,
                "<div class=\"sidebar-description\">{}</div>",
                escape_html(description)
            );
        }
        if !entry.subsections.is_empty() {
            html.push('\n');
            render_sidebar_entries(html, &entry.subsections);
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
}

fn render_outline(html: &mut String, headings: &[HeadingEntry]) {
    html.push_str("<aside class=\"toc\">\n<p>On this document</p>\n<ul>\n");
    for heading in headings {
        let _ = writeln!(
            html,
            "<li class=\"level-{}\"><a href=\"#{}\">{}</a></li>",
            heading.level.saturating_sub(1),
            escape_html(&heading.id),
            escape_html(&heading.text)
        );
    }
    html.push_str("</ul>\n</aside>\n");
}
