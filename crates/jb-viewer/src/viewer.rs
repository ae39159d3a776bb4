//! Docs viewer entry point.

use std::sync::Arc;

use jb_renderer::{HighlightError, Highlighter};
use jb_source::{
    DEFAULT_BASE_URL, DEFAULT_ROOT_DOCUMENT, DEFAULT_SIDEBAR_URL, DocumentSource, PageAddress,
    UrlResolver,
};

use crate::renderer::{PageRenderer, RenderedDocument};
use crate::sidebar::Sidebar;
use crate::template::{PageData, StylesheetRef, render_page};
use crate::theme::Theme;
use crate::view::DocsView;

/// Route the stylesheet is linked from in served pages.
pub const STYLESHEET_ROUTE: &str = "/theme.css";

/// Error building a [`DocsViewer`].
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("Failed to set up syntax highlighting: {0}")]
    Highlight(#[from] HighlightError),
}

/// Configuration for [`DocsViewer`].
#[derive(Clone, Debug)]
pub struct ViewerConfig {
    /// Base URL of the raw Markdown docs.
    pub base_url: String,
    /// Document served for the docs root.
    pub root_document: String,
    /// URL of the sidebar JSON.
    pub sidebar_url: String,
    /// Syntax highlighting color theme.
    pub code_theme: String,
    pub theme: Theme,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            root_document: DEFAULT_ROOT_DOCUMENT.to_owned(),
            sidebar_url: DEFAULT_SIDEBAR_URL.to_owned(),
            code_theme: jb_renderer::DEFAULT_CODE_THEME.to_owned(),
            theme: Theme::default(),
        }
    }
}

/// Renders docs pages for page addresses.
///
/// Holds only read-only state, so one instance can serve concurrent
/// requests. Every call fetches the document again; nothing is cached.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use jb_source::{HttpSource, PageAddress};
/// use jb_viewer::{DocsViewer, ViewerConfig};
///
/// let viewer = DocsViewer::new(ViewerConfig::default(), Arc::new(HttpSource::default()))?;
/// let address = PageAddress::new(Some("intro"), None, None)?;
/// let html = viewer.render_page(&address);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct DocsViewer {
    resolver: UrlResolver,
    source: Arc<dyn DocumentSource>,
    renderer: PageRenderer,
    sidebar_url: String,
    theme: Theme,
    stylesheet: String,
}

impl DocsViewer {
    /// Create a viewer. Loads the syntax set and theme once.
    pub fn new(config: ViewerConfig, source: Arc<dyn DocumentSource>) -> Result<Self, ViewerError> {
        let highlighter = Arc::new(Highlighter::new(&config.code_theme)?);
        let stylesheet = config.theme.stylesheet(&highlighter)?;

        Ok(Self {
            resolver: UrlResolver::new(config.base_url, config.root_document),
            source,
            renderer: PageRenderer::with_highlighter(highlighter),
            sidebar_url: config.sidebar_url,
            theme: config.theme,
            stylesheet,
        })
    }

    #[must_use]
    pub fn resolver(&self) -> &UrlResolver {
        &self.resolver
    }

    #[must_use]
    pub fn sidebar_url(&self) -> &str {
        &self.sidebar_url
    }

    /// Site stylesheet: theme variables, layout and highlighting rules.
    #[must_use]
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Fetch and render the document at `address`.
    #[must_use]
    pub fn load(&self, address: &PageAddress) -> DocsView {
        let mut view = DocsView::new(self.resolver.clone());
        view.load(address.clone(), self.source.as_ref(), &self.renderer);
        view
    }

    /// Fetch and render only the document at `address`.
    #[must_use]
    pub fn render_document(&self, address: &PageAddress) -> RenderedDocument {
        self.load(address).into_document()
    }

    /// Fetch the sidebar; failures yield an empty sidebar.
    #[must_use]
    pub fn sidebar(&self) -> Sidebar {
        Sidebar::fetch_or_empty(self.source.as_ref(), &self.sidebar_url)
    }

    /// Full HTML page linking the stylesheet at [`STYLESHEET_ROUTE`].
    #[must_use]
    pub fn render_page(&self, address: &PageAddress) -> String {
        self.render_with_stylesheet(address, StylesheetRef::Link(STYLESHEET_ROUTE))
    }

    /// Full HTML page with the stylesheet embedded.
    #[must_use]
    pub fn render_standalone_page(&self, address: &PageAddress) -> String {
        self.render_with_stylesheet(address, StylesheetRef::Inline(&self.stylesheet))
    }

    fn render_with_stylesheet(&self, address: &PageAddress, stylesheet: StylesheetRef<'_>) -> String {
        let document = self.render_document(address);
        let sidebar = self.sidebar();
        let fonts_url = self.theme.fonts_url();

        render_page(&PageData {
            address,
            content_html: document.html(),
            headings: document.headings(),
            sidebar: &sidebar,
            stylesheet,
            fonts_url: &fonts_url,
        })
    }
}
