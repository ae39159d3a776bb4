//! Navigation state of a single docs page.
//!
//! A [`DocsView`] moves through
//! `Idle -> Fetching -> Rendered | FetchFailed` on every navigation. Each
//! navigation hands out a [`FetchTicket`]; only the ticket of the latest
//! navigation can deliver a result, so a slow response for an earlier
//! address never overwrites the current page.

use jb_source::{DocumentContent, DocumentSource, FetchError, PageAddress, UrlResolver};

use crate::renderer::{PageRenderer, RenderedDocument};

/// Lifecycle state of a [`DocsView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// No navigation yet.
    Idle,
    /// Waiting for the document of the current address.
    Fetching,
    /// Document fetched and rendered.
    Rendered,
    /// Fetch failed; the placeholder is shown.
    FetchFailed,
}

impl ViewState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Rendered => "rendered",
            Self::FetchFailed => "fetch_failed",
        }
    }
}

/// Handle for one in-flight fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    address: PageAddress,
    url: String,
}

impl FetchTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Document URL to fetch.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Outcome of [`DocsView::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// The result became the current document.
    Applied,
    /// A newer navigation superseded the ticket; the result was dropped.
    Stale,
}

/// Current address and document of one page instance.
#[derive(Debug)]
pub struct DocsView {
    resolver: UrlResolver,
    state: ViewState,
    generation: u64,
    address: Option<PageAddress>,
    url: Option<String>,
    document: RenderedDocument,
}

impl DocsView {
    #[must_use]
    pub fn new(resolver: UrlResolver) -> Self {
        Self {
            resolver,
            state: ViewState::Idle,
            generation: 0,
            address: None,
            url: None,
            document: RenderedDocument::default(),
        }
    }

    /// Start navigating to `address`.
    ///
    /// Clears the current document and headings, then returns the ticket the
    /// fetch result must be delivered with.
    pub fn navigate(&mut self, address: PageAddress) -> FetchTicket {
        let url = self.resolver.resolve(&address);
        self.generation += 1;
        self.state = ViewState::Fetching;
        self.document = RenderedDocument::default();
        self.address = Some(address.clone());
        self.url = Some(url.clone());

        tracing::debug!(generation = self.generation, %address, %url, "Navigating");

        FetchTicket {
            generation: self.generation,
            address,
            url,
        }
    }

    /// Deliver the fetch result for `ticket`.
    ///
    /// Results for superseded tickets are dropped and return
    /// [`Delivery::Stale`].
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        result: Result<String, FetchError>,
        renderer: &PageRenderer,
    ) -> Delivery {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                address = %ticket.address,
                url = %ticket.url,
                "Dropping stale fetch result"
            );
            return Delivery::Stale;
        }

        let content = DocumentContent::from_fetch(result);
        self.state = if content.is_unavailable() {
            ViewState::FetchFailed
        } else {
            ViewState::Rendered
        };
        self.document = renderer.render(content);
        Delivery::Applied
    }

    /// Navigate, fetch and resolve in one blocking call.
    pub fn load(
        &mut self,
        address: PageAddress,
        source: &dyn DocumentSource,
        renderer: &PageRenderer,
    ) -> Delivery {
        let ticket = self.navigate(address);
        let result = source.fetch(ticket.url());
        self.resolve(&ticket, result, renderer)
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Navigation counter; increases by one on every [`navigate`](Self::navigate).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn address(&self) -> Option<&PageAddress> {
        self.address.as_ref()
    }

    /// Document URL of the current address.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn document(&self) -> &RenderedDocument {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> RenderedDocument {
        self.document
    }
}
