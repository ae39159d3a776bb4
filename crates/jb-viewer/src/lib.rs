//! Docs page state, sidebar, theme and HTML page rendering.
//!
//! [`DocsViewer`] is the single entry point used by the server and the CLI:
//! it resolves a [`PageAddress`](jb_source::PageAddress) to a document URL,
//! fetches and renders the document through a [`DocsView`], loads the
//! [`Sidebar`] and fills the page template.

mod renderer;
mod sidebar;
mod template;
mod theme;
mod view;
mod viewer;

pub use renderer::{PageRenderer, RenderedDocument};
pub use sidebar::{Sidebar, SidebarEntry, SidebarError};
pub use template::{PageData, SITE_NAME, StylesheetRef, render_page};
pub use theme::Theme;
pub use view::{Delivery, DocsView, FetchTicket, ViewState};
pub use viewer::{DocsViewer, STYLESHEET_ROUTE, ViewerConfig, ViewerError};
