//! Built-in transform stages.

mod autolink;
mod highlight;
mod slug;

pub use autolink::AutolinkHeadings;
pub use highlight::HighlightCode;
pub use slug::SlugHeadings;
