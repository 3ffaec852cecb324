//! Data model for a harvest run
//!
//! - [`Record`]: one store location, seven string fields
//! - [`PageKind`]: classification outcome for a rendered page
//! - [`CrawlResult`]: the ordered records of a run plus its statistics

mod record;
mod result;

pub use record::Record;
pub use result::{CrawlResult, CrawlStats};

/// The two shapes a directory page can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// A single store page presenting one location
    Record,
    /// A page enumerating child URLs (regions, suburbs or stores)
    Listing,
}
