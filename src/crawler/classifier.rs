//! Record-vs-listing page classification
//!
//! A page is a record page iff the record-marker element is present. No other
//! signal is consulted.

use crate::model::PageKind;
use crate::renderer::Document;
use scraper::Selector;

/// Classifies a rendered page by the presence of `record_marker`
pub fn classify(document: &Document, record_marker: &Selector) -> PageKind {
    if document.query(record_marker).is_some() {
        PageKind::Record
    } else {
        PageKind::Listing
    }
}
