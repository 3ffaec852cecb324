//! Store record extraction
//!
//! Each field is read independently. A field that is missing on the page
//! becomes an empty string without affecting the others; only a document that
//! cannot be read at all produces no record.

use crate::crawler::selectors::FieldSelectors;
use crate::model::Record;
use crate::renderer::{Document, RenderedPage};
use scraper::Selector;

/// Extracts a record from a rendered store page
///
/// Returns `None` when the page's document cannot be read. The fault is logged
/// here and never reaches the caller as an error.
pub fn extract(page: &RenderedPage, fields: &FieldSelectors) -> Option<Record> {
    match page.document() {
        Ok(document) => Some(extract_fields(&document, fields)),
        Err(e) => {
            tracing::warn!("Error scraping store page {}: {}", page.url(), e);
            None
        }
    }
}

/// Reads the seven fields from an already parsed document
pub fn extract_fields(document: &Document, fields: &FieldSelectors) -> Record {
    let text = |selector: &Selector| document.text_of(selector).unwrap_or_default();
    let content = |selector: &Selector| {
        document
            .attr_of(selector, "content")
            .unwrap_or_default()
    };

    Record {
        name: text(&fields.name),
        street: text(&fields.street),
        suburb: text(&fields.suburb),
        state: text(&fields.state),
        postcode: text(&fields.postcode),
        latitude: content(&fields.latitude),
        longitude: content(&fields.longitude),
    }
}
