//! Rendered pages and the queries the crawler runs against them

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

/// Document-level read faults
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Document for {url} is empty")]
    Empty { url: String },
}

/// The result of one navigation: final URL and its markup
///
/// Markup is kept as text and parsed on demand by [`RenderedPage::document`],
/// so a page can be held across `.await` points.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    url: Url,
    html: String,
}

impl RenderedPage {
    pub fn new(url: Url, html: impl Into<String>) -> Self {
        Self {
            url,
            html: html.into(),
        }
    }

    /// Final URL after redirects; relative links resolve against it
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Parses the markup into a queryable document
    ///
    /// Fails when there is no document to read at all.
    pub fn document(&self) -> Result<Document, PageError> {
        if self.html.trim().is_empty() {
            return Err(PageError::Empty {
                url: self.url.to_string(),
            });
        }

        Ok(Document {
            html: Html::parse_document(&self.html),
            base_url: self.url.clone(),
        })
    }
}

/// A parsed page
pub struct Document {
    html: Html,
    base_url: Url,
}

impl Document {
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// First element matching `selector`, in document order
    pub fn query(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// Every element matching `selector`, in document order
    pub fn query_all(&self, selector: &Selector) -> Vec<ElementRef<'_>> {
        self.html.select(selector).collect()
    }

    /// Rendered text of the first match, or `None` when nothing matches
    ///
    /// Line breaks and block boundaries separate words, script and style
    /// content is skipped, and whitespace runs collapse to a single space.
    pub fn text_of(&self, selector: &Selector) -> Option<String> {
        self.query(selector).map(inner_text)
    }

    /// Trimmed attribute of the first match
    pub fn attr_of(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.query(selector)
            .and_then(|element| element.value().attr(attr))
            .map(|value| value.trim().to_string())
    }
}

/// Elements whose boundaries break a line when rendered
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Elements that never contribute visible text
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript", "head"];

fn inner_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_inner_text(element, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_inner_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            continue;
        }

        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };
        let name = child.value().name();

        if HIDDEN_ELEMENTS.iter().any(|hidden| *hidden == name) {
            continue;
        }
        if name == "br" {
            out.push('\n');
            continue;
        }

        let block = BLOCK_ELEMENTS.iter().any(|tag| *tag == name);
        if block {
            out.push('\n');
        }
        push_inner_text(child, out);
        if block {
            out.push('\n');
        }
    }
}
