//! Listing page expansion into child URLs
//!
//! # Link Extraction Rules
//!
//! Only anchors matching the tier's link selector are considered. Each one
//! contributes its `href` resolved against the page URL, in document order.
//!
//! **Excluded:**
//! - anchors without an `href`
//! - `javascript:`, `mailto:`, `tel:` and `data:` links
//! - fragment-only links
//! - anything that does not resolve to http(s)

use crate::renderer::Document;
use scraper::Selector;
use url::Url;

/// Collects the absolute targets of every `link_selector` anchor
///
/// A page with no matching links expands to nothing, which is a normal
/// terminal state rather than an error.
pub fn expand(document: &Document, link_selector: &Selector) -> Vec<Url> {
    document
        .query_all(link_selector)
        .into_iter()
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, document.base_url()))
        .collect()
}

/// Resolves a link href to an absolute URL and validates it
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => {
            Some(absolute_url)
        }
        Ok(absolute_url) => {
            tracing::debug!("Skipping non-HTTP link {}", absolute_url);
            None
        }
        Err(e) => {
            tracing::debug!("Skipping unresolvable link {:?}: {}", href, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::SiteSelectors;
    use crate::renderer::RenderedPage;

    fn expand_html(html: &str, base: &str) -> Vec<String> {
        let selectors = SiteSelectors::builtin();
        let page = RenderedPage::new(Url::parse(base).unwrap(), html);
        expand(&page.document().unwrap(), &selectors.teaser_link)
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_teaser_links_expands_to_nothing() {
        let html = r#"<html><body><a href="/nsw/bondi">Not a teaser</a></body></html>"#;
        assert!(expand_html(html, "https://store.aldi.com.au/nsw/bondi").is_empty());
    }

    #[test]
    fn test_links_in_document_order() {
        let html = r#"<html><body>
            <a class="Teaser-titleLink" href="/nsw/sydney/george-st">George St</a>
            <div><a class="Teaser-titleLink" href="https://store.aldi.com.au/nsw/sydney/pitt-st">Pitt St</a></div>
            <a class="Teaser-titleLink" href="kent-st">Kent St</a>
        </body></html>"#;

        assert_eq!(
            expand_html(html, "https://store.aldi.com.au/nsw/sydney"),
            vec![
                "https://store.aldi.com.au/nsw/sydney/george-st",
                "https://store.aldi.com.au/nsw/sydney/pitt-st",
                "https://store.aldi.com.au/nsw/kent-st",
            ]
        );
    }

    #[test]
    fn test_duplicate_links_are_kept() {
        let html = r#"
            <a class="Teaser-titleLink" href="/nsw/bondi">Bondi</a>
            <a class="Teaser-titleLink" href="/nsw/bondi">Bondi again</a>
        "#;
        assert_eq!(expand_html(html, "https://store.aldi.com.au/").len(), 2);
    }

    #[test]
    fn test_skips_unusable_hrefs() {
        let html = r##"
            <a class="Teaser-titleLink">no href</a>
            <a class="Teaser-titleLink" href="">empty</a>
            <a class="Teaser-titleLink" href="#map">fragment</a>
            <a class="Teaser-titleLink" href="javascript:void(0)">js</a>
            <a class="Teaser-titleLink" href="mailto:store@example.com">mail</a>
            <a class="Teaser-titleLink" href="tel:131234">call</a>
            <a class="Teaser-titleLink" href="ftp://example.com/file">ftp</a>
            <a class="Teaser-titleLink" href="/vic/richmond">valid</a>
        "##;
        assert_eq!(
            expand_html(html, "https://store.aldi.com.au/"),
            vec!["https://store.aldi.com.au/vic/richmond"]
        );
    }

    #[test]
    fn test_directory_selector_is_independent() {
        let selectors = SiteSelectors::builtin();
        let page = RenderedPage::new(
            Url::parse("https://store.aldi.com.au/").unwrap(),
            r#"<a class="Directory-listLink" href="/nsw">NSW</a>
               <a class="Teaser-titleLink" href="/nsw/bondi">Bondi</a>"#,
        );
        let document = page.document().unwrap();

        let regions = expand(&document, &selectors.directory_link);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].as_str(), "https://store.aldi.com.au/nsw");
    }
}
