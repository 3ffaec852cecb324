//! Crawl driver - directory traversal and record accumulation
//!
//! The driver walks the directory tier by tier:
//!
//! 1. **Directory**: the root page is expanded into region URLs
//! 2. **Region**: every region page is expanded into suburb-or-store URLs,
//!    concatenated into one flat sequence
//! 3. **Leaf**: every suburb-or-store page is classified. A store page is
//!    extracted directly; a suburb listing is expanded into store URLs and
//!    each store page is then extracted
//!
//! Every navigation goes through [`Driver::visit`], so fault isolation is the
//! same at every tier: a failed load is logged, counted and skipped, except at
//! the root where it aborts the run.

use crate::crawler::classifier::classify;
use crate::crawler::expander::expand;
use crate::crawler::extractor::{extract, extract_fields};
use crate::crawler::selectors::SiteSelectors;
use crate::crawler::tier::Tier;
use crate::model::{CrawlResult, CrawlStats, PageKind, Record};
use crate::output::Progress;
use crate::renderer::{PageRenderer, RenderedPage};
use crate::HarvestError;
use std::time::Instant;
use url::Url;

/// What a single visited page contributed
#[derive(Debug)]
enum Visit {
    /// The page could not be loaded or read
    Skipped,
    /// A listing page and the URLs it links to
    Children(Vec<Url>),
    /// A store page and its record
    Record(Record),
}

/// Drives one rendering session through the directory
pub struct Driver<R> {
    renderer: R,
    selectors: SiteSelectors,
}

impl<R: PageRenderer> Driver<R> {
    pub fn new(renderer: R, selectors: SiteSelectors) -> Self {
        Self {
            renderer,
            selectors,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Walks the directory below `root` and returns every record found
    ///
    /// Records are ordered by leaf visit order. `progress` receives the number
    /// of suburb-or-store URLs once, then one tick per URL.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlResult)` - Traversal finished, possibly with skipped pages
    /// * `Err(HarvestError::RootUnreachable)` - The root page failed to load
    pub async fn run<P: Progress>(
        &mut self,
        root: &Url,
        progress: &mut P,
    ) -> Result<CrawlResult, HarvestError> {
        tracing::info!("Starting harvest at {}", root);
        let start_time = Instant::now();
        let mut result = CrawlResult::default();

        let mut tier = Tier::Directory;
        let mut frontier = vec![root.clone()];

        while tier.is_directory_listing() {
            let mut next = Vec::new();
            for url in &frontier {
                if let Visit::Children(children) = self.visit(url, tier, &mut result.stats).await? {
                    next.extend(children);
                }
            }

            match tier {
                Tier::Directory => {
                    result.stats.regions = next.len();
                    tracing::info!("Found {} regions", next.len());
                }
                _ => {
                    result.stats.leaf_urls = next.len();
                    tracing::info!("Found {} suburb or store URLs", next.len());
                }
            }

            frontier = next;
            let Some(child) = tier.child() else { break };
            tier = child;
        }

        progress.begin(frontier.len());

        for url in &frontier {
            match self.visit(url, Tier::Leaf, &mut result.stats).await? {
                Visit::Record(record) => result.records.push(record),
                Visit::Children(stores) => {
                    result.stats.store_urls += stores.len();
                    for store in &stores {
                        if let Visit::Record(record) =
                            self.visit(store, Tier::Store, &mut result.stats).await?
                        {
                            result.records.push(record);
                        }
                    }
                }
                Visit::Skipped => {}
            }

            progress.tick();
        }

        progress.finish();

        tracing::info!(
            "Traversal completed: {} records from {} pages in {:?}",
            result.records.len(),
            result.stats.pages_visited,
            start_time.elapsed()
        );

        Ok(result)
    }

    /// Loads one URL and reads it according to its tier
    async fn visit(
        &mut self,
        url: &Url,
        tier: Tier,
        stats: &mut CrawlStats,
    ) -> Result<Visit, HarvestError> {
        if tier.is_directory_listing() {
            tracing::info!("Scraping {} page: {}", tier, url);
        } else {
            tracing::debug!("Scraping {} page: {}", tier, url);
        }

        let page = match self.renderer.navigate(url).await {
            Ok(page) => page,
            Err(source) if tier.is_fatal() => {
                return Err(HarvestError::RootUnreachable {
                    url: url.to_string(),
                    source,
                });
            }
            Err(e) => {
                tracing::warn!("Skipping {} page {}: {}", tier, e.url(), e);
                stats.navigation_failures += 1;
                return Ok(Visit::Skipped);
            }
        };

        stats.pages_visited += 1;
        self.read(&page, tier, stats)
    }

    /// Reads a loaded page; an unreadable root is as fatal as an unreachable one
    fn read(
        &self,
        page: &RenderedPage,
        tier: Tier,
        stats: &mut CrawlStats,
    ) -> Result<Visit, HarvestError> {
        if tier == Tier::Store {
            return Ok(match extract(page, &self.selectors.fields) {
                Some(record) => Visit::Record(record),
                None => {
                    stats.extraction_failures += 1;
                    Visit::Skipped
                }
            });
        }

        let document = match page.document() {
            Ok(document) => document,
            Err(source) if tier.is_fatal() => {
                return Err(HarvestError::RootUnreadable {
                    url: page.url().to_string(),
                    source,
                });
            }
            Err(e) => {
                tracing::warn!("Unreadable {} page: {}", tier, e);
                if tier == Tier::Leaf {
                    stats.extraction_failures += 1;
                }
                return Ok(Visit::Skipped);
            }
        };

        if tier.is_directory_listing() {
            return Ok(Visit::Children(expand(
                &document,
                &self.selectors.directory_link,
            )));
        }

        Ok(match classify(&document, &self.selectors.record_marker) {
            PageKind::Record => Visit::Record(extract_fields(&document, &self.selectors.fields)),
            PageKind::Listing => Visit::Children(expand(&document, &self.selectors.teaser_link)),
        })
    }
}
