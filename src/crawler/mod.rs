//! Crawler module for directory traversal and record extraction
//!
//! This module contains the core harvesting logic:
//! - Page classification (store page vs listing page)
//! - Listing expansion into child URLs
//! - Record extraction from store pages
//! - Tier-by-tier traversal coordination

mod classifier;
mod driver;
mod expander;
mod extractor;
mod selectors;
mod tier;

pub use classifier::classify;
pub use driver::Driver;
pub use expander::expand;
pub use extractor::{extract, extract_fields};
pub use selectors::{FieldSelectors, SiteSelectors};
pub use tier::Tier;

use crate::config::Config;
use crate::output::{CsvSink, LogProgress, Progress, Sink};
use crate::renderer::{HttpRenderer, PageRenderer};
use crate::model::CrawlResult;
use crate::HarvestError;
use url::Url;

/// Runs a complete harvest against the given collaborators
///
/// This is the main entry point. It will:
/// 1. Compile the configured selectors
/// 2. Walk the directory from the configured root
/// 3. Hand the records to the sink
///
/// The sink is only invoked after a completed traversal. A fatal fault
/// returns before anything is written.
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Harvest completed and the records were written
/// * `Err(HarvestError)` - Root unreachable or unreadable, or the sink failed
pub async fn harvest<R, S, P>(
    config: &Config,
    renderer: R,
    sink: &mut S,
    progress: &mut P,
) -> Result<CrawlResult, HarvestError>
where
    R: PageRenderer,
    S: Sink + ?Sized,
    P: Progress,
{
    let root = Url::parse(&config.crawler.root_url)?;
    let selectors = SiteSelectors::compile(&config.selectors)?;

    let mut driver = Driver::new(renderer, selectors);
    let result = driver.run(&root, progress).await?;

    tracing::info!("Total stores scraped: {}", result.len());
    for record in &result.records {
        tracing::debug!("{:?}", record);
    }

    let written = sink.write(&result.records)?;
    tracing::info!("Finished writing {} rows", written);

    Ok(result)
}

/// Runs a harvest with the production collaborators
///
/// HTTP rendering, CSV output at `config.output.csv_path` and progress
/// reported through tracing.
///
/// # Example
///
/// ```no_run
/// use directory_harvest::config::load_config;
/// use directory_harvest::crawler::run_harvest;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let result = run_harvest(&config).await?;
/// println!("{} stores", result.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_harvest(config: &Config) -> Result<CrawlResult, HarvestError> {
    let renderer = HttpRenderer::from_config(config)?;
    let mut sink = CsvSink::new(&config.output.csv_path);
    let mut progress = LogProgress::default();
    harvest(config, renderer, &mut sink, &mut progress).await
}
