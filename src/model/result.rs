use crate::model::Record;

/// Counters collected while the driver walks the directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Region URLs found on the root directory page
    pub regions: usize,
    /// Suburb-or-store URLs gathered from all regions
    pub leaf_urls: usize,
    /// Store URLs reached through suburb listing pages
    pub store_urls: usize,
    /// Successful navigations
    pub pages_visited: usize,
    /// Navigations that failed and were skipped
    pub navigation_failures: usize,
    /// Record pages whose document could not be read
    pub extraction_failures: usize,
}

/// Ordered records of a run, in leaf-visit order
#[derive(Debug, Clone, Default)]
pub struct CrawlResult {
    pub records: Vec<Record>,
    pub stats: CrawlStats,
}

impl CrawlResult {
    /// Number of records scraped
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
