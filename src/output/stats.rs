//! End-of-run summary

use crate::model::CrawlResult;

/// Prints a summary of a finished harvest to stdout
pub fn print_summary(result: &CrawlResult, output_path: &str) {
    let stats = &result.stats;

    println!("=== Harvest Summary ===\n");

    println!("Traversal:");
    println!("  Regions: {}", stats.regions);
    println!("  Suburb or store URLs: {}", stats.leaf_urls);
    println!("  Store URLs from suburb listings: {}", stats.store_urls);
    println!("  Pages visited: {}", stats.pages_visited);
    println!();

    if stats.navigation_failures > 0 || stats.extraction_failures > 0 {
        println!("Skipped:");
        println!("  Failed navigations: {}", stats.navigation_failures);
        println!("  Unreadable store pages: {}", stats.extraction_failures);
        println!();
    }

    let attempted = stats.pages_visited + stats.navigation_failures;
    let success_rate = if attempted > 0 {
        (stats.pages_visited as f64 / attempted as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Total stores scraped: {} ({:.1}% of {} navigations succeeded)",
        result.len(),
        success_rate,
        attempted
    );
    println!("Output: {}", output_path);
}
