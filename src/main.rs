//! Directory-Harvest main entry point
//!
//! This is the command-line interface for the Directory-Harvest store scraper.

use anyhow::Context;
use clap::Parser;
use directory_harvest::config::{load_config_with_hash, Config};
use directory_harvest::crawler::run_harvest;
use directory_harvest::output::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Directory-Harvest: a store directory scraper
///
/// Walks a store directory from its root page, extracts one record per store
/// page and writes all records to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "directory-harvest")]
#[command(version)]
#[command(about = "A store directory scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Write the CSV here instead of the configured csv-path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Start from this directory page instead of the configured root-url
    #[arg(long, value_name = "URL")]
    root: Option<String>,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = match load_config_with_hash(&cli.config) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e).context("invalid configuration");
        }
    };
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    apply_overrides(&mut config, &cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_harvest(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("directory_harvest=info,warn"),
            1 => EnvFilter::new("directory_harvest=debug,info"),
            2 => EnvFilter::new("directory_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies command-line overrides on top of the loaded configuration
fn apply_overrides(config: &mut Config, cli: &Cli) -> anyhow::Result<()> {
    if let Some(output) = &cli.output {
        config.output.csv_path = output.display().to_string();
    }

    if let Some(root) = &cli.root {
        url::Url::parse(root).with_context(|| format!("invalid --root URL '{}'", root))?;
        config.crawler.root_url = root.clone();
    }

    Ok(())
}

/// Handles the --dry-run mode: shows the validated configuration
fn handle_dry_run(config: &Config) {
    println!("=== Directory-Harvest Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Root URL: {}", config.crawler.root_url);
    println!("  Navigation timeout: {}ms", config.crawler.navigation_timeout);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    let selectors = &config.selectors;
    println!("\nSelectors:");
    println!("  Directory link: {}", selectors.directory_link);
    println!("  Teaser link: {}", selectors.teaser_link);
    println!("  Record marker: {}", selectors.record_marker);
    println!("  Name: {}", selectors.name);
    println!("  Street: {}", selectors.street);
    println!("  Suburb: {}", selectors.suburb);
    println!("  State: {}", selectors.state);
    println!("  Postcode: {}", selectors.postcode);
    println!("  Latitude: {}", selectors.latitude);
    println!("  Longitude: {}", selectors.longitude);

    println!("\n✓ Configuration is valid");
}

/// Handles the main harvest operation
async fn handle_harvest(config: &Config) -> anyhow::Result<()> {
    match run_harvest(config).await {
        Ok(result) => {
            print_summary(&result, &config.output.csv_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error during scraping: {}", e);
            Err(e).context("harvest aborted")
        }
    }
}
