//! Directory-Harvest: a store directory scraper
//!
//! This crate walks a multi-level store directory website (directory → region
//! → suburb-or-store pages), extracts one location record per store page and
//! writes the collected records to a CSV file.

pub mod config;
pub mod crawler;
pub mod model;
pub mod output;
pub mod renderer;

use thiserror::Error;

/// Main error type for Directory-Harvest operations
///
/// Only faults that abort the run surface here. Per-URL faults are logged and
/// counted by the driver instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Root directory {url} is unreachable: {source}")]
    RootUnreachable {
        url: String,
        source: renderer::NavigationError,
    },

    #[error("Root directory {url} could not be read: {source}")]
    RootUnreadable {
        url: String,
        source: renderer::PageError,
    },

    #[error("Output error: {0}")]
    Sink(#[from] output::SinkError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector for {field}: {selector}")]
    InvalidSelector { field: String, selector: String },
}

/// Result type alias for Directory-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{harvest, Driver};
pub use model::{CrawlResult, CrawlStats, PageKind, Record};
pub use renderer::{HttpRenderer, PageRenderer, RenderedPage};
