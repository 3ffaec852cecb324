//! Page rendering seam
//!
//! The crawler only needs two things from a rendering session: navigate to a
//! URL and get the resulting document back, then run CSS queries against it.
//! [`PageRenderer`] is that contract; [`HttpRenderer`] is the production
//! implementation (static fetch with reqwest, parse with scraper).

mod document;
mod http;

pub use document::{Document, PageError, RenderedPage};
pub use http::{build_http_client, HttpRenderer};

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Errors raised while loading a single URL
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Navigation to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Expected HTML from {url}, got {content_type}")]
    ContentMismatch { url: String, content_type: String },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl NavigationError {
    /// The URL whose navigation failed
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url, .. }
            | Self::Status { url, .. }
            | Self::ContentMismatch { url, .. }
            | Self::Transport { url, .. } => url,
        }
    }
}

/// A rendering session
///
/// Navigations on one session are strictly sequential, which `&mut self`
/// enforces.
#[async_trait]
pub trait PageRenderer: Send {
    /// Loads `url` and returns the rendered page once loading has finished
    async fn navigate(&mut self, url: &Url) -> Result<RenderedPage, NavigationError>;
}
