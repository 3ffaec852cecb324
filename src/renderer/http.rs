//! HTTP renderer implementation
//!
//! Fetches a page with reqwest and hands the markup back as a
//! [`RenderedPage`]. The directory serves its links and address fields as
//! static markup, so no script execution is needed.
//!
//! Error classification:
//!
//! | Condition | Result |
//! |-----------|--------|
//! | Non-2xx status | `Status` |
//! | Non-HTML Content-Type | `ContentMismatch` |
//! | Navigation exceeds the configured timeout | `Timeout` |
//! | Connection refused, TLS, body read errors | `Transport` |

use crate::config::{Config, UserAgentConfig};
use crate::renderer::{NavigationError, PageRenderer, RenderedPage};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use directory_harvest::config::UserAgentConfig;
/// use directory_harvest::renderer::build_http_client;
/// use std::time::Duration;
///
/// let config = UserAgentConfig {
///     crawler_name: "DirectoryHarvest".to_string(),
///     crawler_version: "0.1".to_string(),
///     contact_url: "https://example.com/about".to_string(),
///     contact_email: "admin@example.com".to_string(),
/// };
///
/// let client = build_http_client(&config, Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Renderer backed by a single reqwest client
pub struct HttpRenderer {
    client: Client,
    timeout: Duration,
}

impl HttpRenderer {
    pub fn new(user_agent: &UserAgentConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent, timeout)?,
            timeout,
        })
    }

    /// Builds the renderer from the `[user-agent]` and `[crawler]` tables
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            &config.user_agent,
            Duration::from_millis(config.crawler.navigation_timeout),
        )
    }

    fn classify_error(&self, url: &Url, error: reqwest::Error) -> NavigationError {
        if error.is_timeout() {
            NavigationError::Timeout {
                url: url.to_string(),
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            NavigationError::Transport {
                url: url.to_string(),
                source: error,
            }
        }
    }
}

#[async_trait]
impl PageRenderer for HttpRenderer {
    async fn navigate(&mut self, url: &Url) -> Result<RenderedPage, NavigationError> {
        tracing::debug!("Navigating to {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NavigationError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.is_empty() && !content_type.contains("html") {
            return Err(NavigationError::ContentMismatch {
                url: url.to_string(),
                content_type,
            });
        }

        let final_url = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(|e| self.classify_error(url, e))?;

        Ok(RenderedPage::new(final_url, body))
    }
}
