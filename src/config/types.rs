use serde::Deserialize;

/// Main configuration structure for Directory-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Top-level directory page the traversal starts from
    #[serde(rename = "root-url")]
    pub root_url: String,

    /// Upper bound for a single navigation (milliseconds)
    #[serde(rename = "navigation-timeout", default = "default_navigation_timeout")]
    pub navigation_timeout: u64,
}

fn default_navigation_timeout() -> u64 {
    30_000
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the CSV file written at the end of a run
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

/// CSS selectors locating the directory's links and record fields
///
/// Every entry defaults to the markup used by the ALDI Australia store
/// directory, so the whole `[selectors]` table is optional.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct SelectorConfig {
    /// Links on directory and region pages
    pub directory_link: String,
    /// Store links on suburb listing pages
    pub teaser_link: String,
    /// Element present only on a single-store page
    pub record_marker: String,
    pub name: String,
    pub street: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    /// Element whose `content` attribute holds the latitude
    pub latitude: String,
    /// Element whose `content` attribute holds the longitude
    pub longitude: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            directory_link: ".Directory-listLink".to_string(),
            teaser_link: ".Teaser-titleLink".to_string(),
            record_marker: "h1.Heading.Hero-heading#location-name".to_string(),
            name: ".Heading.Hero-heading#location-name".to_string(),
            street: ".Address-line .Address-field.Address-line1".to_string(),
            suburb: ".Address-line .Address-field.Address-city".to_string(),
            state: ".Address-line .Address-field.Address-region".to_string(),
            postcode: ".Address-line .Address-field.Address-postalCode".to_string(),
            latitude: r#"meta[itemprop="latitude"]"#.to_string(),
            longitude: r#"meta[itemprop="longitude"]"#.to_string(),
        }
    }
}
