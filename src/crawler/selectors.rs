//! Compiled CSS selectors for one directory site

use crate::config::SelectorConfig;
use crate::ConfigError;
use scraper::Selector;

/// Selectors for the seven record fields
#[derive(Debug, Clone)]
pub struct FieldSelectors {
    pub name: Selector,
    pub street: Selector,
    pub suburb: Selector,
    pub state: Selector,
    pub postcode: Selector,
    pub latitude: Selector,
    pub longitude: Selector,
}

/// Every selector the crawler needs, compiled once per run
#[derive(Debug, Clone)]
pub struct SiteSelectors {
    pub directory_link: Selector,
    pub teaser_link: Selector,
    pub record_marker: Selector,
    pub fields: FieldSelectors,
}

impl SiteSelectors {
    /// Compiles the configured selector strings
    ///
    /// Fails on the first selector that does not parse, naming its config key.
    pub fn compile(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            directory_link: parse("directory-link", &config.directory_link)?,
            teaser_link: parse("teaser-link", &config.teaser_link)?,
            record_marker: parse("record-marker", &config.record_marker)?,
            fields: FieldSelectors {
                name: parse("name", &config.name)?,
                street: parse("street", &config.street)?,
                suburb: parse("suburb", &config.suburb)?,
                state: parse("state", &config.state)?,
                postcode: parse("postcode", &config.postcode)?,
                latitude: parse("latitude", &config.latitude)?,
                longitude: parse("longitude", &config.longitude)?,
            },
        })
    }
}

#[cfg(test)]
impl SiteSelectors {
    /// Selectors for the built-in ALDI directory markup
    pub(crate) fn builtin() -> Self {
        Self::compile(&SelectorConfig::default()).unwrap()
    }
}

fn parse(field: &str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|_| ConfigError::InvalidSelector {
        field: field.to_string(),
        selector: selector.to_string(),
    })
}
