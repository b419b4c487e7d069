//! Catalog sources.
//!
//! [`CatalogSource`] is the seam between acquisition and the tree pipeline:
//! the pipeline only ever sees a loaded [`Catalog`], so tests and offline
//! runs use [`FileCatalogSource`] while production uses
//! [`HttpCatalogSource`]. The HTTP fetch is attempt-once with a
//! caller-configured timeout; any transport failure aborts the load.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use acs_model::Catalog;

use crate::decode::decode_catalog;
use crate::error::CatalogError;

/// The ACS 5-year data-profile variable catalog.
pub const DEFAULT_CATALOG_URL: &str =
    "https://api.census.gov/data/2023/acs/acs5/profile/variables.json";

/// Default fetch timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that can produce a catalog snapshot.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// Explicit configuration for the HTTP source. Credentials and timeouts are
/// constructor inputs, never ambient environment reads.
#[derive(Debug, Clone)]
pub struct HttpCatalogConfig {
    pub url: String,
    pub timeout: Duration,
    /// Optional Census API key, sent as a `key=` query parameter.
    pub api_key: Option<String>,
}

impl Default for HttpCatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            api_key: None,
        }
    }
}

/// Blocking HTTP source for the live catalog endpoint.
pub struct HttpCatalogSource {
    config: HttpCatalogConfig,
    client: Client,
}

impl HttpCatalogSource {
    pub fn new(config: HttpCatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CatalogError::Client)?;
        Ok(Self { config, client })
    }

    /// The request URL with the API key appended when configured.
    fn request_url(&self) -> String {
        match &self.config.api_key {
            Some(key) if !key.is_empty() => {
                let separator = if self.config.url.contains('?') { '&' } else { '?' };
                format!("{}{}key={}", self.config.url, separator, key)
            }
            _ => self.config.url.clone(),
        }
    }
}

impl CatalogSource for HttpCatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError> {
        debug!(url = %self.config.url, "fetching catalog");
        let response = self
            .client
            .get(self.request_url())
            .send()
            .map_err(|source| CatalogError::Fetch {
                url: self.config.url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(CatalogError::Status {
                url: self.config.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let text = response.text().map_err(|source| CatalogError::Fetch {
            url: self.config.url.clone(),
            source,
        })?;
        let catalog = decode_catalog(&text)?;
        info!(url = %self.config.url, variables = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}

/// Local-file source, used for fixtures and offline runs.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|source| CatalogError::io(&self.path, source))?;
        let catalog = decode_catalog(&text)?;
        info!(path = %self.path.display(), variables = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn request_url_appends_key_when_configured() {
        let source = HttpCatalogSource::new(HttpCatalogConfig {
            url: "https://example.test/variables.json".to_string(),
            api_key: Some("abc123".to_string()),
            ..HttpCatalogConfig::default()
        })
        .expect("build source");
        assert_eq!(
            source.request_url(),
            "https://example.test/variables.json?key=abc123"
        );

        let source = HttpCatalogSource::new(HttpCatalogConfig {
            url: "https://example.test/variables.json?v=1".to_string(),
            api_key: Some("abc123".to_string()),
            ..HttpCatalogConfig::default()
        })
        .expect("build source");
        assert_eq!(
            source.request_url(),
            "https://example.test/variables.json?v=1&key=abc123"
        );
    }

    #[test]
    fn request_url_without_key_is_untouched() {
        let source = HttpCatalogSource::new(HttpCatalogConfig::default()).expect("build source");
        assert_eq!(source.request_url(), DEFAULT_CATALOG_URL);
    }

    #[test]
    fn file_source_loads_fixture() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"variables": {{"DP02_0001E": {{"label": "Estimate!!X", "group": "DP02"}}}}}}"#
        )
        .expect("write fixture");

        let catalog = FileCatalogSource::new(file.path())
            .load()
            .expect("load fixture");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn file_source_missing_path_is_io_error() {
        let result = FileCatalogSource::new("/nonexistent/variables.json").load();
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
