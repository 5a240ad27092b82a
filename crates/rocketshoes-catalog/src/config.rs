//! # Catalog Configuration
//!
//! Where the catalog lives and how long to wait for it.

use std::time::Duration;
use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Default catalog address (the storefront's local fake API).
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Catalog client configuration.
///
/// ## Example
/// ```rust
/// use rocketshoes_catalog::CatalogConfig;
///
/// let config = CatalogConfig::new("http://localhost:3333/api").unwrap()
///     .timeout_secs(5);
///
/// assert_eq!(config.base_url().as_str(), "http://localhost:3333/api/");
/// assert_eq!(config.timeout().as_secs(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    base_url: Url,
    timeout_secs: u64,
}

impl CatalogConfig {
    /// Parses the base URL. A trailing slash is added so relative endpoint
    /// paths resolve beneath it instead of replacing its last segment.
    pub fn new(base_url: &str) -> CatalogResult<Self> {
        let mut url = Url::parse(base_url.trim())?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidBaseUrl(base_url.to_string()));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(CatalogConfig {
            base_url: url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Sets the request timeout.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolves an endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> CatalogResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_resolution() {
        let config = CatalogConfig::new("http://localhost:3333").unwrap();
        assert_eq!(
            config.endpoint("stock/1").unwrap().as_str(),
            "http://localhost:3333/stock/1"
        );

        let nested = CatalogConfig::new("https://shop.example.com/api").unwrap();
        assert_eq!(
            nested.endpoint("/products/7").unwrap().as_str(),
            "https://shop.example.com/api/products/7"
        );
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(CatalogConfig::new("not a url").is_err());
        assert!(CatalogConfig::new("mailto:shop@example.com").is_err());
        assert!(CatalogConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_default_url() {
        let config = CatalogConfig::new(DEFAULT_API_URL).unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:3333/");
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
