//! # Storefront Configuration
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ROCKETSHOES_*`)
//! 2. Config file (TOML, path in `ROCKETSHOES_CONFIG`)
//! 3. Defaults (this file)
//!
//! ```toml
//! api_url = "https://api.rocketshoes.example"
//! request_timeout_secs = 5
//! data_dir = "/var/lib/rocketshoes"
//! locale = "pt-BR"
//! ```

use std::path::{Path, PathBuf};

use rocketshoes_catalog::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use rocketshoes_catalog::{CatalogConfig, CatalogResult};
use rocketshoes_core::Locale;
use rocketshoes_store::{FileStore, StoreResult};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub const ENV_CONFIG_PATH: &str = "ROCKETSHOES_CONFIG";
pub const ENV_API_URL: &str = "ROCKETSHOES_API_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "ROCKETSHOES_REQUEST_TIMEOUT_SECS";
pub const ENV_DATA_DIR: &str = "ROCKETSHOES_DATA_DIR";
pub const ENV_LOCALE: &str = "ROCKETSHOES_LOCALE";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    FileParse(#[from] toml::de::Error),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Catalog API base URL
    pub api_url: String,

    /// Catalog request timeout in seconds
    pub request_timeout_secs: u64,

    /// Where the cart is persisted; `None` means the platform data dir
    pub data_dir: Option<PathBuf>,

    /// Language for notices and prices
    pub locale: Locale,
}

/// Shape of the TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_url: Option<String>,
    request_timeout_secs: Option<u64>,
    data_dir: Option<PathBuf>,
    locale: Option<Locale>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: None,
            locale: Locale::default(),
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary variable source.
    pub fn load_from<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = var(ENV_CONFIG_PATH) {
            config.apply_file(Path::new(&path))?;
        }

        config.apply_env_overrides(&var)?;
        config.validate()?;

        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        info!(?path, "Loading storefront config from file");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&contents)?;

        if let Some(url) = file.api_url {
            self.api_url = url;
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        if let Some(dir) = file.data_dir {
            self.data_dir = Some(dir);
        }
        if let Some(locale) = file.locale {
            self.locale = locale;
        }

        Ok(())
    }

    fn apply_env_overrides<F>(&mut self, var: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var(ENV_API_URL) {
            debug!(url = %url, "Overriding API URL from environment");
            self.api_url = url;
        }

        if let Some(secs) = var(ENV_REQUEST_TIMEOUT_SECS) {
            self.request_timeout_secs = secs
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_REQUEST_TIMEOUT_SECS.to_string()))?;
        }

        if let Some(dir) = var(ENV_DATA_DIR) {
            self.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(locale) = var(ENV_LOCALE) {
            self.locale = locale
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_LOCALE.to_string()))?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("request_timeout_secs".to_string()));
        }

        self.catalog_config()
            .map_err(|_| ConfigError::InvalidValue("api_url".to_string()))?;

        Ok(())
    }

    /// Catalog client settings derived from this configuration.
    pub fn catalog_config(&self) -> CatalogResult<CatalogConfig> {
        Ok(CatalogConfig::new(&self.api_url)?.timeout_secs(self.request_timeout_secs))
    }

    /// Opens the cart's file store.
    pub fn open_store(&self) -> StoreResult<FileStore> {
        match &self.data_dir {
            Some(dir) => FileStore::open(dir),
            None => FileStore::open_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::load_from(vars(&[])).unwrap();

        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.api_url, "http://localhost:3333");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.locale, Locale::En);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = StorefrontConfig::load_from(vars(&[
            (ENV_API_URL, "https://api.example.com"),
            (ENV_REQUEST_TIMEOUT_SECS, "3"),
            (ENV_DATA_DIR, "/tmp/rocketshoes"),
            (ENV_LOCALE, "pt-BR"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/rocketshoes")));
        assert_eq!(config.locale, Locale::PtBr);
    }

    #[test]
    fn test_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            api_url = "https://file.example.com"
            request_timeout_secs = 4
            locale = "pt-BR"
            "#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = StorefrontConfig::load_from(vars(&[
            (ENV_CONFIG_PATH, path.as_str()),
            (ENV_REQUEST_TIMEOUT_SECS, "7"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://file.example.com");
        assert_eq!(config.request_timeout_secs, 7);
        assert_eq!(config.locale, Locale::PtBr);
    }

    #[test]
    fn test_file_locale_accepts_short_spelling() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "locale = \"pt\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let from_file =
            StorefrontConfig::load_from(vars(&[(ENV_CONFIG_PATH, path.as_str())])).unwrap();
        let from_env = StorefrontConfig::load_from(vars(&[(ENV_LOCALE, "pt")])).unwrap();

        assert_eq!(from_file.locale, Locale::PtBr);
        assert_eq!(from_env.locale, from_file.locale);
    }

    #[test]
    fn test_invalid_values() {
        let err = StorefrontConfig::load_from(vars(&[(ENV_REQUEST_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref k) if k == ENV_REQUEST_TIMEOUT_SECS));

        let err = StorefrontConfig::load_from(vars(&[(ENV_LOCALE, "fr")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref k) if k == ENV_LOCALE));

        let err = StorefrontConfig::load_from(vars(&[(ENV_API_URL, "ftp://x")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref k) if k == "api_url"));

        let err = StorefrontConfig::load_from(vars(&[(ENV_REQUEST_TIMEOUT_SECS, "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref k) if k == "request_timeout_secs"));
    }

    #[test]
    fn test_missing_or_bad_file() {
        let err = StorefrontConfig::load_from(vars(&[(ENV_CONFIG_PATH, "/nonexistent/rs.toml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "colour = \"blue\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let err = StorefrontConfig::load_from(vars(&[(ENV_CONFIG_PATH, path.as_str())]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileParse(_)));
    }

    #[test]
    fn test_catalog_config() {
        let config = StorefrontConfig {
            request_timeout_secs: 2,
            ..StorefrontConfig::default()
        };
        let catalog = config.catalog_config().unwrap();

        assert_eq!(catalog.base_url().as_str(), "http://localhost:3333/");
        assert_eq!(catalog.timeout().as_secs(), 2);
    }

    #[test]
    fn test_open_store_in_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            data_dir: Some(dir.path().join("cart")),
            ..StorefrontConfig::default()
        };

        let store = config.open_store().unwrap();
        assert_eq!(store.data_dir(), dir.path().join("cart"));
    }
}
