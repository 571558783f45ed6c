use crate::{
    logging::LogConfig,
    scraper::{ProviderConfig, ResolverConfig},
};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `AYIAH_PROVIDER__API_KEY`
pub const ENV_PREFIX: &str = "AYIAH";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub resolver: ResolverConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load defaults, then the config file, then environment overrides
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        match path {
            Some(path) => builder = builder.add_source(File::from(path).required(true)),
            None => {
                if let Some(default) = Self::default_path() {
                    builder = builder.add_source(File::from(default).required(false));
                }
            }
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Default config file location (`<config dir>/ayiah/poster.toml`)
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ayiah").join("poster.toml"))
    }
}
