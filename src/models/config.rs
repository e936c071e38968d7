//! Configuration model.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default catalog location.
pub const DEFAULT_BASE_URL: &str = "http://www.adultdvdempire.com";

/// Environment variable overriding `http.base_url`.
pub const BASE_URL_ENV: &str = "ADE_BASE_URL";

/// User agent the catalog serves the list view to.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.2; Trident/4.0; SLCC2; .NET CLR 2.0.50727; .NET CLR 3.5.30729; .NET CLR 3.0.30729; Media Center PC 6.0)";

/// Which catalog section to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    All,
    Dvd,
    Vod,
}

impl SearchType {
    /// URL path segment used by the catalog search endpoint.
    pub fn path_segment(self) -> &'static str {
        match self {
            SearchType::All => "allsearch",
            SearchType::Dvd => "dvd",
            SearchType::Vod => "vod",
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchType::All => write!(f, "all"),
            SearchType::Dvd => write!(f, "dvd"),
            SearchType::Vod => write!(f, "vod"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit debug traces for every scraped field.
    pub debug: bool,
    /// Catalog section to search.
    pub search_type: SearchType,
    /// Minimum score for a result to count as a match.
    pub good_score: i32,
    /// Add the studio to the movie's collections.
    pub studio_as_collection: bool,
    /// Prefer an earlier production year over the release date.
    pub use_production_date: bool,
    /// Pipe-separated genres to drop (case-insensitive).
    pub ignore_genres: String,
    /// HTTP settings.
    pub http: HttpConfig,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Catalog base URL.
    pub base_url: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            search_type: SearchType::All,
            good_score: 80,
            studio_as_collection: false,
            use_production_date: false,
            ignore_genres: String::new(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: 30,
        }
    }
}

impl Config {
    /// Effective good-score threshold, never below 1.
    pub fn good_score(&self) -> i32 {
        self.good_score.max(1)
    }

    /// Ignored genres, lowercased, empty entries removed.
    pub fn ignored_genres(&self) -> Vec<String> {
        self.ignore_genres
            .split('|')
            .map(|g| g.trim().to_lowercase())
            .filter(|g| !g.is_empty())
            .collect()
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.http.base_url.trim().is_empty() {
            return Err(Error::InvalidConfig("http.base_url is empty".to_string()));
        }
        if !self.http.base_url.starts_with("http://") && !self.http.base_url.starts_with("https://") {
            return Err(Error::InvalidConfig(format!(
                "http.base_url must be an http(s) URL: {}",
                self.http.base_url
            )));
        }
        if self.http.timeout == 0 {
            return Err(Error::InvalidConfig("http.timeout must be positive".to_string()));
        }
        Ok(())
    }

    /// Apply a base URL override, ignoring blank values.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.http.base_url = url;
        }
        self
    }

    /// Apply overrides from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ade_agent")
}

/// Default location of the config file, honoring `ADE_AGENT_CONFIG`.
pub fn default_config_path() -> PathBuf {
    std::env::var("ADE_AGENT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_config_path().join("config.toml"))
}

/// Where the effective configuration came from.
#[derive(Debug)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No file at this path; defaults used.
    Missing(PathBuf),
    /// The file could not be loaded; defaults used.
    Invalid(PathBuf, Error),
}

impl ConfigSource {
    /// Path of the config file that was looked up.
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::File(path)
            | ConfigSource::Missing(path)
            | ConfigSource::Invalid(path, _) => path,
        }
    }
}

/// Load configuration from a specific file, then apply environment overrides.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config.with_env_overrides())
}

/// Load configuration from file.
///
/// Falls back to defaults when the file is missing or unreadable. The source
/// is returned so the caller can report a broken file once logging is up.
pub fn load_config(path: Option<&Path>) -> (Config, ConfigSource) {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    if !config_path.exists() {
        return (
            Config::default().with_env_overrides(),
            ConfigSource::Missing(config_path),
        );
    }

    match load_config_from(&config_path) {
        Ok(config) => (config, ConfigSource::File(config_path)),
        Err(e) => (
            Config::default().with_env_overrides(),
            ConfigSource::Invalid(config_path, e),
        ),
    }
}
