//! Application configuration.
//!
//! # Responsibility
//! - Provide defaults for storage location, logging and HTTP lookups.
//! - Load overrides from an optional TOML file.
//!
//! # Invariants
//! - Every field has a default; a config file may set any subset.
//! - Unknown keys in the config file are rejected.

use crate::logging::default_log_level;
use crate::lookup::wikidata::{WIKIDATA_ENTITY_URL, WIKIPEDIA_API_URL};
use crate::render::chart::DEFAULT_TITLE;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR_NAME: &str = "lifespan";
const DATA_FILE_NAME: &str = "timeline_data.json";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// JSON record store location.
    pub data_file: PathBuf,
    /// Absolute directory for rolling log files; logging is off when unset.
    pub log_dir: Option<PathBuf>,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    pub http_timeout_secs: u64,
    /// Sent with every knowledge-base request.
    pub user_agent: String,
    /// MediaWiki API used for title search and page properties.
    pub wikipedia_api_url: String,
    /// Base URL serving `<id>.json` Wikidata entity documents.
    pub wikidata_entity_url: String,
    pub chart_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_dir: None,
            log_level: default_log_level().to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: format!("lifespan/{}", env!("CARGO_PKG_VERSION")),
            wikipedia_api_url: WIKIPEDIA_API_URL.to_string(),
            wikidata_entity_url: WIKIDATA_ENTITY_URL.to_string(),
            chart_title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `path` when given, else returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|source| ConfigError::Parse { path: None, source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_file cannot be empty".to_string()));
        }
        if self.http_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "http_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("user_agent cannot be empty".to_string()));
        }
        for (key, url) in [
            ("wikipedia_api_url", &self.wikipedia_api_url),
            ("wikidata_entity_url", &self.wikidata_entity_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{key} must be an http(s) URL, got `{url}`"
                )));
            }
        }
        Ok(())
    }
}

/// Default store path: platform data dir, else the working directory.
pub fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}

/// Configuration load/validation error.
#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse {
                path: Some(path),
                source,
            } => write!(f, "invalid config `{}`: {source}", path.display()),
            Self::Parse { path: None, source } => write!(f, "invalid config: {source}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError};
    use std::path::PathBuf;

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let config = AppConfig::from_toml_str(
            r#"
data_file = "/tmp/people.json"
http_timeout_secs = 3
"#,
        )
        .expect("partial config should parse");
        assert_eq!(config.data_file, PathBuf::from("/tmp/people.json"));
        assert_eq!(config.http_timeout_secs, 3);
        assert_eq!(config.log_dir, None);
        assert!(config.user_agent.starts_with("lifespan/"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = AppConfig::from_toml_str("http_timeout_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn endpoints_and_title_default_to_public_services() {
        let config = AppConfig::default();
        assert_eq!(config.wikipedia_api_url, "https://en.wikipedia.org/w/api.php");
        assert!(config.wikidata_entity_url.starts_with("https://www.wikidata.org/"));
        assert_eq!(config.chart_title, "Life Timeline of Famous People");
    }

    #[test]
    fn endpoints_can_point_at_a_mirror() {
        let config = AppConfig::from_toml_str(
            r#"
wikipedia_api_url = "http://localhost:8080/w/api.php"
wikidata_entity_url = "http://localhost:8080/entity"
chart_title = "Composers"
"#,
        )
        .expect("endpoint overrides should parse");
        assert_eq!(config.wikipedia_api_url, "http://localhost:8080/w/api.php");
        assert_eq!(config.wikidata_entity_url, "http://localhost:8080/entity");
        assert_eq!(config.chart_title, "Composers");
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let err = AppConfig::from_toml_str(r#"wikidata_entity_url = "ftp://mirror""#).unwrap_err();
        assert!(err.to_string().contains("wikidata_entity_url"));
    }
}
