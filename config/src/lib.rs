//! Configuration loading for the emotion analyzer.
//!
//! Settings come from `~/.emotion-analyzer/config.toml` (or the file named by
//! `EMOTION_ANALYZER_CONFIG`), with environment variables taking precedence:
//!
//! ```toml
//! [service]
//! endpoint = "http://localhost:8000/analyze"
//!
//! [app]
//! theme = "dark"
//! ascii_only = false
//! reduced_motion = false
//! ```
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `EMOTION_ANALYZER_ENDPOINT` | `service.endpoint` |
//! | `EMOTION_ANALYZER_THEME` | `app.theme` |
//!
//! A missing file is not an error; every field has a default.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use emotion_client::DEFAULT_ANALYZE_URL;
use emotion_types::{ThemeMode, UiOptions};

pub const CONFIG_PATH_ENV: &str = "EMOTION_ANALYZER_CONFIG";
pub const ENDPOINT_ENV: &str = "EMOTION_ANALYZER_ENDPOINT";
pub const THEME_ENV: &str = "EMOTION_ANALYZER_THEME";

const DATA_DIR_NAME: &str = ".emotion-analyzer";

#[derive(Debug, Default, Deserialize)]
pub struct EmotionConfig {
    pub service: Option<ServiceConfig>,
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServiceConfig {
    /// Full URL of the analysis endpoint, path included.
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// `light` or `dark`.
    pub theme: Option<String>,
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Disable spinner animation.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid service endpoint '{value}': {source}")]
    InvalidEndpoint {
        value: String,
        source: url::ParseError,
    },
    #[error("service endpoint '{value}' must use http or https")]
    UnsupportedScheme { value: String },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::InvalidEndpoint { .. } | ConfigError::UnsupportedScheme { .. } => None,
        }
    }
}

impl EmotionConfig {
    /// Load the config from [`EmotionConfig::path`]. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Config file location: `$EMOTION_ANALYZER_CONFIG`, else `~/.emotion-analyzer/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        env::var_os(CONFIG_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| data_dir().map(|dir| dir.join("config.toml")))
    }

    /// Endpoint to analyze against, honoring `EMOTION_ANALYZER_ENDPOINT`.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let from_env = env::var(ENDPOINT_ENV).ok();
        resolve_endpoint(from_env.as_deref(), self.file_endpoint())
    }

    /// Presentation options, honoring `EMOTION_ANALYZER_THEME`.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let from_env = env::var(THEME_ENV).ok();
        resolve_ui_options(self.app.as_ref(), from_env.as_deref())
    }

    fn file_endpoint(&self) -> Option<&str> {
        self.service
            .as_ref()
            .and_then(|service| service.endpoint.as_deref())
    }
}

/// `~/.emotion-analyzer`, home of the config file and logs.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

/// First non-blank of `env_value`, `file_value`, then [`DEFAULT_ANALYZE_URL`].
pub fn resolve_endpoint(
    env_value: Option<&str>,
    file_value: Option<&str>,
) -> Result<Url, ConfigError> {
    let raw = [env_value, file_value]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_ANALYZE_URL);

    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint {
        value: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme {
            value: raw.to_string(),
        }),
    }
}

#[must_use]
pub fn resolve_ui_options(app: Option<&AppConfig>, env_theme: Option<&str>) -> UiOptions {
    let file_theme = app.and_then(|app| app.theme.as_deref());
    let theme = [env_theme, file_theme]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .map(|raw| {
            ThemeMode::parse(raw).unwrap_or_else(|err| {
                tracing::warn!("{err}; using light theme");
                ThemeMode::Light
            })
        })
        .unwrap_or_default();

    UiOptions {
        theme,
        ascii_only: app.is_some_and(|app| app.ascii_only),
        reduced_motion: app.is_some_and(|app| app.reduced_motion),
    }
}
