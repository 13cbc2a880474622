//! Configuration system: TOML file + env var overrides + smart defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::errors::{LqoError, Result};

/// Local-development backend address used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:18000";

/// Full dashboard configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub paths: PathsConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base address every endpoint path is appended to.
    pub base_url: String,
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
}

/// Filesystem locations used by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub config_file: PathBuf,
    /// Key-value file holding persisted client state (the active locale).
    pub state_file: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_timeout_ms: 5_000,
            read_timeout_ms: 30_000,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let home_dir = env::var_os("HOME").map_or_else(
            || {
                tracing::warn!("HOME not set, falling back to /tmp for dashboard paths");
                PathBuf::from("/tmp")
            },
            PathBuf::from,
        );
        Self {
            config_file: home_dir.join(".config").join("lqo").join("config.toml"),
            state_file: home_dir
                .join(".local")
                .join("share")
                .join("lqo")
                .join("state.json"),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    #[must_use]
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

impl Config {
    /// Default configuration path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathsConfig::default().config_file
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from default path; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| LqoError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(LqoError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.paths.config_file = path_buf;
        cfg.apply_env_overrides_from(env_var)?;
        cfg.normalize();
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_env_overrides_from<F>(&mut self, mut lookup: F) -> Result<()>
    where
        F: FnMut(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("LQO_API_BASE_URL") {
            self.api.base_url = raw.trim().to_string();
        }

        if let Some(raw) = lookup("LQO_API_CONNECT_TIMEOUT_MS") {
            self.api.connect_timeout_ms = parse_env_u64("LQO_API_CONNECT_TIMEOUT_MS", &raw)?;
        }

        if let Some(raw) = lookup("LQO_API_READ_TIMEOUT_MS") {
            self.api.read_timeout_ms = parse_env_u64("LQO_API_READ_TIMEOUT_MS", &raw)?;
        }

        if let Some(raw) = lookup("LQO_STATE_FILE") {
            self.paths.state_file = PathBuf::from(raw);
        }

        Ok(())
    }

    /// Strip trailing slashes so endpoint paths join cleanly.
    fn normalize(&mut self) {
        while self.api.base_url.len() > 1 && self.api.base_url.ends_with('/') {
            self.api.base_url.pop();
        }
    }

    fn validate(&self) -> Result<()> {
        let base = &self.api.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(LqoError::InvalidConfig {
                details: format!("api.base_url must start with http:// or https://, got {base:?}"),
            });
        }

        if self.api.connect_timeout_ms == 0 || self.api.read_timeout_ms == 0 {
            return Err(LqoError::InvalidConfig {
                details: "api.connect_timeout_ms and api.read_timeout_ms must be > 0".to_string(),
            });
        }

        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}

fn parse_env_u64(name: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|error| LqoError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: {error}"),
        })
}
