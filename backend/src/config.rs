//! Host settings from the environment and the dashboard configuration file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use common::config::DashboardConfig;
use common::error::ConfigError;
use thiserror::Error;

pub const HOST_VAR: &str = "EXAM_MONITOR_HOST";
pub const PORT_VAR: &str = "EXAM_MONITOR_PORT";
pub const OPEN_BROWSER_VAR: &str = "EXAM_MONITOR_OPEN_BROWSER";
pub const DASHBOARD_CONFIG_VAR: &str = "EXAM_MONITOR_DASHBOARD_CONFIG";

#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("EXAM_MONITOR_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("{name} must be true or false, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub dashboard_config: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
            dashboard_config: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the settings from `lookup`, which returns the value of a
    /// variable if it is set. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get(PORT_VAR) {
            Some(raw) => match raw.trim().parse() {
                Ok(port) => port,
                Err(_) => return Err(ServerConfigError::InvalidPort(raw)),
            },
            None => defaults.port,
        };
        let open_browser = match get(OPEN_BROWSER_VAR) {
            Some(raw) => parse_flag(OPEN_BROWSER_VAR, raw)?,
            None => defaults.open_browser,
        };

        Ok(Self {
            host: get(HOST_VAR).unwrap_or(defaults.host),
            port,
            open_browser,
            dashboard_config: get(DASHBOARD_CONFIG_VAR).map(PathBuf::from),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(name: &'static str, raw: String) -> Result<bool, ServerConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ServerConfigError::InvalidFlag { name, value: raw }),
    }
}

/// Reads a JSON dashboard configuration. Missing fields take their defaults.
pub fn load_dashboard_config(path: &Path) -> Result<DashboardConfig, ServerConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ServerConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: DashboardConfig = serde_json::from_str(&raw).map_err(|source| ServerConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}
