//! Runtime configuration.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! command-line overrides. Validation uses Stillwater's `Validation` so
//! every problem is reported at once instead of one per run.

use crate::effects::NoticeTimings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "calculon";

/// A single rule a configuration breaks
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("service_url '{url}' is not an http(s) URL")]
    InvalidServiceUrl { url: String },

    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Calculator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the evaluation service
    pub service_url: String,
    /// Directory holding persisted history, memory and the log file
    pub data_dir: PathBuf,
    pub request_timeout_ms: u64,
    pub error_notice_ms: u64,
    pub confirmation_notice_ms: u64,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: "http://127.0.0.1:5000".to_string(),
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
            request_timeout_ms: 10_000,
            error_notice_ms: 3_000,
            confirmation_notice_ms: 2_000,
            log_filter: "calculon=info".to_string(),
        }
    }
}

/// Values given on the command line, taking precedence over the file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub service_url: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub log_filter: Option<String>,
}

/// `<platform config dir>/calculon/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

impl Config {
    /// Parse a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from an explicit file, else from the default location if a file
    /// exists there, else use defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(url) = overrides.service_url {
            self.service_url = url;
        }
        if let Some(dir) = overrides.data_dir {
            self.data_dir = dir;
        }
        if let Some(filter) = overrides.log_filter {
            self.log_filter = filter;
        }
        self
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        let url_ok = reqwest::Url::parse(&self.service_url)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        checks.push(if url_ok {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::InvalidServiceUrl {
                url: self.service_url.clone(),
            })
        });

        for (field, value) in [
            ("request_timeout_ms", self.request_timeout_ms),
            ("error_notice_ms", self.error_notice_ms),
            ("confirmation_notice_ms", self.confirmation_notice_ms),
        ] {
            checks.push(if value > 0 {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::ZeroDuration { field })
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn notice_timings(&self) -> NoticeTimings {
        NoticeTimings {
            error: Duration::from_millis(self.error_notice_ms),
            confirmation: Duration::from_millis(self.confirmation_notice_ms),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(format!("{APP_DIR}.log"))
    }
}
