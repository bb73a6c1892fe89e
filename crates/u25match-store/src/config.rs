//! Service selection from the environment
//!
//! | Variable                | Default                  |
//! |-------------------------|--------------------------|
//! | `U25MATCH_SERVICE_MODE` | `mock`                   |
//! | `U25MATCH_DB_PATH`      | `.u25match/profiles.db`  |
//! | `U25MATCH_API_BASE_URL` | `http://localhost:8081`  |
//! | `U25MATCH_API_TOKEN`    | unset                    |

#![allow(clippy::result_large_err)]

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use u25match_core::errors::ExError;
use u25match_core_types::Sensitive;

use crate::errors::{config_error, Result};

pub const ENV_SERVICE_MODE: &str = "U25MATCH_SERVICE_MODE";
pub const ENV_DB_PATH: &str = "U25MATCH_DB_PATH";
pub const ENV_API_BASE_URL: &str = "U25MATCH_API_BASE_URL";
pub const ENV_API_TOKEN: &str = "U25MATCH_API_TOKEN";

pub const DEFAULT_DB_PATH: &str = ".u25match/profiles.db";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";

/// Which `ProfileService` implementation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceMode {
    #[default]
    Mock,
    Sqlite,
    Http,
}

impl ServiceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceMode::Mock => "mock",
            ServiceMode::Sqlite => "sqlite",
            ServiceMode::Http => "http",
        }
    }
}

impl fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceMode {
    type Err = ExError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(ServiceMode::Mock),
            "sqlite" => Ok(ServiceMode::Sqlite),
            "http" => Ok(ServiceMode::Http),
            other => Err(config_error(
                ENV_SERVICE_MODE,
                &format!("unknown service mode '{}' (expected mock, sqlite or http)", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub mode: ServiceMode,
    pub db_path: PathBuf,
    pub api_base_url: String,
    pub api_token: Option<Sensitive<String>>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            mode: ServiceMode::default(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: None,
        }
    }
}

impl ServiceConfig {
    /// Read the process environment. Binaries load `.env` before calling this.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an unknown service mode.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an unknown service mode.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let mode = match get(ENV_SERVICE_MODE) {
            Some(raw) => raw.parse()?,
            None => defaults.mode,
        };

        Ok(Self {
            mode,
            db_path: get(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            api_base_url: get(ENV_API_BASE_URL).unwrap_or(defaults.api_base_url),
            api_token: get(ENV_API_TOKEN).map(Sensitive::new),
        })
    }

    pub fn with_mode(mut self, mode: ServiceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }
}
