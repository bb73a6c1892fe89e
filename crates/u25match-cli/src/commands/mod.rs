//! CLI command implementations

pub mod diff;
pub mod seed;
pub mod show;
pub mod update;

use std::path::Path;

use clap::Args;
use u25match_core::ProfileData;
use u25match_store::{ServiceConfig, ServiceMode};

/// Service selection overrides shared by commands that talk to a service
#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Service backend (mock, sqlite, http); defaults to U25MATCH_SERVICE_MODE
    #[arg(long)]
    pub mode: Option<String>,

    /// SQLite database path; defaults to U25MATCH_DB_PATH
    #[arg(long)]
    pub db: Option<std::path::PathBuf>,
}

impl ServiceArgs {
    /// Environment config with command-line overrides applied
    pub fn config(&self) -> Result<ServiceConfig, Box<dyn std::error::Error>> {
        let mut config = ServiceConfig::from_env()?;
        if let Some(mode) = &self.mode {
            config.mode = mode.parse::<ServiceMode>()?;
        }
        if let Some(db) = &self.db {
            config.db_path = db.clone();
        }
        Ok(config)
    }
}

/// Read and validate a profile JSON file
pub fn read_profile(path: &Path) -> Result<ProfileData, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let profile = ProfileData::from_json(&json)
        .map_err(|e| format!("invalid profile in {}: {}", path.display(), e))?;
    Ok(profile)
}
