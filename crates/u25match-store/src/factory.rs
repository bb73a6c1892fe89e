//! Startup-time choice of profile service

#![allow(clippy::result_large_err)]

use u25match_core::{MockProfileService, ProfileService};

use crate::config::{ServiceConfig, ServiceMode};
use crate::errors::Result;
use crate::http::HttpProfileService;
use crate::sqlite::SqliteProfileService;

/// Build the service named by `config.mode`.
///
/// Mock mode serves the sample profile under `FIXTURE_UID`.
///
/// # Errors
///
/// Opening the SQLite database or building the HTTP client can fail.
pub fn build_service(config: &ServiceConfig) -> Result<Box<dyn ProfileService>> {
    let service: Box<dyn ProfileService> = match config.mode {
        ServiceMode::Mock => Box::new(MockProfileService::with_fixtures()),
        ServiceMode::Sqlite => Box::new(SqliteProfileService::open(&config.db_path)?),
        ServiceMode::Http => Box::new(HttpProfileService::new(
            &config.api_base_url,
            config.api_token.clone(),
        )?),
    };
    tracing::info!(service_mode = service.name(), "profile service ready");
    Ok(service)
}
