//! U25Match Store - profile service backends
//!
//! Provides:
//! - SQLite schema with migrations framework
//! - `SqliteProfileService` storing profiles as JSON rows
//! - `HttpProfileService` talking to the remote profile API
//! - Environment-driven service selection (`ServiceConfig`, `build_service`)

pub mod config;
pub mod db;
pub mod errors;
pub mod factory;
pub mod http;
pub mod migrations;
pub mod sqlite;

pub use config::{ServiceConfig, ServiceMode};
pub use errors::Result;
pub use factory::build_service;
pub use http::HttpProfileService;
pub use sqlite::SqliteProfileService;
