//! Seed command
//!
//! Usage: u25match seed <UID> <FILE> [--db <PATH>]
//!
//! Always writes to SQLite, whatever U25MATCH_SERVICE_MODE says.

use clap::Args;
use std::path::PathBuf;
use u25match_store::{ServiceConfig, SqliteProfileService};

use super::read_profile;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// User id to store the profile under
    pub uid: String,

    /// Profile JSON file
    pub file: PathBuf,

    /// SQLite database path; defaults to U25MATCH_DB_PATH
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Execute seed command
pub fn execute(args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = match args.db {
        Some(path) => path,
        None => ServiceConfig::from_env()?.db_path,
    };
    let profile = read_profile(&args.file)?;

    let service = SqliteProfileService::open(&db_path)?;
    service.insert_profile(&args.uid, &profile)?;

    println!("✓ Seeded {} into {}", args.uid, db_path.display());
    Ok(())
}
