//! Show command
//!
//! Usage: u25match show <UID> [--mode <MODE>] [--db <PATH>]

use clap::Args;
use u25match_store::build_service;

use super::ServiceArgs;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// User id whose profile to print
    pub uid: String,

    #[command(flatten)]
    pub service: ServiceArgs,
}

/// Execute show command
pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = build_service(&args.service.config()?)?;
    let profile = service.fetch_profile(&args.uid)?;
    println!("{}", profile.to_json_pretty()?);
    Ok(())
}
