//! Diff command
//!
//! Usage: u25match diff <ORIGINAL> <CURRENT> [--json]

use clap::Args;
use std::path::PathBuf;
use u25match_core::diff::{get_profile_diff, render_change_summary};

use super::read_profile;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Baseline profile JSON
    pub original: PathBuf,

    /// Edited profile JSON
    pub current: PathBuf,

    /// Print the partial update as JSON instead of the confirmation text
    #[arg(long)]
    pub json: bool,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let original = read_profile(&args.original)?;
    let current = read_profile(&args.current)?;
    let diff = get_profile_diff(&original, &current);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else {
        print!("{}", render_change_summary(&diff));
    }

    Ok(())
}
