//! Update command
//!
//! Usage: u25match update <UID> <FILE> [--dry-run] [--mode <MODE>] [--db <PATH>]
//!
//! Loads the stored profile as baseline, treats FILE as the edited form and
//! saves the difference through the editor.

use clap::Args;
use std::path::PathBuf;
use u25match_core::errors::LOAD_FAILED_MESSAGE;
use u25match_core::{ProfileEditor, SaveOutcome};
use u25match_store::build_service;

use super::{read_profile, ServiceArgs};

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// User id whose profile to update
    pub uid: String,

    /// Edited profile JSON
    pub file: PathBuf,

    /// Print what would change without saving
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub service: ServiceArgs,
}

/// Execute update command
pub fn execute(args: UpdateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let form = read_profile(&args.file)?;
    let service = build_service(&args.service.config()?)?;

    let baseline = match service.fetch_profile(&args.uid) {
        Ok(profile) => profile,
        Err(err) => {
            eprintln!("{}", LOAD_FAILED_MESSAGE);
            return Err(err.into());
        }
    };
    let mut editor = ProfileEditor::new(baseline);
    editor.replace_working_copy(form)?;

    print!("{}", editor.confirmation_text());
    if args.dry_run {
        return Ok(());
    }

    match editor.save(&args.uid, service.as_ref()) {
        Ok(SaveOutcome::NoChanges) => {
            println!("No changes to save");
            Ok(())
        }
        Ok(SaveOutcome::Saved { changed_fields, .. }) => {
            let names: Vec<&str> = changed_fields.iter().map(|f| f.as_str()).collect();
            println!("✓ Saved {}", names.join(", "));
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            Err(err.into())
        }
    }
}
