//! U25Match CLI
//!
//! Command-line front end for the profile edit pipeline

use clap::{Parser, Subcommand};
use u25match_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "u25match")]
#[command(about = "U25Match - profile diff and save pipeline", long_about = None)]
struct Cli {
    /// Emit JSON log lines instead of human-readable ones
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two profile JSON files
    Diff(commands::diff::DiffArgs),
    /// Print a stored profile
    Show(commands::show::ShowArgs),
    /// Insert a profile into the SQLite store
    Seed(commands::seed::SeedArgs),
    /// Save the changes between the stored profile and a JSON file
    Update(commands::update::UpdateArgs),
}

fn main() {
    // A missing .env file is the normal case.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Seed(args) => commands::seed::execute(args),
        Commands::Update(args) => commands::update::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
