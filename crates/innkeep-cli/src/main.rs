//! Innkeep CLI
//!
//! Front desk interface to the guest registry

use clap::{Args, Parser, Subcommand};
use innkeep_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;
mod render;
mod settings;

#[derive(Debug, Parser)]
#[command(name = "innkeep")]
#[command(about = "Innkeep - Hotel guest registry", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// Configuration file (default: innkeep.toml, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the registry databases
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Database name inside the data directory
    #[arg(long, global = true)]
    database: Option<String>,

    /// Logging profile: development, production or test
    #[arg(long, global = true)]
    log_profile: Option<String>,
}

impl GlobalArgs {
    fn overrides(&self) -> settings::Overrides {
        settings::Overrides {
            config: self.config.clone(),
            data_dir: self.data_dir.clone(),
            database: self.database.clone(),
            log_profile: self.log_profile.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a guest into a room
    CheckIn(commands::check_in::CheckInArgs),
    /// List every checked-in guest
    List(commands::list::ListArgs),
    /// Show the guest in a room
    Find(commands::find::FindArgs),
    /// Check the guest out of a room
    CheckOut(commands::check_out::CheckOutArgs),
    /// Interactive front desk menu
    Menu,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load(&cli.global.overrides())?;
    let profile: Profile = settings.log_profile.parse()?;
    logging_facility::init(profile);

    tracing::debug!(
        data_dir = %settings.store.data_dir.display(),
        database = %settings.store.database,
        "settings loaded"
    );

    // Provisioning failures end the process before any command runs
    let session = innkeep_store::ensure_ready(&settings.store)?;

    match cli.command {
        Commands::CheckIn(args) => commands::check_in::execute(&session, args),
        Commands::List(args) => commands::list::execute(&session, args),
        Commands::Find(args) => commands::find::execute(&session, args),
        Commands::CheckOut(args) => commands::check_out::execute(&session, args),
        Commands::Menu => commands::menu::execute(&session),
    }
}
