mod catalog;
mod categorizer;
mod cli;
mod error;
mod fmt;
mod importer;
mod models;
mod pipeline;
mod reports;
mod settings;
mod sink;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, RemoteCommands};

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init { force } => cli::init::run(force),
        Commands::Process { sources, output } => cli::process::run(&sources, output.as_deref()),
        Commands::Upload { input } => cli::upload::run(input.as_deref()),
        Commands::Sync { sources, output } => cli::sync::run(&sources, output.as_deref()),
        Commands::Classify { merchants } => cli::classify::run(&merchants),
        Commands::Unclassified { sources, limit } => cli::unclassified::run(&sources, limit),
        Commands::Catalog => cli::catalog::run(),
        Commands::Remote { command } => match command {
            RemoteCommands::Count => cli::remote::count(),
            RemoteCommands::Duplicates => cli::remote::duplicates(),
            RemoteCommands::Purge { yes } => cli::remote::purge(yes),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
