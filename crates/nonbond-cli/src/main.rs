mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use clap::Parser;
use tracing::{debug, info};

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    debug!("Parsed CLI arguments: {:?}", &cli);

    let result = match cli.command {
        Commands::Energy(args) => {
            info!("Dispatching to 'energy' command.");
            commands::energy::run(&args)
        }
        Commands::Forces(args) => {
            info!("Dispatching to 'forces' command.");
            commands::forces::run(&args)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
