use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Evaluate pairwise non-bonded Coulomb interactions (plain, soft-core, reaction-field) over a pair table."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute per-pair potential energies and their total.
    Energy(EvalArgs),
    /// Compute per-pair force vectors.
    Forces(EvalArgs),
}

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Path to the interaction parameter file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub params: PathBuf,

    /// Path to the pair table in CSV format
    /// (columns: q_i, q_j, sigma_i, sigma_j, dx, dy, dz, special).
    #[arg(long, required = true, value_name = "PATH")]
    pub pairs: PathBuf,
}
