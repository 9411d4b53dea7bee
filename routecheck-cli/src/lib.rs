//! Command-line interface for checking vehicle-routing solutions.
//!
//! `routecheck validate` loads one or more solution documents, checks each
//! against the instance it embeds and writes the diagnostic report of every
//! failing document.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod validate;

pub use error::CliError;

use validate::{ValidateArgs, run_validate};

const ARG_DOCUMENTS: &str = "documents";
const ARG_PAIRING: &str = "pairing";
const ARG_FORMAT: &str = "format";
const ENV_DOCUMENTS: &str = "ROUTECHECK_CMDS_VALIDATE_DOCUMENTS";

/// Run the routecheck CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, a
/// document cannot be loaded or validated, or any solution fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Validate(args) => run_validate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "routecheck",
    about = "Check vehicle-routing solutions against their instances",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate solution documents and report every violation found.
    Validate(ValidateArgs),
}

#[cfg(test)]
mod tests;
