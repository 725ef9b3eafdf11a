//! CLI module for Bookshelf
//!
//! Provides command-line interface for:
//! - serve: Load configuration, seed the store, and serve HTTP
//! - check: Validate a book data file

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, resolve_config, run_command, seed_store, serve};
pub use config::AppConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_response, write_response_to};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
