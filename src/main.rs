//! phonetree CLI - run and inspect menu-driven conversation trees
//!
//! Usage: phonetree <COMMAND>
//!
//! Commands:
//!   run     Run a tree over stdin/stdout
//!   check   Validate a tree definition
//!   show    Print a tree as an outline

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { file, set } => {
            commands::cmd_run(&file, set, cli.config.as_deref(), cli.json)
        }
        Commands::Check { file } => commands::cmd_check(&file, cli.json),
        Commands::Show { file } => commands::cmd_show(&file, cli.config.as_deref(), cli.json),
    }
}

/// Logs go to stderr so they never mix with the conversation on stdout.
fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
