use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// phonetree - run and inspect menu-driven conversation trees
#[derive(Parser, Debug)]
#[command(name = "phonetree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ~/.config/phonetree/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a tree over stdin/stdout
    Run {
        /// Tree definition file
        file: PathBuf,

        /// Set an initial variable (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },

    /// Validate a tree definition
    Check {
        /// Tree definition file
        file: PathBuf,
    },

    /// Print a tree as an outline
    Show {
        /// Tree definition file
        file: PathBuf,
    },
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing variable name in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
