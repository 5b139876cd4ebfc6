//! Subcommand implementations

mod check;
mod run;
mod show;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use phonetree::Config;

pub use check::cmd_check;
pub use run::cmd_run;
pub use show::cmd_show;

/// Resolve configuration for a command, logging non-fatal warnings.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let (config, warnings) = Config::discover(explicit).with_context(|| match explicit {
        Some(path) => format!("failed to load config {}", path.display()),
        None => "failed to load user config".to_string(),
    })?;
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    Ok(config)
}

/// Write a single NDJSON event (one JSON object per line).
fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}
