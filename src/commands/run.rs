use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use phonetree::{load_script, Engine, LineAsk, LineTell};

use super::{emit, load_config};

pub fn cmd_run(
    file: &Path,
    set: Vec<(String, String)>,
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = load_config(config)?;
    let mut script =
        load_script(file).with_context(|| format!("failed to load {}", file.display()))?;

    let mut variables = script.variables;
    variables.extend(set);
    tracing::info!(file = %file.display(), nodes = script.tree.len(), "starting session");

    let mut ask = LineAsk::new(io::stdin().lock(), io::stdout());
    let mut tell = LineTell::new(io::stdout());
    let variables = Engine::new(&mut script.tree)
        .with_config(config)
        .run(variables, &mut ask, &mut tell)
        .context("session failed")?;

    if json {
        emit(serde_json::json!({
            "event": "complete",
            "command": "run",
            "variables": variables,
        }))?;
    }
    Ok(())
}
