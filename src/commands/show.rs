use std::path::Path;

use anyhow::{Context, Result};
use phonetree::load_script;

use super::{emit, load_config};

pub fn cmd_show(file: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config)?;
    let script = load_script(file).with_context(|| format!("failed to load {}", file.display()))?;
    let outline = script.tree.render_outline(&config.prompts)?;

    if json {
        emit(serde_json::json!({
            "event": "complete",
            "command": "show",
            "file": file.display().to_string(),
            "outline": outline,
        }))?;
        return Ok(());
    }

    print!("{outline}");
    Ok(())
}
