use std::path::Path;

use anyhow::{Context, Result};
use phonetree::{load_script, NodeKind, Script};

use super::emit;

/// Node counts of a compiled tree, root included.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    menus: usize,
    actions: usize,
    callbacks: usize,
}

impl Summary {
    fn of(script: &Script) -> Result<Self> {
        let tree = &script.tree;
        let mut summary = Self {
            menus: 1,
            callbacks: usize::from(tree.has_callback(tree.root())?),
            ..Self::default()
        };
        for entry in tree.outline() {
            match entry.kind {
                NodeKind::Menu => summary.menus += 1,
                NodeKind::Action => summary.actions += 1,
            }
            if entry.has_callback {
                summary.callbacks += 1;
            }
        }
        Ok(summary)
    }
}

pub fn cmd_check(file: &Path, json: bool) -> Result<()> {
    let script = match load_script(file) {
        Ok(script) => script,
        Err(err) => {
            if json {
                emit(serde_json::json!({
                    "event": "error",
                    "command": "check",
                    "file": file.display().to_string(),
                    "message": err.to_string(),
                }))?;
            }
            return Err(err).with_context(|| format!("{} is not a valid tree", file.display()));
        }
    };
    let summary = Summary::of(&script)?;

    if json {
        let warnings: Vec<String> = script.warnings.iter().map(ToString::to_string).collect();
        emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "file": file.display().to_string(),
            "menus": summary.menus,
            "actions": summary.actions,
            "callbacks": summary.callbacks,
            "warnings": warnings,
        }))?;
        return Ok(());
    }

    println!(
        "{}: {} menus, {} actions, {} callbacks",
        file.display(),
        summary.menus,
        summary.actions,
        summary.callbacks
    );
    for warning in &script.warnings {
        println!("warning: {warning}");
    }
    Ok(())
}
