//! Phone trees defined in TOML.
//!
//! A definition file describes the root menu's exit flags, the initial
//! variables of a session, and nested `[[option]]` tables. Options with child
//! options (or `menu = true`) become submenus, the rest become actions. Each
//! option may carry effects that run when it is entered:
//!
//! ```toml
//! include_exit_on_submenus = true
//! say = "Welcome to Example Bank."
//!
//! [variables]
//! balance = "120.00"
//!
//! [[option]]
//! label = "Balance"
//! say = "Your balance is {balance}."
//!
//! [[option]]
//! label = "Callback"
//! ask = "Which number should we call?"
//! into = "number"
//! say = "We will call {number}."
//! goto = "exit"
//! ```
//!
//! # Module Structure
//!
//! - `types` - serde model of the file format
//! - `compile` - definition to tree, effects to declared callbacks
//! - `template` - `{variable}` interpolation

mod compile;
mod template;
mod types;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use compile::compile;
pub use template::interpolate;
pub use types::{OptionDefinition, TreeDefinition, Variables};

use crate::config::{deserialize_with_warnings, ConfigWarning};
use crate::error::PhoneTreeError;
use crate::tree::PhoneTree;

/// Errors in a tree definition
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read {file}: {source}")]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tree definition {file}: {message}")]
    Parse { file: PathBuf, message: String },

    #[error("option under '{path}' has an empty label")]
    EmptyLabel { path: String },

    #[error("'{path}' asks a question but names no 'into' variable")]
    AskWithoutInto { path: String },

    #[error("'{path}' names an 'into' variable but asks no question")]
    IntoWithoutAsk { path: String },

    #[error("'{path}' is declared as an action but has options")]
    ActionWithOptions { path: String },

    #[error("'{path}' goes to unknown option '{goto}'")]
    UnknownGoto { path: String, goto: String },

    #[error(transparent)]
    Tree(#[from] PhoneTreeError),
}

/// A compiled definition, ready to run.
#[derive(Debug)]
pub struct Script {
    pub tree: PhoneTree<Variables>,
    /// Initial state of a session
    pub variables: Variables,
    /// Unknown keys found while parsing
    pub warnings: Vec<ConfigWarning>,
}

/// Read and compile a definition file.
pub fn load_script(path: &Path) -> Result<Script, ScriptError> {
    let content = fs::read_to_string(path).map_err(|source| ScriptError::Read {
        file: path.to_path_buf(),
        source,
    })?;
    parse_script(&content, path)
}

/// Compile definition text; `path` is only used in messages.
pub fn parse_script(content: &str, path: &Path) -> Result<Script, ScriptError> {
    let (definition, warnings) = parse_definition(content, path)?;
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    Ok(Script {
        tree: compile(&definition)?,
        variables: definition.variables,
        warnings,
    })
}

/// Parse definition text without compiling it.
pub fn parse_definition(
    content: &str,
    path: &Path,
) -> Result<(TreeDefinition, Vec<ConfigWarning>), ScriptError> {
    deserialize_with_warnings(content, path, types::DEFINITION_KEYS).map_err(|e| {
        ScriptError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        }
    })
}
