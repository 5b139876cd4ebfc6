//! Configuration module for phonetree
//!
//! Configuration hierarchy:
//! 1. Environment variables (PHONETREE_*)
//! 2. Explicit config file (`--config`)
//! 3. User config (~/.config/phonetree/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning};
pub use types::{Config, MatchingConfig, Prompts};

pub(crate) use loader::deserialize_with_warnings;
