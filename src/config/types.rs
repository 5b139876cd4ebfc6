//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PhoneTreeError, PhoneTreeResult};

use super::loader::{self, ConfigWarning};

/// Text the engine shows on its own behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompts {
    /// Line shown above the numbered option list
    #[serde(default = "default_select")]
    pub select: String,

    /// Replaces the prompt after input that matched nothing
    #[serde(default = "default_invalid")]
    pub invalid: String,

    /// Label of the synthesized entry leading to the parent menu
    #[serde(default = "default_back")]
    pub back: String,

    /// Label of the synthesized entry ending the session
    #[serde(default = "default_exit")]
    pub exit: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            select: default_select(),
            invalid: default_invalid(),
            back: default_back(),
            exit: default_exit(),
        }
    }
}

fn default_select() -> String {
    "Please select an option:".to_string()
}

fn default_invalid() -> String {
    "Invalid option, please try again.".to_string()
}

fn default_back() -> String {
    "Return to previous menu".to_string()
}

fn default_exit() -> String {
    "Exit".to_string()
}

/// Fuzzy matching configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum similarity for a label or index to count as a match
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

pub(crate) fn default_threshold() -> f64 {
    0.5
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub prompts: Prompts,

    #[serde(default)]
    pub matching: MatchingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PhoneTreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PhoneTreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, else the user config, else defaults.
    ///
    /// Environment overrides are applied and the result is validated.
    pub fn discover(explicit: Option<&Path>) -> PhoneTreeResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (PHONETREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> PhoneTreeResult<()> {
        let threshold = self.matching.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PhoneTreeError::InvalidValue {
                key: "matching.threshold".to_string(),
                message: format!("{threshold} is outside 0.0..=1.0"),
            });
        }
        Ok(())
    }
}
