//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{PhoneTreeError, PhoneTreeResult};
use crate::similarity::similarity;

use super::types::Config;

const CONFIG_KEYS: &[&str] = &[
    "prompts",
    "select",
    "invalid",
    "back",
    "exit",
    "matching",
    "threshold",
];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PhoneTreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    deserialize_with_warnings(&content, path, CONFIG_KEYS).map_err(|e| {
        PhoneTreeError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        }
    })
}

/// Deserialize TOML, reporting keys the target type does not know.
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(
    content: &str,
    path: &Path,
    known_keys: &[&str],
) -> Result<(T, Vec<ConfigWarning>), toml::de::Error> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let value: T = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key, known_keys),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((value, warnings))
}

/// Load the explicit file, else the user config, else defaults.
pub fn discover(explicit: Option<&Path>) -> PhoneTreeResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match user_config_path().filter(|p| p.exists()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading user config");
                load_with_warnings(&path)?
            }
            None => (Config::default(), Vec::new()),
        },
    };

    let config = with_env_overrides(config);
    config.validate()?;
    Ok((config, warnings))
}

/// Apply environment variable overrides (PHONETREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // PHONETREE_THRESHOLD
    if let Some(raw) = var("PHONETREE_THRESHOLD") {
        match raw.trim().parse::<f64>() {
            Ok(value) if (0.0..=1.0).contains(&value) => config.matching.threshold = value,
            _ => tracing::warn!(value = %raw, "ignoring PHONETREE_THRESHOLD outside 0.0..=1.0"),
        }
    }

    config
}

/// `$XDG_CONFIG_HOME/phonetree/config.toml`, falling back to the platform
/// config directory.
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("phonetree").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    let unknown = unknown.to_lowercase();
    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let score = similarity(&unknown, candidate);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    match best {
        Some((candidate, score)) if score >= 0.75 => Some(candidate.to_string()),
        _ => None,
    }
}
