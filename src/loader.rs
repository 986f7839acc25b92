//! Config file loading.
//!
//! JSON and YAML are both accepted; the format is picked from the file
//! extension. A missing file is not an error: it yields the default (empty)
//! configuration, which resolves to no active provider.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::{ResolveError, Result};
use crate::models::Config;

/// Slot names reserved by the built-in providers.
const RESERVED_SLOT_NAMES: &[&str] = &["openrouter", "anthropic", "vllm"];

/// Load a config file, falling back to defaults if it does not exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading config");
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
    if is_yaml {
        parse_config_yaml(&content)
    } else {
        parse_config_json(&content)
    }
}

/// Parse a JSON config document.
pub fn parse_config_json(content: &str) -> Result<Config> {
    let config: Config = serde_json::from_str(content)?;
    check_custom_slots(&config)?;
    Ok(config)
}

/// Parse a YAML config document.
pub fn parse_config_yaml(content: &str) -> Result<Config> {
    let config: Config = serde_yaml_ng::from_str(content)?;
    check_custom_slots(&config)?;
    Ok(config)
}

/// Custom slot names must be non-empty, unique, and distinct from built-ins.
fn check_custom_slots(config: &Config) -> Result<()> {
    let mut seen = HashSet::new();
    for slot in &config.providers.custom {
        let name = slot.name.trim();
        if name.is_empty() {
            return Err(ResolveError::Config {
                message: "custom provider name must not be empty".to_string(),
            });
        }
        if RESERVED_SLOT_NAMES.contains(&name) {
            return Err(ResolveError::Config {
                message: format!("custom provider name '{name}' is reserved"),
            });
        }
        if !seen.insert(name) {
            return Err(ResolveError::Config {
                message: format!("duplicate custom provider '{name}'"),
            });
        }
    }
    Ok(())
}
