//! Configuration module
//!
//! Handles loading and saving of clockangle.toml configuration files.
//! Defines Config and Diagram types.

mod types;

pub use types::{Config, Diagram};

use crate::error::{ClockError, Result};
use crate::generator::Templates;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "clockangle.toml";

/// Smallest diagram that still fits the hour labels
const MIN_DIAGRAM_SIZE: u32 = 100;

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ClockError::Config(format!(
            "Cannot read config from '{}': {}. Run 'clockangle config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Resolve the configuration for a command.
///
/// An explicit path must exist. Without one, `clockangle.toml` in the
/// working directory is used when present, and defaults otherwise.
pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load(path);
    }

    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        debug!(path = %fallback.display(), "loading config");
        load(fallback)
    } else {
        debug!("no config file, using defaults");
        Ok(Config::default())
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| ClockError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Check values serde cannot check on its own
pub fn validate(config: &Config) -> Result<()> {
    if config.questions == 0 {
        return Err(ClockError::Config(
            "questions must be at least 1".to_string(),
        ));
    }

    if config.diagram.size < MIN_DIAGRAM_SIZE {
        return Err(ClockError::Config(format!(
            "diagram.size must be at least {} (got {})",
            MIN_DIAGRAM_SIZE, config.diagram.size
        )));
    }

    Templates::from_config(&config.templates)?;
    Ok(())
}
