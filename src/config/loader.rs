//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ShellConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that roots every route path.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load a TOML file, apply environment overrides, and validate.
pub fn load_config(path: &Path) -> Result<ShellConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ShellConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;
    finalize(config)
}

/// Defaults plus environment overrides, validated. Used when no file is given.
pub fn load_default() -> Result<ShellConfig, ConfigError> {
    finalize(ShellConfig::default())
}

fn finalize(mut config: ShellConfig) -> Result<ShellConfig, ConfigError> {
    apply_env(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply deployment-environment overrides.
///
/// `lookup` abstracts the environment so callers (and tests) can supply
/// their own source.
pub fn apply_env<F>(config: &mut ShellConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base) = lookup(BASE_URL_ENV).filter(|b| !b.is_empty()) {
        tracing::debug!(base_url = %base, "Base path taken from environment");
        config.router.base_url = normalize_base(&base);
    }
}

/// Ensure a base path is wrapped in slashes: `wallet` → `/wallet/`.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
