//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::PokketConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `backend.base_url`.
pub const BACKEND_URL_ENV_VAR: &str = "POKKET_BACKEND_URL";

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
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<PokketConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<PokketConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Command-line values that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub test_address: Option<String>,
}

/// Build the effective configuration: file (or defaults), then environment
/// overrides, then validation.
pub fn resolve_config(path: Option<&Path>) -> Result<PokketConfig, ConfigError> {
    resolve_config_with(path, &ConfigOverrides::default())
}

/// Like [`resolve_config`], with command-line overrides applied last.
/// Validation runs once, on the final values.
pub fn resolve_config_with(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<PokketConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => PokketConfig::default(),
    };
    apply_env_overrides(&mut config);
    if let Some(url) = &overrides.backend_url {
        config.backend.base_url = url.clone();
    }
    if let Some(address) = &overrides.test_address {
        config.smoke_test.test_address = address.clone();
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply supported environment variable overrides in place.
pub fn apply_env_overrides(config: &mut PokketConfig) {
    if let Ok(url) = env::var(BACKEND_URL_ENV_VAR) {
        if !url.trim().is_empty() {
            tracing::debug!(base_url = %url, "Backend URL overridden from environment");
            config.backend.base_url = url;
        }
    }
}
