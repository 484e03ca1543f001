//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Backend URL must be an absolute http(s) URL
//! - Smoke-test address must be a valid EVM address
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PokketConfig → Result<(), Vec<ValidationError>>

use alloy::primitives::Address;
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::config::schema::PokketConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub fn validate_config(config: &PokketConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.backend.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            "backend.base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new("backend.base_url", e.to_string())),
    }

    if config.backend.request_timeout_secs == Some(0) {
        errors.push(ValidationError::new(
            "backend.request_timeout_secs",
            "must be greater than 0",
        ));
    }

    if let Err(e) = Address::from_str(&config.smoke_test.test_address) {
        errors.push(ValidationError::new(
            "smoke_test.test_address",
            format!("invalid address: {}", e),
        ));
    }

    let data = &config.smoke_test.verification_data;
    if data.name.trim().is_empty() {
        errors.push(ValidationError::new("smoke_test.verification_data.name", "must not be empty"));
    }
    if data.age == 0 {
        errors.push(ValidationError::new("smoke_test.verification_data.age", "must be greater than 0"));
    }

    if !config.auth.oauth_url_path.starts_with('/') {
        errors.push(ValidationError::new("auth.oauth_url_path", "must start with '/'"));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&PokketConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = PokketConfig::default();
        config.backend.base_url = "ftp://example.com".to_string();
        config.smoke_test.test_address = "0x1234".to_string();
        config.smoke_test.verification_data.age = 0;
        config.auth.oauth_url_path = "auth/google/url".to_string();
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "backend.base_url",
                "smoke_test.test_address",
                "smoke_test.verification_data.age",
                "auth.oauth_url_path",
                "observability.log_level",
            ]
        );
    }

    #[test]
    fn test_rejects_unparsable_url_and_zero_timeout() {
        let mut config = PokketConfig::default();
        config.backend.base_url = "not a url".to_string();
        config.backend.request_timeout_secs = Some(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
