//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PokketConfig {
    /// Verification backend connection.
    pub backend: BackendConfig,

    /// Smoke-test inputs.
    pub smoke_test: SmokeTestConfig,

    /// Sign-in endpoint settings.
    pub auth: AuthConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Verification backend connection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend API (e.g., "http://localhost:3001").
    pub base_url: String,

    /// Per-request timeout in seconds. Unset means the HTTP client default.
    pub request_timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Inputs for the verification smoke test.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SmokeTestConfig {
    /// Address whose verification state is exercised.
    pub test_address: String,

    /// Identity payload sent to the simulate-callback endpoint.
    pub verification_data: VerificationDataConfig,
}

impl Default for SmokeTestConfig {
    fn default() -> Self {
        Self {
            test_address: "0x742d35Cc6634C0532925a3b844Bc454e4438f44e".to_string(),
            verification_data: VerificationDataConfig::default(),
        }
    }
}

/// Simulated identity document.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VerificationDataConfig {
    pub name: String,
    pub nationality: String,
    pub age: u32,
    pub document_type: String,
}

impl Default for VerificationDataConfig {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            nationality: "US".to_string(),
            age: 25,
            document_type: "passport".to_string(),
        }
    }
}

/// Sign-in endpoint settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Path of the endpoint that issues the OAuth authorization URL.
    pub oauth_url_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            oauth_url_path: "/auth/google/url".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: PokketConfig = toml::from_str("").unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:3001");
        assert!(config.backend.request_timeout_secs.is_none());
        assert_eq!(config.smoke_test.verification_data.age, 25);
        assert_eq!(config.auth.oauth_url_path, "/auth/google/url");
    }

    #[test]
    fn test_partial_sections_merge_with_defaults() {
        let config: PokketConfig = toml::from_str(
            r#"
            [backend]
            base_url = "https://api.pokket.example"

            [smoke_test.verification_data]
            name = "Jane Roe"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "https://api.pokket.example");
        assert_eq!(config.smoke_test.verification_data.name, "Jane Roe");
        assert_eq!(config.smoke_test.verification_data.document_type, "passport");
    }
}
