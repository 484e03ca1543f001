//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (POKKET_BACKEND_URL)
//!     → validation.rs (semantic checks)
//!     → PokketConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, resolve_config_with, ConfigError, ConfigOverrides};
pub use schema::{
    AuthConfig, BackendConfig, ObservabilityConfig, PokketConfig, SmokeTestConfig,
    VerificationDataConfig,
};
