//! Pokket wallet core library.
//!
//! Token and network registries, gas presets, the verification backend
//! smoke test, sign-in redirect and injected wallet provider capabilities.

pub mod auth;
pub mod config;
pub mod gas;
pub mod observability;
pub mod receive;
pub mod registry;
pub mod verification;
pub mod wallet;

pub use config::schema::PokketConfig;
pub use verification::{SmokeTestReport, SmokeTestRunner, VerificationClient};
