//! Verification backend smoke testing.
//!
//! # Data Flow
//! ```text
//! PokketConfig (backend URL, test address, identity payload)
//!     → client.rs (HTTP calls, request IDs, error mapping)
//!     → runner.rs (four sequential steps, each a Result)
//!     → SmokeTestReport (rendered as console diagnostics)
//! ```
//!
//! # Design Decisions
//! - No retries; timeouts only when configured
//! - A failed step never aborts its siblings, except a backend with no
//!   contract address which ends the run after step 1

pub mod client;
pub mod runner;
pub mod types;

pub use client::{VerificationApi, VerificationClient};
pub use runner::{SmokeTestReport, SmokeTestRunner};
pub use types::{VerificationError, VerificationResult};
