//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! registry / verification / auth
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (backend request counters)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event, human-readable fmt output
//! - Log level from config, `RUST_LOG` wins when set
//! - Metrics are no-ops until the host installs a recorder

pub mod logging;
pub mod metrics;
