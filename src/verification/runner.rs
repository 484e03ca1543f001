//! Verification smoke test.
//!
//! Drives the backend through four sequential calls against one address:
//!
//! ```text
//! 1. config            → abort unless it names a contract address
//! 2. status (before)
//! 3. simulate-callback
//! 4. status (after)    → compare with step 2
//! ```
//!
//! Each step yields a `Result`. A transport failure is recorded and the next
//! step still runs. A config reply without a usable contract address, or one
//! that cannot be read, stops the run.

use chrono::{DateTime, Local};

use crate::verification::client::VerificationApi;
use crate::verification::types::{
    SimulateCallbackRequest, SimulateCallbackResponse, VerificationConfig, VerificationData,
    VerificationError, VerificationResult, VerificationStatus,
};

/// Outcome of a single step.
pub type StepOutcome<T> = VerificationResult<T>;

/// Everything observed during one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SmokeTestReport {
    pub address: String,
    pub config: StepOutcome<VerificationConfig>,
    /// `None` when the step did not run.
    pub initial_status: Option<StepOutcome<VerificationStatus>>,
    pub simulation: Option<StepOutcome<SimulateCallbackResponse>>,
    pub final_status: Option<StepOutcome<VerificationStatus>>,
}

impl SmokeTestReport {
    /// Run stopped after step 1 because the backend is not configured.
    pub fn aborted(&self) -> bool {
        config_aborts(&self.config)
    }

    /// Verification state after the simulated callback, if it was fetched.
    pub fn final_verified(&self) -> Option<bool> {
        match &self.final_status {
            Some(Ok(status)) => Some(status.is_verified),
            _ => None,
        }
    }

    /// Whether every step that ran succeeded and the address ended verified.
    pub fn passed(&self) -> bool {
        self.config.is_ok()
            && matches!(self.initial_status, Some(Ok(_)))
            && matches!(self.simulation, Some(Ok(_)))
            && self.final_verified() == Some(true)
    }

    /// Human-readable diagnostics, one line per entry.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push("Step 1: backend verification config".to_string());
        match &self.config {
            Ok(config) => {
                lines.push(format!(
                    "  Contract address: {}",
                    config.contract_address().unwrap_or("-")
                ));
                lines.push(format!("  Network: {}", config.network.as_deref().unwrap_or("-")));
                lines.push(format!(
                    "  Enabled: {}",
                    config.enabled.map(|e| e.to_string()).unwrap_or_else(|| "-".into())
                ));
            }
            Err(e) if e.is_transport() => {
                lines.push(format!("  Failed to fetch verification config: {}", e))
            }
            Err(e) => {
                lines.push(format!("  Configuration error: {}; skipping remaining steps", e));
                return lines;
            }
        }

        lines.push("Step 2: verification status before callback".to_string());
        match &self.initial_status {
            Some(Ok(status)) => lines.push(format!("  Verified: {}", status.is_verified)),
            Some(Err(e)) => lines.push(format!("  Failed to fetch verification status: {}", e)),
            None => lines.push("  Not run".to_string()),
        }

        lines.push("Step 3: simulate verification callback".to_string());
        match &self.simulation {
            Some(Ok(response)) => {
                lines.push("  Simulated callback succeeded".to_string());
                lines.push(format!(
                    "  Transaction hash: {}",
                    response.tx_hash.as_deref().unwrap_or("-")
                ));
                lines.push(format!(
                    "  Block number: {}",
                    response.block_number.map(|b| b.to_string()).unwrap_or_else(|| "-".into())
                ));
            }
            Some(Err(e)) => {
                lines.push(format!("  Simulated callback failed: {}", e));
                if e.mentions_private_key() {
                    lines.push(
                        "  Hint: the backend signer private key is not configured; set it in the backend environment"
                            .to_string(),
                    );
                }
            }
            None => lines.push("  Not run".to_string()),
        }

        lines.push("Step 4: verification status after callback".to_string());
        match &self.final_status {
            Some(Ok(status)) if status.is_verified => {
                lines.push(format!("  Address {} is verified", self.address));
                let when = status
                    .verification_timestamp
                    .and_then(format_timestamp)
                    .unwrap_or_else(|| "unknown".to_string());
                lines.push(format!("  Verified at: {}", when));
            }
            Some(Ok(_)) => lines.push(format!("  Address {} is still not verified", self.address)),
            Some(Err(e)) => lines.push(format!("  Failed to fetch verification status: {}", e)),
            None => lines.push("  Not run".to_string()),
        }

        if let (Some(Ok(before)), Some(Ok(after))) = (&self.initial_status, &self.final_status) {
            if before.is_verified != after.is_verified {
                lines.push(format!(
                    "Verification state changed: {} -> {}",
                    before.is_verified, after.is_verified
                ));
            } else {
                lines.push("Verification state unchanged".to_string());
            }
        }

        lines
    }
}

fn config_aborts(config: &StepOutcome<VerificationConfig>) -> bool {
    matches!(config, Err(e) if !e.is_transport())
}

/// Unix seconds as a local date-time.
pub fn format_timestamp(secs: u64) -> Option<String> {
    let secs = i64::try_from(secs).ok()?;
    DateTime::from_timestamp(secs, 0).map(|utc| {
        utc.with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    })
}

/// Sequential smoke test over a [`VerificationApi`].
pub struct SmokeTestRunner<A> {
    api: A,
    address: String,
    verification_data: VerificationData,
}

impl<A: VerificationApi> SmokeTestRunner<A> {
    pub fn new(api: A, address: impl Into<String>, verification_data: VerificationData) -> Self {
        Self {
            api,
            address: address.into(),
            verification_data,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Run all steps and collect the outcomes.
    pub async fn run(&self) -> SmokeTestReport {
        tracing::info!(address = %self.address, "Starting verification smoke test");

        let config = self.fetch_config().await;
        if config_aborts(&config) {
            return SmokeTestReport {
                address: self.address.clone(),
                config,
                initial_status: None,
                simulation: None,
                final_status: None,
            };
        }

        let initial_status = self.fetch_status("before callback").await;
        let simulation = self.simulate_callback().await;
        let final_status = self.fetch_status("after callback").await;

        let report = SmokeTestReport {
            address: self.address.clone(),
            config,
            initial_status: Some(initial_status),
            simulation: Some(simulation),
            final_status: Some(final_status),
        };
        tracing::info!(passed = report.passed(), "Verification smoke test finished");
        report
    }

    /// Step 1. A config without a contract address becomes
    /// [`VerificationError::MissingContractAddress`]. Any error other than a
    /// transport failure ends the run.
    pub async fn fetch_config(&self) -> StepOutcome<VerificationConfig> {
        match self.api.get_config().await {
            Ok(config) if config.contract_address().is_none() => {
                tracing::error!("Config check: backend has no verification contract address");
                Err(VerificationError::MissingContractAddress)
            }
            Ok(config) => {
                tracing::info!(
                    contract_address = config.contract_address().unwrap_or_default(),
                    network = config.network.as_deref().unwrap_or("-"),
                    enabled = ?config.enabled,
                    "Config check: ok"
                );
                Ok(config)
            }
            Err(e) => {
                tracing::error!(error = %e, "Config check: request failed");
                Err(e)
            }
        }
    }

    /// Steps 2 and 4.
    pub async fn fetch_status(&self, phase: &'static str) -> StepOutcome<VerificationStatus> {
        let result = self.api.get_status(&self.address).await;
        match &result {
            Ok(status) => tracing::info!(
                phase,
                address = %self.address,
                is_verified = status.is_verified,
                "Status check"
            ),
            Err(e) => tracing::error!(phase, error = %e, "Status check: request failed"),
        }
        result
    }

    /// Step 3. A `success: false` body becomes [`VerificationError::Rejected`].
    pub async fn simulate_callback(&self) -> StepOutcome<SimulateCallbackResponse> {
        let request = SimulateCallbackRequest {
            user_address: self.address.clone(),
            verification_data: self.verification_data.clone(),
        };

        let result = match self.api.simulate_callback(&request).await {
            Ok(response) if response.success => Ok(response),
            Ok(response) => Err(VerificationError::Rejected(
                response.error.unwrap_or_else(|| "unknown error".to_string()),
            )),
            Err(e) => Err(e),
        };

        match &result {
            Ok(response) => tracing::info!(
                tx_hash = response.tx_hash.as_deref().unwrap_or("-"),
                block_number = ?response.block_number,
                "Simulate callback: ok"
            ),
            Err(e) if e.mentions_private_key() => tracing::error!(
                error = %e,
                "Simulate callback: failed, backend signer private key looks unset"
            ),
            Err(e) => tracing::error!(error = %e, "Simulate callback: failed"),
        }
        result
    }
}
