//! Verification smoke test.
//!
//! Runs the four-step check against a verification backend and prints a
//! diagnostic report:
//!
//! ```text
//!   pokket ──▶ GET  /verification/config
//!          ──▶ GET  /verification/status/{address}
//!          ──▶ POST /verification/simulate-callback
//!          ──▶ GET  /verification/status/{address}
//! ```

use clap::Parser;
use std::path::PathBuf;

use pokket::config::{resolve_config_with, ConfigOverrides};
use pokket::observability::logging::init_logging;
use pokket::verification::types::VerificationData;
use pokket::{SmokeTestRunner, VerificationClient};

#[derive(Parser)]
#[command(name = "pokket")]
#[command(about = "Smoke test for the Pokket verification backend", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config and POKKET_BACKEND_URL).
    #[arg(short, long)]
    backend_url: Option<String>,

    /// Address to verify (overrides config).
    #[arg(short, long)]
    address: Option<String>,

    /// Exit with status 1 unless the address ends verified.
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        backend_url: cli.backend_url,
        test_address: cli.address,
    };
    let config = resolve_config_with(cli.config.as_deref(), &overrides)?;

    init_logging(&config.observability.log_level);

    tracing::info!(
        base_url = %config.backend.base_url,
        address = %config.smoke_test.test_address,
        timeout_secs = ?config.backend.request_timeout_secs,
        "Configuration loaded"
    );

    let client = VerificationClient::from_config(&config.backend)?;
    let runner = SmokeTestRunner::new(
        client,
        config.smoke_test.test_address.clone(),
        VerificationData::from(&config.smoke_test.verification_data),
    );

    let report = runner.run().await;
    for line in report.render() {
        println!("{}", line);
    }

    if cli.strict && !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}
