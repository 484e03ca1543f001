use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;

use pokket::auth::{ConsoleNavigator, SignIn};
use pokket::config::resolve_config;
use pokket::gas::{get_gas_config, gas_policy_for_network};
use pokket::observability::logging::init_logging;
use pokket::receive::payment_request_uri;
use pokket::registry::{
    get_block_explorer_url, get_network_config, get_solana_explorer_url,
    get_supported_tokens_for_network, get_token_config, NetworkFamily, SolanaCluster,
};

#[derive(Parser)]
#[command(name = "pokket-cli")]
#[command(about = "Registry lookups and sign-in for the Pokket wallet", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a token by symbol (case-insensitive)
    Token { symbol: String },
    /// List tokens usable on a network family (ethereum, solana, both)
    Tokens { network: NetworkFamily },
    /// Show a network by chain ID
    Network { chain_id: u64 },
    /// Show the gas preset used for a chain ID
    Gas { chain_id: u64 },
    /// Transaction link on a chain's block explorer
    Explorer { chain_id: u64, tx_hash: String },
    /// Transaction link on the Solana explorer
    SolanaExplorer {
        signature: String,
        #[arg(long, default_value = "mainnet-beta")]
        cluster: SolanaCluster,
    },
    /// Payment request URI for the receive QR code
    Receive {
        symbol: String,
        chain_id: u64,
        recipient: String,
        #[arg(long)]
        amount: Option<String>,
    },
    /// Fetch the OAuth URL from the backend and print it
    SignIn,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;
    init_logging(&config.observability.log_level);

    match cli.command {
        Commands::Token { symbol } => match get_token_config(&symbol) {
            Some(token) => print_json(&serde_json::to_value(token)?)?,
            None => eprintln!("Error: token '{}' is not registered", symbol),
        },
        Commands::Tokens { network } => {
            let tokens = get_supported_tokens_for_network(network);
            print_json(&serde_json::to_value(tokens)?)?;
        }
        Commands::Network { chain_id } => match get_network_config(chain_id) {
            Some(network) => print_json(&json!({
                "network": network,
                "gas": gas_policy_for_network(network),
            }))?,
            None => eprintln!("Error: chain {} is not registered", chain_id),
        },
        Commands::Gas { chain_id } => {
            let policy = get_gas_config(chain_id);
            if get_network_config(chain_id).is_none() {
                eprintln!("Warning: chain {} is not registered, showing the default preset", chain_id);
            }
            print_json(&json!({
                "policy": policy,
                "max_transfer_fee_wei": policy.estimate_max_fee(false).to_string(),
                "max_erc20_fee_wei": policy.estimate_max_fee(true).to_string(),
            }))?;
        }
        Commands::Explorer { chain_id, tx_hash } => {
            println!("{}", get_block_explorer_url(chain_id, &tx_hash));
        }
        Commands::SolanaExplorer { signature, cluster } => {
            println!("{}", get_solana_explorer_url(&signature, cluster));
        }
        Commands::Receive { symbol, chain_id, recipient, amount } => {
            let Some(token) = get_token_config(&symbol) else {
                eprintln!("Error: token '{}' is not registered", symbol);
                return Ok(());
            };
            match payment_request_uri(token, chain_id, &recipient, amount.as_deref()) {
                Ok(uri) => println!("{}", uri),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        Commands::SignIn => {
            let sign_in = SignIn::from_config(&config.backend, &config.auth, ConsoleNavigator);
            let ok = sign_in
                .sign_in(|message| eprintln!("Sign-in failed: {}", message))
                .await;
            if !ok {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_json(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
