//! Chain and token registry.
//!
//! # Data Flow
//! ```text
//! static tables (tokens.rs, networks.rs)
//!     → pure lookups by symbol / chain ID
//!     → gas, receive, wallet and CLI callers
//! ```
//!
//! # Design Decisions
//! - Tables are `static` slices built at compile time; nothing mutates them
//! - Misses return `None` (or a placeholder link), never an error
//! - Iteration follows declaration order

pub mod networks;
pub mod tokens;
pub mod types;

pub use networks::{
    get_block_explorer_url, get_network_config, get_solana_explorer_url, is_testnet_chain,
    NetworkDescriptor, NETWORKS,
};
pub use tokens::{
    get_supported_tokens_for_network, get_token_config, TokenDescriptor, EVM_CONTRACT_CHAIN_ID, TOKENS,
};
pub use types::{ChainId, NativeCurrency, NetworkFamily, SolanaCluster};
