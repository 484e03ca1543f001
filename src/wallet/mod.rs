//! Browser-injected wallet providers.
//!
//! The host supplies an Ethereum-style provider (`request`) and/or a
//! Solana-style provider (`connect`/`disconnect`/`signTransaction`). Either
//! may be absent; callers go through [`WalletProviders`] and get
//! `ProviderError::NotInjected` instead of assuming presence.

pub mod provider;

pub use provider::{
    add_chain_params, EthereumProvider, ProviderError, SolanaProvider, WalletProviders,
};
