//! Gas policy resolution.
//!
//! Maps a chain ID to one of a small set of fee presets. Resolution never
//! fails: unknown chains use the ethereum preset so fee estimation always has
//! a usable value.

pub mod policy;

pub use policy::{
    gas_policy_for_network, get_gas_config, solana_fee_policy, EvmGasPolicy, GasPolicy,
    SolanaFeePolicy,
};
