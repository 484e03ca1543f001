//! Fee-policy presets and chain → preset resolution.

use alloy::primitives::U256;
use serde::{Serialize, Serializer};

use crate::registry::networks::NetworkDescriptor;
use crate::registry::types::NetworkFamily;

/// Gas parameters for an EVM chain family. Fee bounds are in wei.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvmGasPolicy {
    pub name: &'static str,
    /// Limit for a plain native transfer.
    pub gas_limit: u64,
    /// Limit for an ERC-20 `transfer`.
    pub erc20_gas_limit: u64,
    #[serde(serialize_with = "as_decimal")]
    pub max_priority_fee_per_gas: U256,
    #[serde(serialize_with = "as_decimal")]
    pub max_fee_per_gas: U256,
}

/// Fee parameters for Solana.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolanaFeePolicy {
    pub name: &'static str,
    pub lamports_per_signature: u64,
    pub priority_fee_multiplier: f64,
}

/// Either kind of preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GasPolicy {
    Evm(&'static EvmGasPolicy),
    Solana(&'static SolanaFeePolicy),
}

const fn wei(amount: u64) -> U256 {
    U256::from_limbs([amount, 0, 0, 0])
}

pub static ETHEREUM_GAS: EvmGasPolicy = EvmGasPolicy {
    name: "ethereum",
    gas_limit: 21_000,
    erc20_gas_limit: 65_000,
    max_priority_fee_per_gas: wei(2_000_000_000),
    max_fee_per_gas: wei(100_000_000_000),
};

pub static POLYGON_GAS: EvmGasPolicy = EvmGasPolicy {
    name: "polygon",
    gas_limit: 21_000,
    erc20_gas_limit: 65_000,
    max_priority_fee_per_gas: wei(30_000_000_000),
    max_fee_per_gas: wei(500_000_000_000),
};

pub static BASE_GAS: EvmGasPolicy = EvmGasPolicy {
    name: "base",
    gas_limit: 21_000,
    erc20_gas_limit: 65_000,
    max_priority_fee_per_gas: wei(1_000_000),
    max_fee_per_gas: wei(1_000_000_000),
};

pub static SOLANA_FEES: SolanaFeePolicy = SolanaFeePolicy {
    name: "solana",
    lamports_per_signature: 5_000,
    priority_fee_multiplier: 1.5,
};

/// Resolve the EVM preset for a chain.
///
/// Unrecognized chains get the ethereum preset. A returned ethereum preset
/// does not mean the chain is Ethereum.
pub fn get_gas_config(chain_id: u64) -> &'static EvmGasPolicy {
    match chain_id {
        1 | 5 => &ETHEREUM_GAS,
        137 | 80001 => &POLYGON_GAS,
        8453 | 84532 => &BASE_GAS,
        _ => {
            tracing::debug!(chain_id, "No gas preset for chain, using ethereum defaults");
            &ETHEREUM_GAS
        }
    }
}

pub fn solana_fee_policy() -> &'static SolanaFeePolicy {
    &SOLANA_FEES
}

/// Preset for a registered network, choosing by family.
pub fn gas_policy_for_network(network: &NetworkDescriptor) -> GasPolicy {
    match network.family {
        NetworkFamily::Solana => GasPolicy::Solana(solana_fee_policy()),
        _ => GasPolicy::Evm(get_gas_config(network.chain_id.0)),
    }
}

impl EvmGasPolicy {
    /// Upper bound on the fee of a transfer, in wei.
    pub fn estimate_max_fee(&self, is_erc20: bool) -> U256 {
        let limit = if is_erc20 { self.erc20_gas_limit } else { self.gas_limit };
        U256::from(limit).saturating_mul(self.max_fee_per_gas)
    }
}

impl SolanaFeePolicy {
    /// Fee in lamports for a transaction carrying `signatures` signatures,
    /// with the priority multiplier applied and rounded up.
    pub fn estimate_fee_lamports(&self, signatures: u64) -> u64 {
        let base = self.lamports_per_signature.saturating_mul(signatures);
        (base as f64 * self.priority_fee_multiplier).ceil() as u64
    }
}

fn as_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}
