//! Payment-request URIs encoded into the receive page's QR code.
//!
//! - EVM native: `ethereum:<recipient>@<chainId>?value=<wei>` (EIP-681)
//! - ERC-20: `ethereum:<contract>@<chainId>/transfer?address=<recipient>&uint256=<units>`
//! - Solana: `solana:<recipient>?amount=<decimal>&spl-token=<mint>` (Solana Pay)
//!
//! Token contract addresses are the registry's single Ethereum mainnet
//! deployment and SPL mints are mainnet-beta, so token requests are only
//! built for those two chains.

use alloy::primitives::utils::parse_units;
use alloy::primitives::{Address, U256};
use std::str::FromStr;
use thiserror::Error;

use crate::registry::networks::{get_network_config, NetworkDescriptor};
use crate::registry::tokens::{TokenDescriptor, EVM_CONTRACT_CHAIN_ID};
use crate::registry::types::NetworkFamily;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentRequestError {
    #[error("chain {0} is not registered")]
    UnknownChain(u64),

    #[error("{symbol} cannot be received on {network}")]
    UnsupportedToken { symbol: String, network: String },

    #[error("{symbol} has no contract address on chain {chain_id}")]
    MissingContract { symbol: String, chain_id: u64 },

    #[error("invalid recipient address '{0}'")]
    InvalidRecipient(String),

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
}

/// Build the URI for receiving `amount` (in display units) of `token`.
pub fn payment_request_uri(
    token: &TokenDescriptor,
    chain_id: u64,
    recipient: &str,
    amount: Option<&str>,
) -> Result<String, PaymentRequestError> {
    let network = get_network_config(chain_id).ok_or(PaymentRequestError::UnknownChain(chain_id))?;

    if token.network != NetworkFamily::Both && token.network != network.family {
        return Err(unsupported(token, network));
    }

    let uri = match network.family {
        NetworkFamily::Solana => solana_uri(token, network, recipient, amount)?,
        _ => evm_uri(token, network, recipient, amount)?,
    };
    tracing::debug!(symbol = token.symbol, chain_id, %uri, "Built payment request");
    Ok(uri)
}

fn unsupported(token: &TokenDescriptor, network: &NetworkDescriptor) -> PaymentRequestError {
    PaymentRequestError::UnsupportedToken {
        symbol: token.symbol.to_string(),
        network: network.name.to_string(),
    }
}

fn evm_uri(
    token: &TokenDescriptor,
    network: &NetworkDescriptor,
    recipient: &str,
    amount: Option<&str>,
) -> Result<String, PaymentRequestError> {
    let recipient = Address::from_str(recipient.trim())
        .map_err(|_| PaymentRequestError::InvalidRecipient(recipient.to_string()))?;
    let base_units = amount
        .map(|a| to_base_units(a, token.decimals))
        .transpose()?;

    let pays_native = token.symbol.eq_ignore_ascii_case(network.native_currency.symbol);
    if pays_native {
        let mut uri = format!("ethereum:{}@{}", recipient, network.chain_id);
        if let Some(value) = base_units {
            uri.push_str(&format!("?value={}", value));
        }
        return Ok(uri);
    }
    if token.is_native {
        // Native asset of a different chain.
        return Err(unsupported(token, network));
    }

    let missing = || PaymentRequestError::MissingContract {
        symbol: token.symbol.to_string(),
        chain_id: network.chain_id.0,
    };
    if network.chain_id.0 != EVM_CONTRACT_CHAIN_ID {
        return Err(missing());
    }
    let contract = token
        .address
        .and_then(|a| Address::from_str(a).ok())
        .ok_or_else(missing)?;
    let mut uri = format!(
        "ethereum:{}@{}/transfer?address={}",
        contract, network.chain_id, recipient
    );
    if let Some(units) = base_units {
        uri.push_str(&format!("&uint256={}", units));
    }
    Ok(uri)
}

fn solana_uri(
    token: &TokenDescriptor,
    network: &NetworkDescriptor,
    recipient: &str,
    amount: Option<&str>,
) -> Result<String, PaymentRequestError> {
    let recipient = recipient.trim();
    if !is_solana_address(recipient) {
        return Err(PaymentRequestError::InvalidRecipient(recipient.to_string()));
    }

    let mut params = Vec::new();
    if let Some(amount) = amount {
        // Validate against the token's precision, emit as written.
        to_base_units(amount, token.decimals)?;
        params.push(format!("amount={}", amount.trim()));
    }
    if !token.is_native {
        // Registered mints are mainnet-beta deployments.
        let mint = token
            .solana_mint
            .filter(|_| !network.is_testnet)
            .ok_or_else(|| PaymentRequestError::MissingContract {
                symbol: token.symbol.to_string(),
                chain_id: network.chain_id.0,
            })?;
        params.push(format!("spl-token={}", mint));
    }

    let mut uri = format!("solana:{}", recipient);
    if !params.is_empty() {
        uri.push('?');
        uri.push_str(&params.join("&"));
    }
    Ok(uri)
}

/// Decimal display amount → integer base units.
///
/// Zero, negatives and amounts with more fractional digits than `decimals`
/// are rejected.
pub fn to_base_units(amount: &str, decimals: u8) -> Result<U256, PaymentRequestError> {
    let invalid = || PaymentRequestError::InvalidAmount(amount.to_string());
    let amount = amount.trim();
    if let Some((_, fraction)) = amount.split_once('.') {
        if fraction.len() > usize::from(decimals) {
            return Err(invalid());
        }
    }
    let parsed = parse_units(amount, decimals).map_err(|_| invalid())?;
    if parsed.is_negative() {
        return Err(invalid());
    }
    let units = parsed.get_absolute();
    if units.is_zero() {
        return Err(invalid());
    }
    Ok(units)
}

/// Base58 string decoding to a 32-byte public key.
pub fn is_solana_address(value: &str) -> bool {
    bs58::decode(value)
        .into_vec()
        .map(|bytes| bytes.len() == 32)
        .unwrap_or(false)
}
