//! Token registry keyed by symbol.

use serde::Serialize;

use crate::registry::types::NetworkFamily;

/// Chain on which every EVM `address` in [`TOKENS`] is deployed.
pub const EVM_CONTRACT_CHAIN_ID: u64 = 1;

/// Static metadata for a supported token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenDescriptor {
    /// Unique symbol, matched case-insensitively.
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimals: u8,
    /// Contract or mint address: the Ethereum mainnet contract for EVM
    /// tokens, the SPL mint for Solana-only tokens. `None` exactly when the
    /// token is native.
    pub address: Option<&'static str>,
    /// SPL mint for tokens that can be received on Solana.
    pub solana_mint: Option<&'static str>,
    pub network: NetworkFamily,
    pub is_native: bool,
    pub icon: &'static str,
    pub color: &'static str,
}

/// All supported tokens, in display order.
pub static TOKENS: &[TokenDescriptor] = &[
    TokenDescriptor {
        symbol: "ETH",
        name: "Ethereum",
        decimals: 18,
        address: None,
        solana_mint: None,
        network: NetworkFamily::Ethereum,
        is_native: true,
        icon: "Ξ",
        color: "#627EEA",
    },
    TokenDescriptor {
        symbol: "USDC",
        name: "USD Coin",
        decimals: 6,
        address: Some("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
        solana_mint: Some("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"),
        network: NetworkFamily::Both,
        is_native: false,
        icon: "$",
        color: "#2775CA",
    },
    TokenDescriptor {
        symbol: "USDT",
        name: "Tether USD",
        decimals: 6,
        address: Some("0xdAC17F958D2ee523a2206206994597C13D831ec7"),
        solana_mint: None,
        network: NetworkFamily::Ethereum,
        is_native: false,
        icon: "₮",
        color: "#26A17B",
    },
    TokenDescriptor {
        symbol: "DAI",
        name: "Dai Stablecoin",
        decimals: 18,
        address: Some("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
        solana_mint: None,
        network: NetworkFamily::Ethereum,
        is_native: false,
        icon: "◈",
        color: "#F5AC37",
    },
    TokenDescriptor {
        symbol: "MATIC",
        name: "Polygon",
        decimals: 18,
        address: Some("0x7D1AfA7B718fb893dB30A3aBc0Cfc608AaCfeBB0"),
        solana_mint: None,
        network: NetworkFamily::Ethereum,
        is_native: false,
        icon: "⬡",
        color: "#8247E5",
    },
    TokenDescriptor {
        symbol: "SOL",
        name: "Solana",
        decimals: 9,
        address: None,
        solana_mint: None,
        network: NetworkFamily::Solana,
        is_native: true,
        icon: "◎",
        color: "#14F195",
    },
    TokenDescriptor {
        symbol: "BONK",
        name: "Bonk",
        decimals: 5,
        address: Some("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263"),
        solana_mint: Some("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263"),
        network: NetworkFamily::Solana,
        is_native: false,
        icon: "🐕",
        color: "#F8A11B",
    },
];

/// Case-insensitive lookup by symbol.
pub fn get_token_config(symbol: &str) -> Option<&'static TokenDescriptor> {
    TOKENS.iter().find(|t| t.symbol.eq_ignore_ascii_case(symbol))
}

/// Tokens declared for `network` or for both families, in declaration order.
pub fn get_supported_tokens_for_network(network: NetworkFamily) -> Vec<&'static TokenDescriptor> {
    TOKENS
        .iter()
        .filter(|t| t.network == network || t.network == NetworkFamily::Both)
        .collect()
}
