//! Shared registry types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ChainId {
    /// `0x`-prefixed hex form used by injected EVM providers.
    pub fn to_hex(self) -> String {
        format!("{:#x}", self.0)
    }
}

/// Chain family a token or network belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkFamily {
    Ethereum,
    Solana,
    /// Token is usable on both families.
    Both,
}

impl NetworkFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkFamily::Ethereum => "ethereum",
            NetworkFamily::Solana => "solana",
            NetworkFamily::Both => "both",
        }
    }
}

impl fmt::Display for NetworkFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown network family: {0}")]
pub struct UnknownNetworkFamily(pub String);

impl FromStr for NetworkFamily {
    type Err = UnknownNetworkFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ethereum" => Ok(NetworkFamily::Ethereum),
            "solana" => Ok(NetworkFamily::Solana),
            "both" => Ok(NetworkFamily::Both),
            _ => Err(UnknownNetworkFamily(s.to_string())),
        }
    }
}

/// Native currency of a network (name/symbol/decimals triple).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// Solana explorer cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolanaCluster {
    #[default]
    MainnetBeta,
    Devnet,
}

impl FromStr for SolanaCluster {
    type Err = std::convert::Infallible;

    /// Anything other than `devnet` resolves to mainnet-beta.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("devnet") {
            Ok(SolanaCluster::Devnet)
        } else {
            Ok(SolanaCluster::MainnetBeta)
        }
    }
}
