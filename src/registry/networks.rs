//! Network registry keyed by chain ID.

use serde::Serialize;

use crate::registry::types::{ChainId, NativeCurrency, NetworkFamily, SolanaCluster};

/// Placeholder link returned when a chain has no registered explorer.
pub const EXPLORER_PLACEHOLDER: &str = "#";

/// Base URL of the Solana block explorer.
pub const SOLANA_EXPLORER_BASE: &str = "https://explorer.solana.com";

/// Static metadata for a supported network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkDescriptor {
    pub chain_id: ChainId,
    pub name: &'static str,
    pub short_name: &'static str,
    /// Ethereum or Solana; never `Both`.
    pub family: NetworkFamily,
    pub native_currency: NativeCurrency,
    pub rpc_url: &'static str,
    pub block_explorer: &'static str,
    pub is_testnet: bool,
}

const ETHER: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

const MATIC: NativeCurrency = NativeCurrency {
    name: "MATIC",
    symbol: "MATIC",
    decimals: 18,
};

const SOL: NativeCurrency = NativeCurrency {
    name: "Solana",
    symbol: "SOL",
    decimals: 9,
};

/// All supported networks. Chain IDs are unique.
pub static NETWORKS: &[NetworkDescriptor] = &[
    NetworkDescriptor {
        chain_id: ChainId(1),
        name: "Ethereum Mainnet",
        short_name: "eth",
        family: NetworkFamily::Ethereum,
        native_currency: ETHER,
        rpc_url: "https://eth.llamarpc.com",
        block_explorer: "https://etherscan.io",
        is_testnet: false,
    },
    NetworkDescriptor {
        chain_id: ChainId(5),
        name: "Goerli Testnet",
        short_name: "gor",
        family: NetworkFamily::Ethereum,
        native_currency: ETHER,
        rpc_url: "https://rpc.ankr.com/eth_goerli",
        block_explorer: "https://goerli.etherscan.io",
        is_testnet: true,
    },
    NetworkDescriptor {
        chain_id: ChainId(11155111),
        name: "Sepolia Testnet",
        short_name: "sep",
        family: NetworkFamily::Ethereum,
        native_currency: ETHER,
        rpc_url: "https://rpc.sepolia.org",
        block_explorer: "https://sepolia.etherscan.io",
        is_testnet: true,
    },
    NetworkDescriptor {
        chain_id: ChainId(137),
        name: "Polygon Mainnet",
        short_name: "matic",
        family: NetworkFamily::Ethereum,
        native_currency: MATIC,
        rpc_url: "https://polygon-rpc.com",
        block_explorer: "https://polygonscan.com",
        is_testnet: false,
    },
    NetworkDescriptor {
        chain_id: ChainId(80001),
        name: "Polygon Mumbai",
        short_name: "maticmum",
        family: NetworkFamily::Ethereum,
        native_currency: MATIC,
        rpc_url: "https://rpc-mumbai.maticvigil.com",
        block_explorer: "https://mumbai.polygonscan.com",
        is_testnet: true,
    },
    NetworkDescriptor {
        chain_id: ChainId(8453),
        name: "Base",
        short_name: "base",
        family: NetworkFamily::Ethereum,
        native_currency: ETHER,
        rpc_url: "https://mainnet.base.org",
        block_explorer: "https://basescan.org",
        is_testnet: false,
    },
    NetworkDescriptor {
        chain_id: ChainId(84532),
        name: "Base Sepolia",
        short_name: "basesep",
        family: NetworkFamily::Ethereum,
        native_currency: ETHER,
        rpc_url: "https://sepolia.base.org",
        block_explorer: "https://sepolia.basescan.org",
        is_testnet: true,
    },
    NetworkDescriptor {
        chain_id: ChainId(101),
        name: "Solana Mainnet Beta",
        short_name: "sol",
        family: NetworkFamily::Solana,
        native_currency: SOL,
        rpc_url: "https://api.mainnet-beta.solana.com",
        block_explorer: SOLANA_EXPLORER_BASE,
        is_testnet: false,
    },
    NetworkDescriptor {
        chain_id: ChainId(103),
        name: "Solana Devnet",
        short_name: "soldev",
        family: NetworkFamily::Solana,
        native_currency: SOL,
        rpc_url: "https://api.devnet.solana.com",
        block_explorer: SOLANA_EXPLORER_BASE,
        is_testnet: true,
    },
];

/// Look up a network by exact chain ID.
pub fn get_network_config(chain_id: u64) -> Option<&'static NetworkDescriptor> {
    NETWORKS.iter().find(|n| n.chain_id.0 == chain_id)
}

/// Whether the chain is a test network. Unregistered chains are not.
pub fn is_testnet_chain(chain_id: u64) -> bool {
    get_network_config(chain_id)
        .map(|n| n.is_testnet)
        .unwrap_or(false)
}

/// Transaction link on the chain's explorer, or [`EXPLORER_PLACEHOLDER`]
/// when the chain is unregistered.
pub fn get_block_explorer_url(chain_id: u64, tx_hash: &str) -> String {
    match get_network_config(chain_id) {
        Some(network) => format!("{}/tx/{}", network.block_explorer, tx_hash),
        None => EXPLORER_PLACEHOLDER.to_string(),
    }
}

/// Transaction link on the Solana explorer.
pub fn get_solana_explorer_url(signature: &str, cluster: SolanaCluster) -> String {
    let base = format!("{}/tx/{}", SOLANA_EXPLORER_BASE, signature);
    match cluster {
        SolanaCluster::Devnet => format!("{}?cluster=devnet", base),
        SolanaCluster::MainnetBeta => base,
    }
}

/// Networks belonging to a family, in declaration order.
pub fn networks_in_family(family: NetworkFamily) -> impl Iterator<Item = &'static NetworkDescriptor> {
    NETWORKS
        .iter()
        .filter(move |n| family == NetworkFamily::Both || n.family == family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_chain_ids_unique() {
        let ids: HashSet<u64> = NETWORKS.iter().map(|n| n.chain_id.0).collect();
        assert_eq!(ids.len(), NETWORKS.len());
    }

    #[test]
    fn test_network_family_is_concrete() {
        assert!(NETWORKS.iter().all(|n| n.family != NetworkFamily::Both));
    }

    #[test]
    fn test_get_network_config() {
        let mainnet = get_network_config(1).unwrap();
        assert_eq!(mainnet.short_name, "eth");
        assert_eq!(mainnet.native_currency.symbol, "ETH");
        assert!(get_network_config(999999).is_none());
    }

    #[test]
    fn test_is_testnet_chain() {
        assert!(is_testnet_chain(5));
        assert!(is_testnet_chain(80001));
        assert!(!is_testnet_chain(1));
        assert!(!is_testnet_chain(999999));
    }

    #[test]
    fn test_block_explorer_url() {
        assert_eq!(get_block_explorer_url(1, "0xabc"), "https://etherscan.io/tx/0xabc");
        assert_eq!(get_block_explorer_url(137, "0xdef"), "https://polygonscan.com/tx/0xdef");
        assert_eq!(get_block_explorer_url(999999, "0xabc"), "#");
    }

    #[test]
    fn test_solana_explorer_url() {
        let mainnet = get_solana_explorer_url("sig1", SolanaCluster::default());
        assert_eq!(mainnet, "https://explorer.solana.com/tx/sig1");
        assert!(!mainnet.contains("?cluster="));

        let devnet = get_solana_explorer_url("sig1", SolanaCluster::Devnet);
        assert!(devnet.ends_with("?cluster=devnet"));
    }

    #[test]
    fn test_networks_in_family() {
        let solana: Vec<u64> = networks_in_family(NetworkFamily::Solana)
            .map(|n| n.chain_id.0)
            .collect();
        assert_eq!(solana, vec![101, 103]);
        assert_eq!(networks_in_family(NetworkFamily::Both).count(), NETWORKS.len());
    }
}
