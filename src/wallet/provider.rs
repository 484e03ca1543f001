//! Injected wallet provider capabilities.
//!
//! Providers are supplied by the host at runtime and may be missing. Nothing
//! here signs or holds keys; every call is delegated.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;

use crate::registry::networks::{get_network_config, NetworkDescriptor};
use crate::registry::types::NetworkFamily;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{0} wallet provider not available")]
    NotInjected(&'static str),

    #[error("chain {0} is not a registered EVM network")]
    UnknownChain(u64),

    #[error("provider rejected request: {0}")]
    Rejected(String),

    #[error("unexpected provider response: {0}")]
    Decode(String),
}

/// EIP-1193 style provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EthereumProvider: Send + Sync {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    fn is_metamask(&self) -> bool {
        false
    }

    fn is_coinbase_wallet(&self) -> bool {
        false
    }
}

/// Solana wallet adapter style provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SolanaProvider: Send + Sync {
    /// Connect and return the wallet's base58 public key.
    async fn connect(&self) -> Result<String, ProviderError>;

    async fn disconnect(&self) -> Result<(), ProviderError>;

    async fn sign_transaction(&self, transaction: Vec<u8>) -> Result<Vec<u8>, ProviderError>;

    fn public_key(&self) -> Option<String>;

    fn is_phantom(&self) -> bool {
        false
    }
}

/// Providers found in the host environment.
#[derive(Clone, Default)]
pub struct WalletProviders {
    ethereum: Option<Arc<dyn EthereumProvider>>,
    solana: Option<Arc<dyn SolanaProvider>>,
}

impl WalletProviders {
    pub fn new(
        ethereum: Option<Arc<dyn EthereumProvider>>,
        solana: Option<Arc<dyn SolanaProvider>>,
    ) -> Self {
        Self { ethereum, solana }
    }

    pub fn ethereum(&self) -> Result<&dyn EthereumProvider, ProviderError> {
        self.ethereum
            .as_deref()
            .ok_or(ProviderError::NotInjected("ethereum"))
    }

    pub fn solana(&self) -> Result<&dyn SolanaProvider, ProviderError> {
        self.solana
            .as_deref()
            .ok_or(ProviderError::NotInjected("solana"))
    }

    /// Families with an injected provider.
    pub fn available_families(&self) -> Vec<NetworkFamily> {
        let mut families = Vec::new();
        if self.ethereum.is_some() {
            families.push(NetworkFamily::Ethereum);
        }
        if self.solana.is_some() {
            families.push(NetworkFamily::Solana);
        }
        families
    }

    /// `eth_requestAccounts`.
    pub async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        let response = self
            .ethereum()?
            .request("eth_requestAccounts", json!([]))
            .await?;
        serde_json::from_value(response).map_err(|e| ProviderError::Decode(e.to_string()))
    }

    /// `wallet_switchEthereumChain` to a registered EVM chain.
    pub async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError> {
        let network = evm_network(chain_id)?;
        tracing::debug!(chain_id, name = network.name, "Switching wallet chain");
        self.ethereum()?
            .request(
                "wallet_switchEthereumChain",
                json!([{ "chainId": network.chain_id.to_hex() }]),
            )
            .await?;
        Ok(())
    }

    /// `wallet_addEthereumChain` built from the registry entry.
    pub async fn add_chain(&self, chain_id: u64) -> Result<(), ProviderError> {
        let params = add_chain_params(chain_id)?;
        self.ethereum()?
            .request("wallet_addEthereumChain", json!([params]))
            .await?;
        Ok(())
    }

    /// Connect the Solana wallet.
    pub async fn connect_solana(&self) -> Result<String, ProviderError> {
        let provider = self.solana()?;
        match provider.public_key() {
            Some(key) => Ok(key),
            None => provider.connect().await,
        }
    }
}

fn evm_network(chain_id: u64) -> Result<&'static NetworkDescriptor, ProviderError> {
    get_network_config(chain_id)
        .filter(|n| n.family == NetworkFamily::Ethereum)
        .ok_or(ProviderError::UnknownChain(chain_id))
}

/// EIP-3085 parameters for a registered EVM chain.
pub fn add_chain_params(chain_id: u64) -> Result<Value, ProviderError> {
    let network = evm_network(chain_id)?;
    Ok(json!({
        "chainId": network.chain_id.to_hex(),
        "chainName": network.name,
        "nativeCurrency": {
            "name": network.native_currency.name,
            "symbol": network.native_currency.symbol,
            "decimals": network.native_currency.decimals,
        },
        "rpcUrls": [network.rpc_url],
        "blockExplorerUrls": [network.block_explorer],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_providers() {
        let providers = WalletProviders::default();
        assert!(providers.available_families().is_empty());
        assert_eq!(
            providers.request_accounts().await,
            Err(ProviderError::NotInjected("ethereum"))
        );
        assert_eq!(
            providers.connect_solana().await,
            Err(ProviderError::NotInjected("solana"))
        );
    }

    #[tokio::test]
    async fn test_request_accounts() {
        let mut eth = MockEthereumProvider::new();
        eth.expect_request()
            .withf(|method, _| method.to_string() == "eth_requestAccounts")
            .returning(|_, _| Ok(json!(["0xabc"])));

        let providers = WalletProviders::new(Some(Arc::new(eth)), None);
        assert_eq!(providers.request_accounts().await.unwrap(), vec!["0xabc".to_string()]);
        assert_eq!(providers.available_families(), vec![NetworkFamily::Ethereum]);
    }

    #[tokio::test]
    async fn test_switch_chain_uses_hex_id() {
        let mut eth = MockEthereumProvider::new();
        eth.expect_request()
            .withf(|method, params| {
                method.to_string() == "wallet_switchEthereumChain" && *params == json!([{ "chainId": "0x89" }])
            })
            .times(1)
            .returning(|_, _| Ok(Value::Null));

        let providers = WalletProviders::new(Some(Arc::new(eth)), None);
        providers.switch_chain(137).await.unwrap();
    }

    #[tokio::test]
    async fn test_switch_to_solana_or_unknown_chain_rejected() {
        let mut eth = MockEthereumProvider::new();
        eth.expect_request().times(0);
        let providers = WalletProviders::new(Some(Arc::new(eth)), None);

        assert_eq!(providers.switch_chain(101).await, Err(ProviderError::UnknownChain(101)));
        assert_eq!(providers.add_chain(999999).await, Err(ProviderError::UnknownChain(999999)));
    }

    #[test]
    fn test_add_chain_params() {
        let params = add_chain_params(84532).unwrap();
        assert_eq!(params["chainId"], "0x14a34");
        assert_eq!(params["nativeCurrency"]["symbol"], "ETH");
        assert_eq!(params["blockExplorerUrls"][0], "https://sepolia.basescan.org");
    }

    #[tokio::test]
    async fn test_connect_solana_reuses_existing_key() {
        let mut sol = MockSolanaProvider::new();
        sol.expect_public_key().returning(|| Some("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin".into()));
        sol.expect_connect().times(0);

        let providers = WalletProviders::new(None, Some(Arc::new(sol)));
        assert!(providers.connect_solana().await.unwrap().starts_with("9xQe"));
    }

    #[tokio::test]
    async fn test_connect_solana_when_disconnected() {
        let mut sol = MockSolanaProvider::new();
        sol.expect_public_key().returning(|| None);
        sol.expect_connect().times(1).returning(|| Ok("pubkey".into()));

        let providers = WalletProviders::new(None, Some(Arc::new(sol)));
        assert_eq!(providers.connect_solana().await.unwrap(), "pubkey");
    }
}
