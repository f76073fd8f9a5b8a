//! Wallet providers.
//!
//! A connector builds a provider for the active network; the provider
//! answers the two handshake requests (`eth_requestAccounts`, `eth_chainId`).

use alloy::network::Ethereum;
use alloy::providers::{Provider, RootProvider};
use std::future::Future;

use crate::config::AppMetadata;
use crate::network::NetworkDescriptor;
use crate::wallet::{WalletError, WalletResult};

/// Handshake surface of a connected wallet.
pub trait WalletProvider {
    /// Ask the wallet for its accounts, prompting the user if needed.
    fn request_accounts(&self) -> impl Future<Output = WalletResult<Vec<String>>> + Send;

    /// The chain the wallet is currently on.
    fn chain_id(&self) -> impl Future<Output = WalletResult<u64>> + Send;
}

/// Builds wallet providers bound to a network.
pub trait WalletConnector {
    type Provider: WalletProvider;

    fn make_provider(&self, network: &NetworkDescriptor) -> WalletResult<Self::Provider>;
}

/// Connector that speaks JSON-RPC to a wallet endpoint.
#[derive(Debug, Clone)]
pub struct RpcWalletConnector {
    app: AppMetadata,
    endpoint: Option<String>,
}

impl RpcWalletConnector {
    /// Create a connector. Without an `endpoint`, each provider targets the
    /// RPC URL of the network it is made for.
    pub fn new(app: AppMetadata, endpoint: Option<String>) -> Self {
        Self { app, endpoint }
    }
}

impl WalletConnector for RpcWalletConnector {
    type Provider = RpcWallet;

    fn make_provider(&self, network: &NetworkDescriptor) -> WalletResult<RpcWallet> {
        let endpoint = self.endpoint.as_deref().unwrap_or(&network.rpc_url);
        let url: url::Url = endpoint.parse().map_err(|e| {
            WalletError::Request(format!("Invalid wallet endpoint '{}': {}", endpoint, e))
        })?;

        tracing::info!(
            app = %self.app.name,
            logo_url = %self.app.logo_url,
            endpoint = %endpoint,
            chain_id = network.chain_id,
            "Wallet provider created"
        );

        Ok(RpcWallet {
            provider: RootProvider::new_http(url),
        })
    }
}

/// Wallet reached over JSON-RPC.
#[derive(Debug, Clone)]
pub struct RpcWallet {
    provider: RootProvider<Ethereum>,
}

impl WalletProvider for RpcWallet {
    async fn request_accounts(&self) -> WalletResult<Vec<String>> {
        self.provider
            .raw_request::<_, Vec<String>>("eth_requestAccounts".into(), ())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "eth_requestAccounts failed");
                WalletError::Request(e.to_string())
            })
    }

    async fn chain_id(&self) -> WalletResult<u64> {
        self.provider.get_chain_id().await.map_err(|e| {
            tracing::warn!(error = %e, "eth_chainId failed");
            WalletError::Request(e.to_string())
        })
    }
}
