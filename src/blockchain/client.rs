//! Read-only RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the active network's JSON-RPC endpoint
//! - Query chain state (block number, latest block, balances)
//! - Execute `eth_call` for contract reads
//! - Bound every request with the configured timeout

use alloy::eips::BlockNumberOrTag;
use alloy::network::{Ethereum, TransactionBuilder};
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::TransportResult;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{BlockSnapshot, ChainError, ChainResult};
use crate::network::NetworkDescriptor;

/// RPC client bound to a single network.
#[derive(Clone)]
pub struct ChainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    network: NetworkDescriptor,
    timeout_duration: Duration,
}

impl ChainClient {
    /// Create a client for `network`.
    ///
    /// No request is made here; an unreachable endpoint surfaces on the
    /// first read.
    pub fn new(network: &NetworkDescriptor, timeout_secs: u64) -> ChainResult<Self> {
        let url: url::Url = network.rpc_url.parse().map_err(|e| {
            ChainError::Rpc(format!("Invalid RPC URL '{}': {}", network.rpc_url, e))
        })?;
        let provider = RootProvider::<Ethereum>::new_http(url);

        tracing::debug!(
            network = %network.label,
            rpc_url = %network.rpc_url,
            timeout_secs,
            "Chain client created"
        );

        Ok(Self {
            provider: Arc::new(provider),
            network: network.clone(),
            timeout_duration: Duration::from_secs(timeout_secs),
        })
    }

    async fn request<F, T>(&self, method: &'static str, fut: F) -> ChainResult<T>
    where
        F: IntoFuture<Output = TransportResult<T>>,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                tracing::warn!(network = %self.network.label, method, error = %e, "RPC error");
                Err(ChainError::Rpc(e.to_string()))
            }
            Err(_) => {
                tracing::warn!(network = %self.network.label, method, "RPC timeout");
                Err(ChainError::Timeout(self.timeout_duration.as_secs()))
            }
        }
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> ChainResult<u64> {
        self.request("eth_blockNumber", self.provider.get_block_number())
            .await
    }

    /// Get the native balance of an address, in wei.
    pub async fn get_balance(&self, address: Address) -> ChainResult<U256> {
        let balance = self
            .request("eth_getBalance", self.provider.get_balance(address))
            .await?;
        tracing::debug!(network = %self.network.label, %address, %balance, "Balance fetched");
        Ok(balance)
    }

    /// Get header fields of the latest block.
    pub async fn get_latest_block(&self) -> ChainResult<BlockSnapshot> {
        let block = self
            .request(
                "eth_getBlockByNumber",
                self.provider.get_block_by_number(BlockNumberOrTag::Latest),
            )
            .await?
            .ok_or_else(|| ChainError::Rpc("Latest block not found".to_string()))?;

        Ok(BlockSnapshot {
            number: block.header.number,
            timestamp: block.header.timestamp,
            gas_used: block.header.gas_used,
            gas_limit: block.header.gas_limit,
        })
    }

    /// Execute a read-only call against the latest state.
    pub async fn call(&self, to: Address, input: Bytes) -> ChainResult<Bytes> {
        let tx = TransactionRequest::default().with_to(to).with_input(input);
        self.request("eth_call", self.provider.call(tx)).await
    }

    /// The network this client reads from.
    pub fn network(&self) -> &NetworkDescriptor {
        &self.network
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("network", &self.network.label)
            .field("rpc_url", &self.network.rpc_url)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
