//! Network descriptors and explorer links.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Static description of one chain the console can talk to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkDescriptor {
    /// Short identifier (e.g. "base-sepolia").
    pub key: String,

    /// Display label.
    pub label: String,

    /// EIP-155 chain ID.
    pub chain_id: u64,

    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Block explorer base URL.
    pub explorer_url: String,

    /// Explorer display name used as the link prefix in reports.
    #[serde(default = "default_explorer_name")]
    pub explorer_name: String,
}

fn default_explorer_name() -> String {
    "Basescan".to_string()
}

impl NetworkDescriptor {
    /// Base Sepolia testnet.
    pub fn base_sepolia() -> Self {
        Self {
            key: "base-sepolia".to_string(),
            label: "Base Sepolia".to_string(),
            chain_id: 84532,
            rpc_url: "https://sepolia.base.org".to_string(),
            explorer_url: "https://sepolia.basescan.org".to_string(),
            explorer_name: default_explorer_name(),
        }
    }

    /// Base mainnet.
    pub fn base_mainnet() -> Self {
        Self {
            key: "base-mainnet".to_string(),
            label: "Base Mainnet".to_string(),
            chain_id: 8453,
            rpc_url: "https://mainnet.base.org".to_string(),
            explorer_url: "https://basescan.org".to_string(),
            explorer_name: default_explorer_name(),
        }
    }

    /// The default pair, testnet first.
    pub fn base_defaults() -> Vec<Self> {
        vec![Self::base_sepolia(), Self::base_mainnet()]
    }

    /// Explorer page for an address.
    pub fn address_url(&self, address: &Address) -> String {
        format!("{}/address/{}", self.explorer_base(), address)
    }

    /// Explorer page for a block.
    pub fn block_url(&self, number: u64) -> String {
        format!("{}/block/{}", self.explorer_base(), number)
    }

    fn explorer_base(&self) -> &str {
        self.explorer_url.trim_end_matches('/')
    }
}
