//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the console.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::network::NetworkDescriptor;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Metadata presented to the wallet on connect.
    pub app: AppMetadata,

    /// JSON-RPC request settings.
    pub rpc: RpcConfig,

    /// Wallet connection settings.
    pub wallet: WalletConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// The two networks the console toggles between. The first one is
    /// active on startup.
    pub networks: Vec<NetworkDescriptor>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppMetadata::default(),
            rpc: RpcConfig::default(),
            wallet: WalletConfig::default(),
            observability: ObservabilityConfig::default(),
            networks: NetworkDescriptor::base_defaults(),
        }
    }
}

/// Application metadata shown by the wallet during the handshake.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,

    /// Application logo URL.
    pub logo_url: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "Ashen Quarryloop (Built for Base)".to_string(),
            logo_url: "https://base.org/favicon.ico".to_string(),
        }
    }
}

/// JSON-RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

/// Wallet connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WalletConfig {
    /// JSON-RPC endpoint of the wallet (e.g. a local signer). When unset,
    /// wallet requests go to the active network's RPC URL.
    pub endpoint: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
