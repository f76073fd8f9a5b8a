//! Wallet connection.
//!
//! # Data Flow
//! ```text
//! Active network
//!     → provider.rs (connector builds a provider for that network)
//!     → eth_requestAccounts / eth_chainId
//!     → session.rs (address + chain ID, in memory only)
//! ```
//!
//! # Constraints
//! - One wallet at a time
//! - Nothing is signed and nothing is persisted

pub mod provider;
pub mod session;

use thiserror::Error;

pub use provider::{RpcWallet, RpcWalletConnector, WalletConnector, WalletProvider};
pub use session::Session;

/// Errors raised during the wallet handshake.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The wallet answered with an empty account list.
    #[error("No address returned from wallet")]
    NoAccounts,

    /// The wallet rejected or failed a request.
    #[error("Wallet request failed: {0}")]
    Request(String),
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;
