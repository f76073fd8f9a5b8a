//! Read-only Base wallet console.
//!
//! Connects a wallet, toggles between two networks and prints native
//! balances, the latest block and ERC-20 snapshots with explorer links.

pub mod blockchain;
pub mod config;
pub mod console;
pub mod network;
pub mod observability;
pub mod wallet;

pub use config::AppConfig;
pub use console::{Console, Report};
pub use network::NetworkDescriptor;
