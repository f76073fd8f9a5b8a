//! Connected wallet session.

use alloy::primitives::Address;

use crate::network::NetworkDescriptor;

/// The account and chain a wallet reported on connect.
///
/// Lives only in memory; a network toggle drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub address: Address,
    pub chain_id: u64,
}

impl Session {
    pub fn new(address: Address, chain_id: u64) -> Self {
        Self { address, chain_id }
    }

    /// Whether the wallet is on the same chain as `network`.
    pub fn matches(&self, network: &NetworkDescriptor) -> bool {
        self.chain_id == network.chain_id
    }
}
