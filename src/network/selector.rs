//! Active network selection.

use crate::network::descriptor::NetworkDescriptor;

/// Holds the network pair and which of the two is active.
#[derive(Debug, Clone)]
pub struct NetworkSelector {
    networks: Vec<NetworkDescriptor>,
    active: usize,
}

impl NetworkSelector {
    /// Create a selector with the first network active.
    ///
    /// Returns `None` if `networks` is empty.
    pub fn new(networks: Vec<NetworkDescriptor>) -> Option<Self> {
        if networks.is_empty() {
            return None;
        }
        Some(Self { networks, active: 0 })
    }

    /// The currently active network.
    pub fn active(&self) -> &NetworkDescriptor {
        &self.networks[self.active]
    }

    /// All configured networks, in configuration order.
    pub fn networks(&self) -> &[NetworkDescriptor] {
        &self.networks
    }

    /// Switch networks: from the first to the second, from anything else
    /// back to the first.
    pub fn toggle(&mut self) -> &NetworkDescriptor {
        self.active = if self.active == 0 && self.networks.len() > 1 {
            1
        } else {
            0
        };
        self.active()
    }

    /// Make the network with `chain_id` active.
    pub fn select_chain(&mut self, chain_id: u64) -> Option<&NetworkDescriptor> {
        let idx = self.networks.iter().position(|n| n.chain_id == chain_id)?;
        self.active = idx;
        Some(self.active())
    }
}
