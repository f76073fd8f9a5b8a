//! Console state and actions.
//!
//! Each action backs one console command and produces a [`Report`].
//! Failures propagate as [`AppError`] and are rendered by the caller as a
//! single `Error: <message>` line.

use crate::blockchain::{erc20, format_ether, format_units, parse_address, ChainClient};
use crate::config::AppConfig;
use crate::console::report::Report;
use crate::console::{AppError, AppResult};
use crate::network::{NetworkDescriptor, NetworkSelector};
use crate::wallet::{Session, WalletConnector, WalletError, WalletProvider};

/// Process-wide console state: active network, wallet session and the
/// connector used to reach the wallet.
pub struct Console<W: WalletConnector> {
    selector: NetworkSelector,
    session: Option<Session>,
    connector: W,
    rpc_timeout_secs: u64,
}

impl<W: WalletConnector> Console<W> {
    /// Create a console on the first configured network.
    pub fn new(config: &AppConfig, connector: W) -> AppResult<Self> {
        let selector = NetworkSelector::new(config.networks.clone())
            .ok_or_else(|| AppError::Config("no networks configured".to_string()))?;
        Ok(Self {
            selector,
            session: None,
            connector,
            rpc_timeout_secs: config.rpc.timeout_secs,
        })
    }

    pub fn active(&self) -> &NetworkDescriptor {
        self.selector.active()
    }

    pub fn networks(&self) -> &[NetworkDescriptor] {
        self.selector.networks()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Start on the network with `chain_id` instead of the first one.
    ///
    /// An unknown chain ID leaves both the active network and the session
    /// untouched.
    pub fn select_chain(&mut self, chain_id: u64) -> AppResult<&NetworkDescriptor> {
        let network = self
            .selector
            .select_chain(chain_id)
            .ok_or(AppError::UnknownChain(chain_id))?;
        self.session = None;
        Ok(network)
    }

    fn client(&self) -> AppResult<ChainClient> {
        Ok(ChainClient::new(self.active(), self.rpc_timeout_secs)?)
    }

    /// Initial banner.
    pub fn ready(&self) -> Report {
        Report::new(vec![
            "Ready".to_string(),
            format!("Active network: {}", self.active().label),
            "Connect wallet to begin (read-only).".to_string(),
        ])
    }

    /// Ask the wallet for an account, store the session and show the
    /// account's balance alongside the latest block number.
    pub async fn connect_wallet(&mut self) -> AppResult<Report> {
        let network = self.active().clone();
        let provider = self.connector.make_provider(&network)?;

        let accounts = provider.request_accounts().await?;
        let first = accounts.into_iter().next().ok_or(WalletError::NoAccounts)?;
        let chain_id = provider.chain_id().await?;

        let session = Session::new(parse_address(&first)?, chain_id);
        self.session = Some(session);

        tracing::info!(
            address = %session.address,
            chain_id,
            network = %network.label,
            "Wallet connected"
        );

        let client = self.client()?;
        let (balance, block_number) = tokio::try_join!(
            client.get_balance(session.address),
            client.get_block_number(),
        )?;

        let mut report = Report::new(vec![
            "Wallet connected".to_string(),
            format!("Network: {}", network.label),
            format!("chainId: {}", session.chain_id),
            format!("Address: {}", session.address),
            format!("ETH balance: {} ETH", format_ether(balance)),
            format!("Latest block: {}", block_number),
            format!(
                "{}: {}",
                network.explorer_name,
                network.address_url(&session.address)
            ),
        ]);

        if !session.matches(&network) {
            tracing::warn!(
                wallet_chain_id = session.chain_id,
                expected = network.chain_id,
                "Wallet is on a different chain than the active network"
            );
            report.push(format!(
                "Warning: wallet chainId {} does not match {} ({})",
                session.chain_id, network.label, network.chain_id
            ));
        }

        Ok(report)
    }

    /// Flip to the other network and drop the session.
    pub fn toggle_network(&mut self) -> Report {
        let label = self.selector.toggle().label.clone();
        self.session = None;
        tracing::info!(network = %label, "Network switched");
        Report::new(vec![format!(
            "Switched to {}. Reconnect wallet to refresh.",
            label
        )])
    }

    /// Snapshot of the latest block header.
    pub async fn latest_block(&self) -> AppResult<Report> {
        let network = self.active();
        let block = self.client()?.get_latest_block().await?;

        Ok(Report::new(vec![
            "Latest block snapshot".to_string(),
            format!("Network: {}", network.label),
            format!("Block: {}", block.number),
            format!("Timestamp: {}", block.timestamp),
            format!("Gas used: {}", block.gas_used),
            format!("Gas limit: {}", block.gas_limit),
            format!("{}: {}", network.explorer_name, network.block_url(block.number)),
        ]))
    }

    /// Native balance of `target`.
    pub async fn read_eth_balance(&self, target: &str) -> AppResult<Report> {
        let address = parse_address(target)?;
        let network = self.active();
        let balance = self.client()?.get_balance(address).await?;

        Ok(Report::new(vec![
            "ETH balance lookup".to_string(),
            format!("Network: {}", network.label),
            format!("Address: {}", address),
            format!("Balance: {} ETH", format_ether(balance)),
            format!("{}: {}", network.explorer_name, network.address_url(&address)),
        ]))
    }

    /// Token metadata and `holder`'s balance of `token`.
    pub async fn read_erc20(&self, token: &str, holder: &str) -> AppResult<Report> {
        let token = parse_address(token)?;
        let holder = parse_address(holder)?;
        let network = self.active();

        let snapshot = erc20::read_snapshot(&self.client()?, token, holder).await?;
        let total_supply = format_units(snapshot.total_supply, snapshot.decimals);
        let holder_balance = format_units(snapshot.holder_balance, snapshot.decimals);

        Ok(Report::new(vec![
            "ERC-20 snapshot".to_string(),
            format!("Network: {}", network.label),
            format!("Token: {}", token),
            format!("Holder: {}", holder),
            format!("Name: {}", snapshot.name),
            format!("Symbol: {}", snapshot.symbol),
            format!("Decimals: {}", snapshot.decimals),
            format!("Total supply: {}", total_supply),
            format!("Holder balance: {}", holder_balance),
            format!("Token: {}", network.address_url(&token)),
            format!("Holder: {}", network.address_url(&holder)),
        ]))
    }

    /// Resolve the address to query: the trimmed input if non-empty,
    /// otherwise the connected account, otherwise an empty string.
    pub fn resolve_target(&self, input: &str) -> String {
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
        self.session
            .map(|s| s.address.to_string())
            .unwrap_or_default()
    }

    /// Describe the active network and session.
    pub fn status(&self) -> Report {
        let network = self.active();
        let mut report = Report::new(vec![
            format!("Active network: {}", network.label),
            format!("chainId: {}", network.chain_id),
            format!("RPC: {}", network.rpc_url),
        ]);
        match &self.session {
            Some(session) => {
                report.push(format!("Wallet: {}", session.address));
                report.push(format!("Wallet chainId: {}", session.chain_id));
            }
            None => report.push("Wallet: not connected"),
        }
        report
    }
}
