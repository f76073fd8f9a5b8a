//! Ashen Quarryloop
//!
//! Read-only Base wallet console.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI / stdin ──▶ console::repl ──▶ console::app ──┬──▶ wallet   (eth_requestAccounts, eth_chainId)
//!                                                    ├──▶ blockchain (balance, block, ERC-20 eth_call)
//!                                                    └──▶ network  (active network, explorer links)
//!   stdout   ◀── console::report ◀──────────────────┘
//!
//!   config (TOML) ──▶ networks, RPC timeout, wallet endpoint, log level
//!   observability ──▶ tracing on stderr
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::BufReader;

use quarryloop::config::{self, AppConfig, Overrides};
use quarryloop::console::{repl, Console, Report};
use quarryloop::observability;
use quarryloop::wallet::RpcWalletConnector;

#[derive(Parser)]
#[command(name = "quarryloop")]
#[command(about = "Read-only Base wallet console", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "QUARRYLOOP_CONFIG")]
    config: Option<PathBuf>,

    /// Start on the network with this chain ID instead of the first one.
    #[arg(long)]
    chain_id: Option<u64>,

    /// Wallet JSON-RPC endpoint (overrides `wallet.endpoint`).
    #[arg(long)]
    wallet_endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console (default)
    Console,
    /// Connect the wallet and show its balance
    Connect,
    /// Show the latest block
    Block,
    /// Read the ETH balance of an address
    Balance { address: Option<String> },
    /// Read ERC-20 metadata and a holder's balance
    Erc20 { token: String, holder: Option<String> },
    /// List configured networks
    Networks,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = Overrides {
        wallet_endpoint: cli.wallet_endpoint,
    };
    let config: AppConfig = config::load_or_default(cli.config.as_deref(), overrides)?;

    observability::init_tracing(&config.observability.log_level);

    tracing::info!(
        networks = config.networks.len(),
        rpc_timeout_secs = config.rpc.timeout_secs,
        wallet_endpoint = ?config.wallet.endpoint,
        "Configuration loaded"
    );

    let connector = RpcWalletConnector::new(config.app.clone(), config.wallet.endpoint.clone());
    let mut console = Console::new(&config, connector)?;
    if let Some(chain_id) = cli.chain_id {
        console.select_chain(chain_id)?;
    }

    let report = match cli.command.unwrap_or(Commands::Console) {
        Commands::Console => {
            let stdin = BufReader::new(tokio::io::stdin());
            repl::run(&mut console, stdin, tokio::io::stdout()).await?;
            return Ok(());
        }
        Commands::Connect => Report::from_result(console.connect_wallet().await),
        Commands::Block => Report::from_result(console.latest_block().await),
        Commands::Balance { address } => {
            let target = console.resolve_target(address.as_deref().unwrap_or_default());
            Report::from_result(console.read_eth_balance(&target).await)
        }
        Commands::Erc20 { token, holder } => {
            let holder = console.resolve_target(holder.as_deref().unwrap_or_default());
            Report::from_result(console.read_erc20(token.trim(), &holder).await)
        }
        Commands::Networks => {
            let active = console.active().chain_id;
            let lines = console
                .networks()
                .iter()
                .map(|n| {
                    let marker = if n.chain_id == active { "*" } else { " " };
                    format!("{} {} (chainId {}) {} {}", marker, n.label, n.chain_id, n.rpc_url, n.explorer_url)
                })
                .collect();
            Report::new(lines)
        }
    };

    println!("{}", report);
    Ok(())
}
