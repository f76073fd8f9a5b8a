//! Interactive console loop.
//!
//! Reads one command per line from stdin and prints the resulting report
//! to stdout. The address and token inputs persist between commands.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::console::app::Console;
use crate::console::report::Report;
use crate::wallet::WalletConnector;

pub const TITLE: &str = "Ashen Quarryloop";
pub const BLURB: &str = "Built for Base: wallet connection, chainId validation, and read-only \
ETH + ERC-20 inspection with Basescan references.";

const HELP: &str = "\
Commands:
  connect                  Connect wallet
  toggle                   Toggle network
  block                    Latest block
  balance [address]        Read ETH balance (defaults to address input, then wallet)
  erc20 [token] [holder]   Read ERC-20 (defaults to token/address inputs, then wallet)
  address <0x..|->         Set or clear the address input
  token <0x..|->           Set or clear the token input
  status                   Show network, wallet and inputs
  help                     Show this help
  quit                     Exit";

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Connect,
    Toggle,
    Block,
    Balance(Option<String>),
    Erc20 {
        token: Option<String>,
        holder: Option<String>,
    },
    SetAddress(Option<String>),
    SetToken(Option<String>),
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse a console line. Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let args: Vec<String> = words.map(str::to_string).collect();

        let command = match (head.to_ascii_lowercase().as_str(), args.len()) {
            ("connect", 0) => Command::Connect,
            ("toggle", 0) => Command::Toggle,
            ("block", 0) => Command::Block,
            ("balance", 0 | 1) => Command::Balance(args.into_iter().next()),
            ("erc20", 0..=2) => {
                let mut args = args.into_iter();
                Command::Erc20 {
                    token: args.next(),
                    holder: args.next(),
                }
            }
            ("address", 1) => Command::SetAddress(input_value(&args[0])),
            ("token", 1) => Command::SetToken(input_value(&args[0])),
            ("status", 0) => Command::Status,
            ("help" | "?", 0) => Command::Help,
            ("quit" | "exit", 0) => Command::Quit,
            (
                "connect" | "toggle" | "block" | "balance" | "erc20" | "address" | "token"
                | "status" | "help" | "quit" | "exit",
                _,
            ) => return Err(format!("Wrong number of arguments for '{}'", head)),
            _ => return Err(format!("Unknown command '{}' (try 'help')", head)),
        };
        Ok(Some(command))
    }
}

fn input_value(arg: &str) -> Option<String> {
    (arg != "-").then(|| arg.to_string())
}

/// Values of the address and token text inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub address: String,
    pub token: String,
}

/// Execute one command against the console. Returns `None` on quit.
pub async fn execute<W: WalletConnector>(
    console: &mut Console<W>,
    inputs: &mut Inputs,
    command: Command,
) -> Option<Report> {
    let report = match command {
        Command::Connect => Report::from_result(console.connect_wallet().await),
        Command::Toggle => console.toggle_network(),
        Command::Block => Report::from_result(console.latest_block().await),
        Command::Balance(arg) => {
            let target = console.resolve_target(arg.as_deref().unwrap_or(inputs.address.as_str()));
            Report::from_result(console.read_eth_balance(&target).await)
        }
        Command::Erc20 { token, holder } => {
            let token = token.unwrap_or_else(|| inputs.token.trim().to_string());
            let holder = console.resolve_target(holder.as_deref().unwrap_or(inputs.address.as_str()));
            Report::from_result(console.read_erc20(&token, &holder).await)
        }
        Command::SetAddress(value) => {
            inputs.address = value.unwrap_or_default();
            Report::new(vec![format!("Address input: {}", display_input(&inputs.address))])
        }
        Command::SetToken(value) => {
            inputs.token = value.unwrap_or_default();
            Report::new(vec![format!("Token input: {}", display_input(&inputs.token))])
        }
        Command::Status => {
            let mut report = console.status();
            report.push(format!("Address input: {}", display_input(&inputs.address)));
            report.push(format!("Token input: {}", display_input(&inputs.token)));
            report
        }
        Command::Help => Report::new(HELP.lines().map(str::to_string).collect()),
        Command::Quit => return None,
    };
    Some(report)
}

fn display_input(value: &str) -> &str {
    if value.is_empty() {
        "(empty)"
    } else {
        value
    }
}

/// Run the console until `quit` or end of input.
pub async fn run<W, R, O>(console: &mut Console<W>, reader: R, mut out: O) -> std::io::Result<()>
where
    W: WalletConnector,
    R: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut inputs = Inputs::default();
    let mut lines = reader.lines();

    write_block(&mut out, &format!("{}\n{}\n", TITLE, BLURB)).await?;
    write_block(&mut out, &console.ready().to_string()).await?;
    prompt(&mut out).await?;

    while let Some(line) = lines.next_line().await? {
        let report = match Command::parse(&line) {
            Ok(None) => {
                prompt(&mut out).await?;
                continue;
            }
            Ok(Some(command)) => {
                tracing::debug!(?command, "Console command");
                match execute(console, &mut inputs, command).await {
                    Some(report) => report,
                    None => break,
                }
            }
            Err(message) => Report::new(vec![message]),
        };
        write_block(&mut out, &report.to_string()).await?;
        prompt(&mut out).await?;
    }

    out.flush().await
}

async fn write_block<O: AsyncWrite + Unpin>(out: &mut O, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await
}

async fn prompt<O: AsyncWrite + Unpin>(out: &mut O) -> std::io::Result<()> {
    out.write_all(b"> ").await?;
    out.flush().await
}
