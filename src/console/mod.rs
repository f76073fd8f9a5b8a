//! Console front end.
//!
//! # Data Flow
//! ```text
//! stdin line / CLI subcommand
//!     → repl.rs (parse command, resolve inputs)
//!     → app.rs (network toggle, wallet session, chain reads)
//!     → report.rs (multi-line text block or "Error: <message>")
//!     → stdout
//! ```

pub mod app;
pub mod repl;
pub mod report;

use thiserror::Error;

use crate::blockchain::ChainError;
use crate::wallet::WalletError;

pub use app::Console;
pub use repl::{Command, Inputs};
pub use report::Report;

/// Errors surfaced by console actions.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error("Unknown chain id {0}")]
    UnknownChain(u64),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for console actions.
pub type AppResult<T> = Result<T, AppError>;
