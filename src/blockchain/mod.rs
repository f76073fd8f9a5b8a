//! Chain read subsystem.
//!
//! # Data Flow
//! ```text
//! User input (address / token strings)
//!     → address.rs (format + checksum validation)
//!     → client.rs (JSON-RPC reads with timeouts)
//!     → erc20.rs (ABI-encoded eth_call, concurrent)
//!     → units.rs (wei / token units → decimal strings)
//! ```
//!
//! # Constraints
//! - Read-only: nothing here signs or sends transactions
//! - All RPC calls have configurable timeouts
//! - No retries and no caching; the first error is returned as is

pub mod address;
pub mod client;
pub mod erc20;
pub mod types;
pub mod units;

pub use address::parse_address;
pub use client::ChainClient;
pub use erc20::{Erc20Snapshot, IERC20};
pub use types::{BlockSnapshot, ChainError, ChainResult};
pub use units::{format_ether, format_units};
