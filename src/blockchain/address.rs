//! Address input validation.

use alloy::primitives::Address;

use crate::blockchain::types::{ChainError, ChainResult};

/// Parse user input as an address.
///
/// Accepts `0x` followed by exactly 40 hex digits. All-lowercase input is
/// taken as is; any uppercase letter means the input must carry a valid
/// EIP-55 checksum.
pub fn parse_address(input: &str) -> ChainResult<Address> {
    let hex = input.strip_prefix("0x").ok_or(ChainError::InvalidAddress)?;
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ChainError::InvalidAddress);
    }

    let parsed = if hex.bytes().any(|b| b.is_ascii_uppercase()) {
        Address::parse_checksummed(input, None).map_err(|_| ChainError::InvalidAddress)
    } else {
        input.parse::<Address>().map_err(|_| ChainError::InvalidAddress)
    };

    if parsed.is_err() {
        tracing::debug!(input = %input, "Rejected address input");
    }
    parsed
}
