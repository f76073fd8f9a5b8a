//! Chain read types and error definitions.

use thiserror::Error;

/// Errors that can occur during chain reads.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Input is not a well-formed (and, if it has uppercase letters, checksummed) address.
    #[error("Invalid address")]
    InvalidAddress,

    /// A contract call returned empty data, usually because the target
    /// is not a contract.
    #[error("Contract function {0} returned no data (\"0x\")")]
    NoData(&'static str),

    /// Contract return data could not be decoded.
    #[error("Failed to decode {function} result: {reason}")]
    Decode {
        function: &'static str,
        reason: String,
    },
}

/// Result type for chain reads.
pub type ChainResult<T> = Result<T, ChainError>;

/// Header fields of the latest block shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSnapshot {
    pub number: u64,
    pub timestamp: u64,
    pub gas_used: u64,
    pub gas_limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ChainError::InvalidAddress.to_string(), "Invalid address");
        assert_eq!(
            ChainError::Timeout(10).to_string(),
            "RPC timeout after 10 seconds"
        );
        assert_eq!(
            ChainError::NoData("name()").to_string(),
            "Contract function name() returned no data (\"0x\")"
        );
    }
}
