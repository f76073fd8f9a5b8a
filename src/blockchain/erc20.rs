//! Read-only ERC-20 access.

use alloy::primitives::{Address, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::blockchain::client::ChainClient;
use crate::blockchain::types::{ChainError, ChainResult};

sol! {
    /// The read-only subset of the ERC-20 interface.
    #[derive(Debug)]
    interface IERC20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
    }
}

/// Token metadata plus one holder's balance, in raw units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc20Snapshot {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
    pub holder_balance: U256,
}

/// Issue the five token reads concurrently. The first failure wins.
pub async fn read_snapshot(
    client: &ChainClient,
    token: Address,
    holder: Address,
) -> ChainResult<Erc20Snapshot> {
    let (name, symbol, decimals, total_supply, holder_balance) = tokio::try_join!(
        read(client, token, IERC20::nameCall {}),
        read(client, token, IERC20::symbolCall {}),
        read(client, token, IERC20::decimalsCall {}),
        read(client, token, IERC20::totalSupplyCall {}),
        read(client, token, IERC20::balanceOfCall { owner: holder }),
    )?;

    tracing::debug!(
        network = %client.network().label,
        %token,
        %holder,
        symbol = %symbol,
        "ERC-20 snapshot read"
    );

    Ok(Erc20Snapshot {
        name,
        symbol,
        decimals,
        total_supply,
        holder_balance,
    })
}

async fn read<C: SolCall>(client: &ChainClient, token: Address, call: C) -> ChainResult<C::Return> {
    let output = client.call(token, call.abi_encode().into()).await?;
    decode_return::<C>(&output)
}

/// Decode the return data of `C`, treating empty output as "no data".
pub fn decode_return<C: SolCall>(output: &[u8]) -> ChainResult<C::Return> {
    if output.is_empty() {
        return Err(ChainError::NoData(C::SIGNATURE));
    }
    C::abi_decode_returns(output).map_err(|e| ChainError::Decode {
        function: C::SIGNATURE,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolValue;

    #[test]
    fn test_decode_string_return() {
        let encoded = "Quarry Token".to_string().abi_encode();
        let name = decode_return::<IERC20::nameCall>(&encoded).unwrap();
        assert_eq!(name, "Quarry Token");
    }

    #[test]
    fn test_decode_numeric_returns() {
        let decimals = decode_return::<IERC20::decimalsCall>(&U256::from(6u8).abi_encode()).unwrap();
        assert_eq!(decimals, 6);

        let supply = U256::from(21_000_000u64) * U256::from(10u64).pow(U256::from(6u64));
        let decoded = decode_return::<IERC20::totalSupplyCall>(&supply.abi_encode()).unwrap();
        assert_eq!(decoded, supply);
    }

    #[test]
    fn test_empty_return_is_no_data() {
        let err = decode_return::<IERC20::symbolCall>(&[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Contract function symbol() returned no data (\"0x\")"
        );
    }

    #[test]
    fn test_truncated_return_is_decode_error() {
        let err = decode_return::<IERC20::totalSupplyCall>(&[0u8; 4]).unwrap_err();
        assert!(matches!(err, ChainError::Decode { function: "totalSupply()", .. }));
    }

    #[test]
    fn test_balance_of_selector() {
        assert_eq!(IERC20::balanceOfCall::SELECTOR, [0x70, 0xa0, 0x82, 0x31]);
        let call = IERC20::balanceOfCall { owner: Address::ZERO };
        assert_eq!(call.abi_encode().len(), 36);
    }
}
