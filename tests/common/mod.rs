//! Shared utilities for integration testing.

use alloy::primitives::{Address, U256};
use alloy::sol_types::{SolCall, SolValue};
use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use quarryloop::blockchain::IERC20;
use quarryloop::config::AppConfig;
use quarryloop::network::NetworkDescriptor;

/// Canned chain state served by the mock JSON-RPC backend.
#[derive(Debug, Clone)]
pub struct MockChain {
    pub chain_id: u64,
    pub accounts: Vec<String>,
    pub balance: U256,
    pub block_number: u64,
    pub timestamp: u64,
    pub gas_used: u64,
    pub gas_limit: u64,
    pub token: MockToken,
    /// Methods answered with a JSON-RPC error instead of a result.
    pub failing: Vec<&'static str>,
}

/// ERC-20 state served for every `eth_call`.
#[derive(Debug, Clone)]
pub struct MockToken {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
    pub balance: U256,
    /// When set, `eth_call` returns empty data.
    pub missing: bool,
}

pub const WALLET: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const TOKEN: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";

impl MockChain {
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            accounts: vec![WALLET.to_string()],
            balance: U256::from(1_500_000_000_000_000_000u128),
            block_number: 1_234_567,
            timestamp: 1_700_000_000,
            gas_used: 21_000,
            gas_limit: 30_000_000,
            token: MockToken {
                name: "USD Coin".to_string(),
                symbol: "USDC".to_string(),
                decimals: 6,
                total_supply: U256::from(1_000_000_000_000u64),
                balance: U256::from(2_500_000u64),
                missing: false,
            },
            failing: Vec::new(),
        }
    }
}

/// Start a mock JSON-RPC backend on an ephemeral port. Returns its URL.
pub async fn start_mock_rpc(chain: MockChain) -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new()
        .route("/", post(rpc_handler))
        .with_state(Arc::new(chain));

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{}", addr)
}

/// Config whose two networks point at the given mock URLs.
#[allow(dead_code)]
pub fn config_for(first: (&str, u64), second: (&str, u64)) -> AppConfig {
    let mut config = AppConfig::default();
    config.rpc.timeout_secs = 5;
    config.networks = vec![
        NetworkDescriptor {
            rpc_url: first.0.to_string(),
            chain_id: first.1,
            ..NetworkDescriptor::base_sepolia()
        },
        NetworkDescriptor {
            rpc_url: second.0.to_string(),
            chain_id: second.1,
            ..NetworkDescriptor::base_mainnet()
        },
    ];
    config
}

async fn rpc_handler(State(chain): State<Arc<MockChain>>, Json(body): Json<Value>) -> Json<Value> {
    match body {
        Value::Array(requests) => {
            Json(Value::Array(requests.iter().map(|r| respond(&chain, r)).collect()))
        }
        request => Json(respond(&chain, &request)),
    }
}

fn respond(chain: &MockChain, request: &Value) -> Value {
    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let method = request.get("method").and_then(Value::as_str).unwrap_or_default();

    let result = if chain.failing.iter().any(|m| *m == method) {
        Err((-32000, format!("{} unavailable", method)))
    } else {
        dispatch(chain, method, request)
    };

    match result {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        Err((code, message)) => {
            json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
        }
    }
}

fn dispatch(chain: &MockChain, method: &str, request: &Value) -> Result<Value, (i64, String)> {
    match method {
        "eth_chainId" => Ok(json!(format!("{:#x}", chain.chain_id))),
        "eth_requestAccounts" => Ok(json!(chain.accounts)),
        "eth_blockNumber" => Ok(json!(format!("{:#x}", chain.block_number))),
        "eth_getBalance" => Ok(json!(format!("{:#x}", chain.balance))),
        "eth_getBlockByNumber" => Ok(block_json(chain)),
        "eth_call" => eth_call(chain, request),
        _ => Err((-32601, "Method not found".to_string())),
    }
}

fn eth_call(chain: &MockChain, request: &Value) -> Result<Value, (i64, String)> {
    let tx = &request["params"][0];
    let input = tx
        .get("input")
        .or_else(|| tx.get("data"))
        .and_then(Value::as_str)
        .ok_or((-32602, "missing call input".to_string()))?;
    let input = alloy::hex::decode(input).map_err(|e| (-32602, e.to_string()))?;
    if input.len() < 4 {
        return Err((-32602, "short call input".to_string()));
    }

    if chain.token.missing {
        return Ok(json!("0x"));
    }

    let token = &chain.token;
    let selector: [u8; 4] = [input[0], input[1], input[2], input[3]];
    let output = if selector == IERC20::nameCall::SELECTOR {
        token.name.abi_encode()
    } else if selector == IERC20::symbolCall::SELECTOR {
        token.symbol.abi_encode()
    } else if selector == IERC20::decimalsCall::SELECTOR {
        U256::from(token.decimals).abi_encode()
    } else if selector == IERC20::totalSupplyCall::SELECTOR {
        token.total_supply.abi_encode()
    } else if selector == IERC20::balanceOfCall::SELECTOR {
        let holder = Address::from_slice(&input[16..36]);
        let balance = if holder.to_string() == WALLET { token.balance } else { U256::ZERO };
        balance.abi_encode()
    } else {
        return Err((3, "execution reverted".to_string()));
    };

    Ok(json!(format!("0x{}", alloy::hex::encode(output))))
}

fn block_json(chain: &MockChain) -> Value {
    let h256 = format!("0x{}", "11".repeat(32));
    json!({
        "hash": h256,
        "parentHash": h256,
        "sha3Uncles": h256,
        "miner": format!("0x{}", "22".repeat(20)),
        "stateRoot": h256,
        "transactionsRoot": h256,
        "receiptsRoot": h256,
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "difficulty": "0x0",
        "number": format!("{:#x}", chain.block_number),
        "gasLimit": format!("{:#x}", chain.gas_limit),
        "gasUsed": format!("{:#x}", chain.gas_used),
        "timestamp": format!("{:#x}", chain.timestamp),
        "extraData": "0x",
        "mixHash": h256,
        "nonce": "0x0000000000000000",
        "baseFeePerGas": "0x7",
        "totalDifficulty": "0x0",
        "size": "0x220",
        "uncles": [],
        "transactions": []
    })
}
