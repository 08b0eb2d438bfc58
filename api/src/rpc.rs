use alloy_primitives::{Bytes, U256};
use alloy_sol_types::{sol, SolCall};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::{DashError, Result};

sol! {
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
    }
}

/// Read-only chain queries the dashboard depends on.
#[allow(async_fn_in_trait)]
pub trait ChainReader {
    async fn native_balance(&self, account: &Address) -> Result<U256>;
    async fn transaction_count(&self, account: &Address) -> Result<u64>;
    async fn token_balance(&self, token: &Address, account: &Address) -> Result<U256>;
    async fn token_decimals(&self, token: &Address) -> Result<u8>;
    async fn token_symbol(&self, token: &Address) -> Result<String>;
}

#[derive(Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: Vec<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcError>,
}

#[derive(Deserialize, Debug)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Serialize)]
struct CallParams {
    to: Address,
    data: Bytes,
}

/// JSON-RPC 2.0 client for an EVM node.
#[derive(Clone, Debug)]
pub struct RpcClient {
    url: String,
    http: reqwest::Client,
}

impl RpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Vec<serde_json::Value>,
    ) -> Result<T> {
        tracing::debug!("rpc {}", method);

        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response = self.http.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashError::Network(format!("{method} responded with {status}")));
        }

        let rpc_response: RpcResponse<T> = response.json().await?;

        if let Some(error) = rpc_response.error {
            return Err(DashError::Network(format!(
                "{method} failed ({}): {}",
                error.code, error.message
            )));
        }

        rpc_response
            .result
            .ok_or_else(|| DashError::Network(format!("{method} returned no result")))
    }

    async fn eth_call<C: SolCall>(&self, to: &Address, call: C) -> Result<Bytes> {
        let params = CallParams {
            to: *to,
            data: call.abi_encode().into(),
        };
        self.call(
            "eth_call",
            vec![serde_json::to_value(params)?, serde_json::json!("latest")],
        )
        .await
    }
}

impl ChainReader for RpcClient {
    async fn native_balance(&self, account: &Address) -> Result<U256> {
        let raw: String = self
            .call(
                "eth_getBalance",
                vec![serde_json::json!(account), serde_json::json!("latest")],
            )
            .await?;
        parse_quantity(&raw)
    }

    async fn transaction_count(&self, account: &Address) -> Result<u64> {
        let raw: String = self
            .call(
                "eth_getTransactionCount",
                vec![serde_json::json!(account), serde_json::json!("latest")],
            )
            .await?;
        let count = parse_quantity(&raw)?;
        u64::try_from(count)
            .map_err(|_| DashError::Network(format!("transaction count {raw} out of range")))
    }

    async fn token_balance(&self, token: &Address, account: &Address) -> Result<U256> {
        let data = self
            .eth_call(token, IERC20::balanceOfCall { owner: *account })
            .await?;
        decode_balance(&data)
    }

    async fn token_decimals(&self, token: &Address) -> Result<u8> {
        let data = self.eth_call(token, IERC20::decimalsCall {}).await?;
        IERC20::decimalsCall::abi_decode_returns(&data)
            .map_err(|e| DashError::Network(format!("decimals() of {token}: {e}")))
    }

    async fn token_symbol(&self, token: &Address) -> Result<String> {
        let data = self.eth_call(token, IERC20::symbolCall {}).await?;
        decode_symbol(&data)
    }
}

/// Parses a JSON-RPC hex quantity such as `0x1bc16d674ec80000`.
pub fn parse_quantity(raw: &str) -> Result<U256> {
    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| DashError::Network(format!("malformed quantity {raw}")))?;
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 16)
        .map_err(|e| DashError::Network(format!("quantity {raw}: {e}")))
}

/// Decodes the `uint256` returned by `balanceOf`.
pub fn decode_balance(data: &[u8]) -> Result<U256> {
    IERC20::balanceOfCall::abi_decode_returns(data)
        .map_err(|e| DashError::Network(format!("balanceOf(): {e}")))
}

/// Decodes a `symbol()` result. Legacy tokens returning `bytes32` are accepted too.
pub fn decode_symbol(data: &[u8]) -> Result<String> {
    if data.len() == 32 {
        let end = data.iter().position(|b| *b == 0).unwrap_or(32);
        return String::from_utf8(data[..end].to_vec())
            .map_err(|e| DashError::Network(format!("symbol is not utf-8: {e}")));
    }
    IERC20::symbolCall::abi_decode_returns(data)
        .map_err(|e| DashError::Network(format!("symbol(): {e}")))
}
