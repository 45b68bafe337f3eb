//! Web3 namespace RPC methods (web3_*)

use std::sync::Arc;

use serde_json::Value;

use volt_crypto::keccak256;
use volt_primitives::hex::decode_bytes;

use crate::error::JsonRpcError;
use crate::handler::RpcContext;
use crate::types::param;

/// web3_clientVersion - Returns the client version string
pub async fn web3_client_version(
    ctx: Arc<RpcContext>,
    _params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    Ok(Value::String(ctx.client_version.clone()))
}

/// web3_sha3 - Returns the keccak-256 hash of the given data
pub async fn web3_sha3(_ctx: Arc<RpcContext>, params: Vec<Value>) -> Result<Value, JsonRpcError> {
    let data = param(&params, 0, "data")?
        .as_str()
        .ok_or_else(|| JsonRpcError::invalid_params("invalid input value"))
        .and_then(|s| {
            decode_bytes(s).map_err(|_| JsonRpcError::invalid_params("invalid input value"))
        })?;
    Ok(Value::String(keccak256(&data).to_hex()))
}
