//! Network namespace RPC methods (net_*)

use std::sync::Arc;

use serde_json::Value;

use volt_primitives::hex::encode_quantity;

use crate::error::JsonRpcError;
use crate::handler::RpcContext;

/// net_version - Returns the network id (same derivation as eth_chainId)
pub async fn net_version(ctx: Arc<RpcContext>, params: Vec<Value>) -> Result<Value, JsonRpcError> {
    super::eth::eth_chain_id(ctx, params).await
}

/// net_listening - Whether the node has any active connection
pub async fn net_listening(
    ctx: Arc<RpcContext>,
    _params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    Ok(Value::Bool(ctx.backend.active_connection_count() >= 1))
}

/// net_peerCount - Returns the number of known peers
pub async fn net_peer_count(
    ctx: Arc<RpcContext>,
    _params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    Ok(Value::String(encode_quantity(
        ctx.backend.peer_count() as u64
    )))
}
