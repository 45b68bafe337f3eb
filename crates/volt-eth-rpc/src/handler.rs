//! Request handler and method dispatcher

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use volt_ledger::LedgerBackend;

use crate::error::JsonRpcError;
use crate::methods::{build, eth, net, web3};
use crate::types::{JsonRpcRequest, JsonRpcResponse};

/// Methods deliberately absent from this surface. Each stub fails
/// deterministically instead of falling through to the unknown-method path,
/// so callers get the same message whether or not the node ever adds them.
pub const UNSUPPORTED_METHODS: &[&str] = &[
    "eth_submitWork",
    "eth_sendRawTransaction",
    "eth_sendTransaction",
    "eth_sign",
    "eth_signTransaction",
    "parity_nextNonce",
    "eth_getTransactionCount",
    "eth_getCompilers",
    "eth_compileSolidity",
    "eth_compileLLL",
    "eth_compileSerpent",
    "eth_submitHashrate",
];

/// Type alias for async method handler
pub type MethodFn = Box<
    dyn Fn(Arc<RpcContext>, Vec<Value>) -> Pin<Box<dyn Future<Output = Result<Value, JsonRpcError>> + Send>>
        + Send
        + Sync,
>;

/// Shared context for RPC handlers
pub struct RpcContext {
    /// Ledger backend
    pub backend: Arc<dyn LedgerBackend>,
    /// Reported by `web3_clientVersion`
    pub client_version: String,
}

impl RpcContext {
    /// Create a new RPC context
    pub fn new(backend: Arc<dyn LedgerBackend>) -> Self {
        Self {
            backend,
            client_version: format!(
                "Volt/v{}/{}/rust",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            ),
        }
    }

    /// Create a new RPC context with an explicit client-version string
    pub fn with_client_version(
        backend: Arc<dyn LedgerBackend>,
        client_version: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            client_version: client_version.into(),
        }
    }
}

/// Method registry for dispatching RPC calls
pub struct MethodRegistry {
    methods: HashMap<String, MethodFn>,
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodRegistry {
    /// Create a new method registry with all methods registered
    pub fn new() -> Self {
        let mut registry = Self {
            methods: HashMap::new(),
        };

        // Register eth_* methods
        registry.register("eth_chainId", eth::eth_chain_id);
        registry.register("eth_blockNumber", eth::eth_block_number);
        registry.register("eth_protocolVersion", eth::eth_protocol_version);
        registry.register("eth_gasPrice", eth::eth_gas_price);
        registry.register("eth_getBalance", eth::eth_get_balance);
        registry.register("eth_getStorageAt", eth::eth_get_storage_at);
        registry.register("eth_getCode", eth::eth_get_code);
        registry.register("eth_coinbase", eth::eth_coinbase);
        registry.register("eth_getBlockByHash", eth::eth_get_block_by_hash);
        registry.register("eth_getBlockByNumber", eth::eth_get_block_by_number);
        registry.register(
            "eth_getBlockTransactionCountByHash",
            eth::eth_get_block_transaction_count_by_hash,
        );
        registry.register(
            "eth_getBlockTransactionCountByNumber",
            eth::eth_get_block_transaction_count_by_number,
        );
        registry.register("eth_getTransactionByHash", eth::eth_get_transaction_by_hash);
        registry.register(
            "eth_getTransactionByBlockHashAndIndex",
            eth::eth_get_transaction_by_block_hash_and_index,
        );
        registry.register(
            "eth_getTransactionByBlockNumberAndIndex",
            eth::eth_get_transaction_by_block_number_and_index,
        );
        registry.register("eth_getTransactionReceipt", eth::eth_get_transaction_receipt);
        registry.register("eth_call", eth::eth_call);
        registry.register("eth_estimateGas", eth::eth_estimate_gas);
        registry.register("eth_syncing", eth::eth_syncing);
        registry.register("eth_getUncleByBlockHashAndIndex", eth::eth_get_uncle);
        registry.register("eth_getUncleByBlockNumberAndIndex", eth::eth_get_uncle);
        registry.register("eth_getUncleCountByBlockHash", eth::eth_get_uncle_count);
        registry.register("eth_getUncleCountByBlockNumber", eth::eth_get_uncle_count);
        registry.register("eth_getWork", eth::eth_get_work);
        registry.register("eth_hashrate", eth::eth_hashrate);
        registry.register("eth_mining", eth::eth_mining);
        registry.register("eth_accounts", eth::eth_accounts);

        // Register net_* methods
        registry.register("net_version", net::net_version);
        registry.register("net_listening", net::net_listening);
        registry.register("net_peerCount", net::net_peer_count);

        // Register web3_* methods
        registry.register("web3_clientVersion", web3::web3_client_version);
        registry.register("web3_sha3", web3::web3_sha3);

        // Non-standard transaction builder
        registry.register("buildTransaction", build::build_transaction);

        // Deterministic method-not-found stubs
        for name in UNSUPPORTED_METHODS {
            let method = *name;
            registry.register(method, move |_ctx, _params| async move {
                Err(JsonRpcError::unsupported_method(method))
            });
        }

        registry
    }

    /// Register a method handler
    pub fn register<F, Fut>(&mut self, name: &str, handler: F)
    where
        F: Fn(Arc<RpcContext>, Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, JsonRpcError>> + Send + 'static,
    {
        self.methods.insert(
            name.to_string(),
            Box::new(move |ctx, params| Box::pin(handler(ctx, params))),
        );
    }

    /// Dispatch a method call
    pub async fn dispatch(
        &self,
        ctx: Arc<RpcContext>,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Value, JsonRpcError> {
        match self.methods.get(method) {
            Some(handler) => handler(ctx, params).await,
            None => Err(JsonRpcError::unsupported_method(method)),
        }
    }

    /// Check if a method is registered
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Get list of registered methods
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.keys().map(|s| s.as_str()).collect()
    }
}

/// RPC request handler
pub struct RpcHandler {
    ctx: Arc<RpcContext>,
    registry: MethodRegistry,
}

impl RpcHandler {
    /// Create a new RPC handler
    pub fn new(ctx: Arc<RpcContext>) -> Self {
        Self {
            ctx,
            registry: MethodRegistry::new(),
        }
    }

    /// Handle a JSON-RPC request
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        // Validate JSON-RPC version
        if request.jsonrpc != "2.0" {
            return JsonRpcResponse::error(
                request.id,
                JsonRpcError::invalid_request("invalid JSON-RPC version"),
            );
        }

        // Dispatch the method
        match self
            .registry
            .dispatch(self.ctx.clone(), &request.method, request.params)
            .await
        {
            Ok(result) => JsonRpcResponse::success(request.id, result),
            Err(error) => JsonRpcResponse::error(request.id, error),
        }
    }

    /// Get the RPC context
    pub fn context(&self) -> &Arc<RpcContext> {
        &self.ctx
    }
}
