//! # volt-eth-rpc
//!
//! Ethereum-compatible JSON-RPC core for the Volt chain.
//!
//! This crate translates the Ethereum JSON-RPC vocabulary (block,
//! transaction, and receipt shapes, hex-quantity conventions, error codes)
//! onto a Volt ledger backend. It owns request decoding, result synthesis,
//! and error mapping; transports and the backend itself live elsewhere.
//!
//! ## Usage
//!
//! ```ignore
//! use volt_eth_rpc::{RpcContext, RpcHandler};
//! use std::sync::Arc;
//!
//! let ctx = Arc::new(RpcContext::new(backend));
//! let handler = RpcHandler::new(ctx);
//!
//! let response = handler.handle_request(request).await;
//! ```
//!
//! ## Supported Methods
//!
//! ### eth_* Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | `eth_chainId` | Last four bytes of the genesis block id |
//! | `eth_blockNumber` | Current head height |
//! | `eth_protocolVersion` | Head block header version |
//! | `eth_gasPrice` | Current energy price |
//! | `eth_getBalance` | Balance of an account |
//! | `eth_getStorageAt` | One storage slot of a contract |
//! | `eth_getCode` | Runtime code of a contract |
//! | `eth_coinbase` | Configured block-reward recipient |
//! | `eth_getBlockByHash` | Block by id |
//! | `eth_getBlockByNumber` | Block by tag (only `latest`) |
//! | `eth_getBlockTransactionCountByHash` | Transaction count by block id |
//! | `eth_getBlockTransactionCountByNumber` | Transaction count by tag |
//! | `eth_getTransactionByHash` | Transaction by id |
//! | `eth_getTransactionByBlockHashAndIndex` | Transaction by block id and position |
//! | `eth_getTransactionByBlockNumberAndIndex` | Transaction by tag and position |
//! | `eth_getTransactionReceipt` | Receipt of an executed transaction |
//! | `eth_call` | Read-only contract call |
//! | `eth_estimateGas` | Energy estimate for a transaction |
//! | `eth_syncing` | Sync progress, or false when idle |
//! | `eth_getWork` | Head id plus null placeholders |
//! | `eth_hashrate` | Always `0x0` |
//! | `eth_mining` | Whether this node produces blocks |
//! | `eth_accounts` | Always empty |
//!
//! Uncle methods always answer zero/null; the chain has no uncles.
//!
//! ### net_* Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | `net_version` | Network id, same derivation as `eth_chainId` |
//! | `net_listening` | Whether any connection is active |
//! | `net_peerCount` | Number of known peers |
//!
//! ### web3_* Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | `web3_clientVersion` | Client version string |
//! | `web3_sha3` | Keccak-256 hash of data |
//!
//! ### Extensions
//!
//! `buildTransaction` builds an unsigned native transaction from
//! Ethereum-shaped arguments; it is only served by a node at the chain
//! head. A fixed set of wallet/signing/compiler methods
//! (see [`handler::UNSUPPORTED_METHODS`]) deterministically answers
//! method-not-found.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod args;
pub mod error;
pub mod handler;
pub mod methods;
pub mod results;
pub mod types;

// Re-export main types
pub use args::{BuildArguments, CallArguments, ContractKind};
pub use error::JsonRpcError;
pub use handler::{MethodRegistry, RpcContext, RpcHandler, UNSUPPORTED_METHODS};
pub use results::{
    BlockResult, LogResult, SyncingResult, TransactionJson, TransactionReceipt, TransactionResult,
};
pub use types::{JsonRpcId, JsonRpcRequest, JsonRpcResponse};
