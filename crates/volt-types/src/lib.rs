//! # volt-types
//!
//! Core Volt chain types consumed by the Ethereum-compatibility layer:
//! blocks, transactions, contract payloads, execution info, accounts, and
//! the deterministic binary encoding behind native ids.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod account;
mod block;
pub mod codec;
mod contract;
mod info;
mod transaction;

pub use account::Account;
pub use block::{Block, BlockHeader};
pub use contract::{
    Abi, ContractInfo, ContractPayload, CreateSmartContract, SmartContract,
    TransferAssetContract, TransferContract, TriggerSmartContract,
};
pub use info::{ContractResult, ResourceReceipt, TransactionInfo, TransactionLog};
pub use transaction::{RawTransaction, Transaction};

/// Target block production interval in milliseconds.
pub const BLOCK_INTERVAL_MS: i64 = 3_000;
