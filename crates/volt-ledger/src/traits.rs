//! Backend traits consumed by the RPC layer.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use volt_primitives::{Address, H256};
use volt_types::{
    Account, Block, ContractInfo, ContractPayload, SmartContract, Transaction, TransactionInfo,
    TriggerSmartContract,
};

use crate::error::LedgerResult;

/// Operating role of a node's state view.
///
/// Only a [`Cursor::Head`] node accepts transaction-building requests;
/// derived views serve reads against lagged state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    /// Primary read/write view at the chain head
    Head,
    /// Derived view lagging at the confirmed block
    Confirmed,
    /// Derived view lagging at the finalized block
    Finalized,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cursor::Head => "HEAD",
            Cursor::Confirmed => "CONFIRMED",
            Cursor::Finalized => "FINALIZED",
        };
        write!(f, "{name}")
    }
}

/// A known transaction together with where (if anywhere) it landed.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionCapsule {
    /// The transaction
    pub transaction: Transaction,
    /// Height of the including block, `None` while pending
    pub block_number: Option<u64>,
}

/// Outcome of a non-state-committing contract execution.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantExecution {
    /// The executed transaction as the backend populated it
    pub transaction: Transaction,
    /// Energy consumed by the run
    pub energy_used: u64,
    /// Returned data segments, in order
    pub constant_results: Vec<Bytes>,
}

/// Node-level backend handle.
pub trait LedgerBackend: Send + Sync {
    /// A consistent snapshot of chain state. Obtain one per operation and
    /// perform all of that operation's reads against it.
    fn view(&self) -> Arc<dyn LedgerView>;

    /// Operating role of this node's state view.
    fn cursor(&self) -> Cursor;

    /// Whether this node is actively producing blocks.
    fn is_witness_active(&self) -> bool;

    /// Block-reward recipient, if one is configured.
    fn coinbase(&self) -> Option<Address>;

    /// Number of currently active connections.
    fn active_connection_count(&self) -> usize;

    /// Number of known peers.
    fn peer_count(&self) -> usize;

    /// Height at which the current sync round started.
    fn sync_begin_number(&self) -> u64;
}

/// One consistent snapshot of chain state.
///
/// Lookups return `None` for "no such entity"; only the construction and
/// execution entry points raise [`LedgerError`](crate::LedgerError).
pub trait LedgerView: Send + Sync {
    /// Get a block by its id.
    fn block_by_id(&self, id: &H256) -> Option<Block>;

    /// Get a block by height.
    fn block_by_num(&self, number: u64) -> Option<Block>;

    /// Get the block at the chain head.
    fn head_block(&self) -> Option<Block>;

    /// Get a transaction capsule by transaction id.
    fn transaction_by_id(&self, id: &H256) -> Option<TransactionCapsule>;

    /// Get the execution record of a transaction by id.
    fn transaction_info_by_id(&self, id: &H256) -> Option<TransactionInfo>;

    /// Get the execution records of every transaction in a block, in
    /// execution order.
    fn transaction_infos_by_block(&self, number: u64) -> Option<Vec<TransactionInfo>>;

    /// Get an account by address.
    fn account(&self, address: &Address) -> Option<Account>;

    /// Get a deployed contract by address.
    fn contract(&self, address: &Address) -> Option<SmartContract>;

    /// Get a deployed contract together with its runtime code.
    fn contract_info(&self, address: &Address) -> Option<ContractInfo>;

    /// Get one storage slot of a contract.
    fn storage_slot(&self, address: &Address, key: &H256) -> Option<H256>;

    /// Current energy price, smallest native unit per energy.
    fn energy_price(&self) -> u64;

    /// Energy price in force at the given timestamp.
    fn energy_price_at(&self, timestamp_ms: i64) -> u64;

    /// Build an unsigned transaction around a contract payload, filling
    /// reference fields from the current head.
    fn create_transaction(&self, contract: ContractPayload) -> LedgerResult<Transaction>;

    /// Run a trigger payload through the constant execution path. Never
    /// commits state.
    fn trigger_constant_contract(
        &self,
        trigger: &TriggerSmartContract,
        transaction: &Transaction,
    ) -> LedgerResult<ConstantExecution>;

    /// Run a trigger payload for real and return the backend-populated
    /// transaction.
    fn trigger_contract(
        &self,
        trigger: &TriggerSmartContract,
        transaction: Transaction,
    ) -> LedgerResult<Transaction>;
}
