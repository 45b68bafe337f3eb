//! Execution results recorded after a transaction runs.

use bytes::Bytes;
use volt_primitives::{Address, H256};

/// Outcome code of contract execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractResult {
    /// No execution recorded
    Default,
    /// Execution completed
    Success,
    /// Execution reverted
    Revert,
    /// Execution ran out of energy
    OutOfEnergy,
    /// Execution hit an illegal operation
    IllegalOperation,
    /// Any other failure
    Unknown,
}

/// Resource accounting attached to an executed transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceReceipt {
    /// Total energy consumed, from all sources
    pub energy_usage_total: u64,
    /// Execution outcome
    pub result: ContractResult,
}

/// A log record emitted during execution.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionLog {
    /// Emitting contract
    pub address: Address,
    /// Indexed topics
    pub topics: Vec<H256>,
    /// Unindexed payload
    pub data: Bytes,
}

/// Post-execution record of a transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionInfo {
    /// Transaction id
    pub id: H256,
    /// Height of the including block
    pub block_number: u64,
    /// Timestamp of the including block, epoch milliseconds
    pub block_timestamp_ms: i64,
    /// Address of the created contract, for deployments
    pub contract_address: Option<Address>,
    /// Resource accounting
    pub receipt: ResourceReceipt,
    /// Emitted logs, in emission order
    pub logs: Vec<TransactionLog>,
}

impl TransactionInfo {
    /// Whether execution succeeded.
    pub fn is_success(&self) -> bool {
        matches!(
            self.receipt.result,
            ContractResult::Default | ContractResult::Success
        )
    }
}
