//! Native transactions.

use bytes::Bytes;
use volt_crypto::sha256;
use volt_primitives::{Address, H256};

use crate::codec;
use crate::contract::ContractPayload;

/// Unsigned body of a native transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct RawTransaction {
    /// Last two bytes of the referenced block height
    pub ref_block_bytes: [u8; 2],
    /// Eight bytes of the referenced block id
    pub ref_block_hash: [u8; 8],
    /// Expiration, epoch milliseconds
    pub expiration_ms: i64,
    /// Optional memo bytes
    pub memo: Bytes,
    /// The single contract payload
    pub contract: ContractPayload,
    /// Active-permission selector for the payload, applied when positive
    pub permission_id: i32,
    /// Creation timestamp, epoch milliseconds
    pub timestamp_ms: i64,
    /// Maximum energy fee the sender will pay, smallest native unit
    pub fee_limit: u64,
}

impl RawTransaction {
    /// A raw body with zero/empty placeholders around the payload.
    ///
    /// The read-only call path and the transaction builders both start from
    /// this shape; the backend fills in reference fields where it needs to.
    pub fn unsigned(contract: ContractPayload) -> Self {
        RawTransaction {
            ref_block_bytes: [0u8; 2],
            ref_block_hash: [0u8; 8],
            expiration_ms: 0,
            memo: Bytes::new(),
            contract,
            permission_id: 0,
            timestamp_ms: 0,
            fee_limit: 0,
        }
    }
}

/// A native transaction: raw body plus signatures.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    /// Unsigned body
    pub raw: RawTransaction,
    /// 65-byte signatures (r ‖ s ‖ v), empty while unsigned
    pub signatures: Vec<Bytes>,
}

impl Transaction {
    /// Wrap an unsigned raw body.
    pub fn unsigned(raw: RawTransaction) -> Self {
        Transaction {
            raw,
            signatures: Vec::new(),
        }
    }

    /// Canonical transaction id: SHA-256 of the encoded raw body.
    ///
    /// Always recomputed from the fields, never read from a cache.
    pub fn id(&self) -> H256 {
        sha256(&codec::encode_raw_transaction(&self.raw))
    }

    /// Sender of the contract payload.
    pub fn owner_address(&self) -> Address {
        self.raw.contract.owner()
    }

    /// Recipient in the Ethereum sense: transfer target or invoked contract.
    pub fn to_address(&self) -> Option<Address> {
        match &self.raw.contract {
            ContractPayload::Transfer(c) => Some(c.to),
            ContractPayload::TransferAsset(c) => Some(c.to),
            ContractPayload::TriggerSmartContract(c) => c.contract,
            ContractPayload::CreateSmartContract(_) => None,
        }
    }

    /// Native value moved by the payload. Asset transfers move asset units,
    /// so their native value is zero.
    pub fn amount(&self) -> u64 {
        match &self.raw.contract {
            ContractPayload::Transfer(c) => c.amount,
            ContractPayload::TransferAsset(_) => 0,
            ContractPayload::TriggerSmartContract(c) => c.call_value,
            ContractPayload::CreateSmartContract(c) => c.new_contract.call_value,
        }
    }

    /// Input bytes in the Ethereum sense: call data or deployment bytecode.
    pub fn input(&self) -> &[u8] {
        match &self.raw.contract {
            ContractPayload::TriggerSmartContract(c) => &c.data,
            ContractPayload::CreateSmartContract(c) => &c.new_contract.bytecode,
            _ => &[],
        }
    }

    /// Serialized size in bytes.
    pub fn serialized_size(&self) -> usize {
        codec::encode_transaction(self).len()
    }
}
