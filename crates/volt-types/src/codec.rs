//! Binary encoding for native types.
//!
//! Encoding is little-endian with `u32` length prefixes for variable bytes.
//! The canonical ids ([`Transaction::id`](crate::Transaction::id) and
//! [`Block::id`](crate::Block::id)) hash these encodings, so every field a
//! signer commits to is included and the layout never changes silently.

use volt_primitives::Address;

use crate::block::{Block, BlockHeader};
use crate::contract::{ContractPayload, SmartContract};
use crate::transaction::{RawTransaction, Transaction};

// ==================== Primitives ====================

fn put_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    buf.extend_from_slice(bytes);
}

fn put_optional_address(buf: &mut Vec<u8>, address: &Option<Address>) {
    match address {
        Some(addr) => {
            buf.push(1);
            buf.extend_from_slice(addr.as_bytes());
        }
        None => buf.push(0),
    }
}

// ==================== Contract encoding ====================

fn put_smart_contract(buf: &mut Vec<u8>, contract: &SmartContract) {
    buf.extend_from_slice(contract.origin.as_bytes());
    put_optional_address(buf, &contract.contract_address);
    match &contract.abi {
        Some(abi) => {
            buf.push(1);
            put_bytes(buf, &serde_json::to_vec(&abi.entries).unwrap_or_default());
        }
        None => buf.push(0),
    }
    put_bytes(buf, &contract.bytecode);
    buf.extend_from_slice(&contract.call_value.to_le_bytes());
    buf.extend_from_slice(&contract.consume_user_resource_percent.to_le_bytes());
    match &contract.name {
        Some(name) => {
            buf.push(1);
            put_bytes(buf, name.as_bytes());
        }
        None => buf.push(0),
    }
    buf.extend_from_slice(&contract.origin_energy_limit.to_le_bytes());
}

/// Encode a contract payload with a leading variant tag.
pub fn encode_contract(contract: &ContractPayload) -> Vec<u8> {
    let mut buf = Vec::new();
    match contract {
        ContractPayload::Transfer(c) => {
            buf.push(1);
            buf.extend_from_slice(c.owner.as_bytes());
            buf.extend_from_slice(c.to.as_bytes());
            buf.extend_from_slice(&c.amount.to_le_bytes());
        }
        ContractPayload::TransferAsset(c) => {
            buf.push(2);
            buf.extend_from_slice(c.owner.as_bytes());
            buf.extend_from_slice(c.to.as_bytes());
            put_bytes(&mut buf, &c.asset_name);
            buf.extend_from_slice(&c.amount.to_le_bytes());
        }
        ContractPayload::TriggerSmartContract(c) => {
            buf.push(3);
            buf.extend_from_slice(c.owner.as_bytes());
            put_optional_address(&mut buf, &c.contract);
            buf.extend_from_slice(&c.call_value.to_le_bytes());
            put_bytes(&mut buf, &c.data);
            buf.extend_from_slice(&c.token_value.to_le_bytes());
            buf.extend_from_slice(&c.token_id.to_le_bytes());
        }
        ContractPayload::CreateSmartContract(c) => {
            buf.push(4);
            buf.extend_from_slice(c.owner.as_bytes());
            put_smart_contract(&mut buf, &c.new_contract);
            buf.extend_from_slice(&c.token_value.to_le_bytes());
            buf.extend_from_slice(&c.token_id.to_le_bytes());
        }
    }
    buf
}

// ==================== Transaction encoding ====================

/// Encode the unsigned body of a transaction. Hashed for the transaction id.
pub fn encode_raw_transaction(raw: &RawTransaction) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&raw.ref_block_bytes);
    buf.extend_from_slice(&raw.ref_block_hash);
    buf.extend_from_slice(&raw.expiration_ms.to_le_bytes());
    put_bytes(&mut buf, &raw.memo);
    put_bytes(&mut buf, &encode_contract(&raw.contract));
    buf.extend_from_slice(&raw.permission_id.to_le_bytes());
    buf.extend_from_slice(&raw.timestamp_ms.to_le_bytes());
    buf.extend_from_slice(&raw.fee_limit.to_le_bytes());
    buf
}

/// Encode a full transaction including signatures.
pub fn encode_transaction(tx: &Transaction) -> Vec<u8> {
    let mut buf = Vec::new();
    put_bytes(&mut buf, &encode_raw_transaction(&tx.raw));
    buf.extend_from_slice(&(tx.signatures.len() as u32).to_le_bytes());
    for sig in &tx.signatures {
        put_bytes(&mut buf, sig);
    }
    buf
}

// ==================== Block encoding ====================

/// Encode a block header. Hashed for the block id.
pub fn encode_header(header: &BlockHeader) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&header.number.to_le_bytes());
    buf.extend_from_slice(header.parent_id.as_bytes());
    buf.extend_from_slice(header.tx_root.as_bytes());
    buf.extend_from_slice(header.state_root.as_bytes());
    buf.extend_from_slice(header.witness.as_bytes());
    buf.extend_from_slice(&header.timestamp_ms.to_le_bytes());
    buf.extend_from_slice(&header.version.to_le_bytes());
    buf
}

/// Encode a full block.
pub fn encode_block(block: &Block) -> Vec<u8> {
    let mut buf = encode_header(&block.header);
    buf.extend_from_slice(&(block.transactions.len() as u32).to_le_bytes());
    for tx in &block.transactions {
        put_bytes(&mut buf, &encode_transaction(tx));
    }
    buf
}
