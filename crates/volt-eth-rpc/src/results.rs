//! Result objects returned over the wire.
//!
//! Each struct reshapes native chain objects into the Ethereum record the
//! caller expects. Fields the native chain has no equivalent for are
//! emitted as explicit nulls, never guessed.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use volt_ledger::ConstantExecution;
use volt_primitives::hex::{encode_bytes, encode_quantity};
use volt_types::{Block, ContractPayload, Transaction, TransactionInfo};

/// Placeholder nonce: the native chain has no account nonces.
const NONCE_PLACEHOLDER: &str = "0x0000000000000000";

/// Receipt-level energy usage of the transaction at `index`, looked up by
/// position in the block's info list. A short list is a backend
/// inconsistency; the field degrades to zero with a warning.
pub(crate) fn energy_usage_at(
    infos: Option<&[TransactionInfo]>,
    index: usize,
    block_number: u64,
) -> u64 {
    match infos.and_then(|list| list.get(index)) {
        Some(info) => info.receipt.energy_usage_total,
        None => {
            warn!(
                block_number,
                index, "transaction info list shorter than transaction list"
            );
            0
        }
    }
}

/// An Ethereum block record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockResult {
    /// Block height
    pub number: String,
    /// Block id
    pub hash: String,
    /// Parent block id
    pub parent_hash: String,
    /// Always null, no proof-of-work nonce
    pub nonce: Option<String>,
    /// Always null, no uncles
    pub sha3_uncles: Option<String>,
    /// Always 256 zero bytes
    pub logs_bloom: String,
    /// Transaction merkle root
    pub transactions_root: String,
    /// State root
    pub state_root: String,
    /// Always null
    pub receipts_root: Option<String>,
    /// Producing witness
    pub miner: String,
    /// Always null
    pub difficulty: Option<String>,
    /// Always null
    pub total_difficulty: Option<String>,
    /// Always null
    pub extra_data: Option<String>,
    /// Serialized size in bytes
    pub size: String,
    /// Sum of declared fee limits
    pub gas_limit: String,
    /// Sum of per-transaction energy usage
    pub gas_used: String,
    /// Production timestamp, native milliseconds
    pub timestamp: String,
    /// Transaction objects or ids, per the full flag
    pub transactions: Vec<Value>,
    /// Always empty
    pub uncles: Vec<String>,
}

impl BlockResult {
    /// Build a block record. `infos` is the block's execution-info list,
    /// `energy_fee` the energy price at the block timestamp.
    pub fn new(
        block: &Block,
        full: bool,
        energy_fee: u64,
        infos: Option<&[TransactionInfo]>,
    ) -> Self {
        let block_id = block.id();
        let mut gas_used = 0u64;
        let mut gas_limit = 0u64;
        let mut transactions = Vec::with_capacity(block.transactions.len());

        for (index, tx) in block.transactions.iter().enumerate() {
            let energy_used = energy_usage_at(infos, index, block.number());
            gas_used = gas_used.saturating_add(energy_used);
            gas_limit = gas_limit.saturating_add(tx.raw.fee_limit);
            if full {
                let result = TransactionResult::new(block, index, tx, energy_used, energy_fee);
                transactions.push(serde_json::to_value(result).unwrap_or(Value::Null));
            } else {
                transactions.push(Value::String(tx.id().to_hex()));
            }
        }

        Self {
            number: encode_quantity(block.number()),
            hash: block_id.to_hex(),
            parent_hash: block.header.parent_id.to_hex(),
            nonce: None,
            sha3_uncles: None,
            logs_bloom: encode_bytes(&[0u8; 256]),
            transactions_root: block.header.tx_root.to_hex(),
            state_root: block.header.state_root.to_hex(),
            receipts_root: None,
            miner: block.header.witness.to_eth_hex(),
            difficulty: None,
            total_difficulty: None,
            extra_data: None,
            size: encode_quantity(block.serialized_size() as u64),
            gas_limit: encode_quantity(gas_limit),
            gas_used: encode_quantity(gas_used),
            timestamp: encode_quantity(block.timestamp_ms().max(0) as u64),
            transactions,
            uncles: Vec::new(),
        }
    }
}

/// An Ethereum transaction record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResult {
    /// Canonical transaction id
    pub hash: String,
    /// Fixed placeholder, no account nonces
    pub nonce: String,
    /// Including block id, null while pending
    pub block_hash: Option<String>,
    /// Including block height, null while pending
    pub block_number: Option<String>,
    /// Position in the block, null while pending
    pub transaction_index: Option<String>,
    /// Sender
    pub from: String,
    /// Recipient, null for creations
    pub to: Option<String>,
    /// Native value moved
    pub value: String,
    /// Network energy rate at the block timestamp
    pub gas_price: String,
    /// Energy consumed
    pub gas: String,
    /// Call data or deployment bytecode
    pub input: String,
    /// Recovery id from the first native signature, null while unsigned
    pub v: Option<String>,
    /// Signature r, null while unsigned
    pub r: Option<String>,
    /// Signature s, null while unsigned
    pub s: Option<String>,
}

impl TransactionResult {
    /// Build a transaction record in its block context.
    pub fn new(
        block: &Block,
        index: usize,
        tx: &Transaction,
        energy_used: u64,
        energy_fee: u64,
    ) -> Self {
        let mut result = Self::pending(tx, energy_fee);
        result.block_hash = Some(block.id().to_hex());
        result.block_number = Some(encode_quantity(block.number()));
        result.transaction_index = Some(encode_quantity(index as u64));
        result.gas = encode_quantity(energy_used);
        result
    }

    /// Minimal record for a transaction without a resolvable block.
    pub fn pending(tx: &Transaction, energy_fee: u64) -> Self {
        let (v, r, s) = signature_parts(tx);
        Self {
            hash: tx.id().to_hex(),
            nonce: NONCE_PLACEHOLDER.to_string(),
            block_hash: None,
            block_number: None,
            transaction_index: None,
            from: tx.owner_address().to_eth_hex(),
            to: tx.to_address().map(|a| a.to_eth_hex()),
            value: encode_quantity(tx.amount()),
            gas_price: encode_quantity(energy_fee),
            gas: encode_quantity(0),
            input: encode_bytes(tx.input()),
            v,
            r,
            s,
        }
    }
}

/// Split v/r/s out of the first 65-byte native signature. The recovery id
/// is normalized to the Ethereum 27/28 convention.
fn signature_parts(tx: &Transaction) -> (Option<String>, Option<String>, Option<String>) {
    match tx.signatures.first() {
        Some(sig) if sig.len() == 65 => {
            let mut v = u64::from(sig[64]);
            if v < 27 {
                v += 27;
            }
            (
                Some(encode_quantity(v)),
                Some(encode_bytes(&sig[..32])),
                Some(encode_bytes(&sig[32..64])),
            )
        }
        _ => (None, None, None),
    }
}

/// One log record inside a receipt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogResult {
    /// Position in the block's log stream
    pub log_index: String,
    /// Including block height
    pub block_number: String,
    /// Including block id
    pub block_hash: String,
    /// Emitting transaction id
    pub transaction_hash: String,
    /// Position of the emitting transaction
    pub transaction_index: String,
    /// Emitting contract
    pub address: String,
    /// Unindexed payload
    pub data: String,
    /// Indexed topics
    pub topics: Vec<String>,
    /// Always false, no reorg reporting
    pub removed: bool,
}

/// An Ethereum transaction receipt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Including block id
    pub block_hash: String,
    /// Including block height
    pub block_number: String,
    /// Position in the block
    pub transaction_index: String,
    /// Transaction id
    pub transaction_hash: String,
    /// Sender
    pub from: String,
    /// Recipient, null for creations
    pub to: Option<String>,
    /// Energy usage summed over the block up to and including this index
    pub cumulative_gas_used: String,
    /// Network energy rate at the block timestamp
    pub effective_gas_price: String,
    /// Energy consumed by this transaction
    pub gas_used: String,
    /// Created contract, only for creations
    pub contract_address: Option<String>,
    /// Emitted logs
    pub logs: Vec<LogResult>,
    /// Always 256 zero bytes
    pub logs_bloom: String,
    /// Execution outcome, `0x1` success
    pub status: String,
    /// Always legacy
    #[serde(rename = "type")]
    pub transaction_type: String,
}

impl TransactionReceipt {
    /// Build a receipt. `infos` is the whole block's execution-info list;
    /// the cumulative sum and the log offsets both derive from the entries
    /// before `index`.
    pub fn new(
        block: &Block,
        index: usize,
        tx: &Transaction,
        info: &TransactionInfo,
        infos: Option<&[TransactionInfo]>,
        energy_fee: u64,
    ) -> Self {
        let block_id = block.id();
        let mut cumulative = 0u64;
        let mut log_offset = 0u64;
        if let Some(list) = infos {
            for earlier in list.iter().take(index) {
                cumulative = cumulative.saturating_add(earlier.receipt.energy_usage_total);
                log_offset += earlier.logs.len() as u64;
            }
        }
        cumulative = cumulative.saturating_add(info.receipt.energy_usage_total);

        let tx_id = tx.id();
        let logs = info
            .logs
            .iter()
            .enumerate()
            .map(|(i, log)| LogResult {
                log_index: encode_quantity(log_offset + i as u64),
                block_number: encode_quantity(block.number()),
                block_hash: block_id.to_hex(),
                transaction_hash: tx_id.to_hex(),
                transaction_index: encode_quantity(index as u64),
                address: log.address.to_eth_hex(),
                data: encode_bytes(&log.data),
                topics: log.topics.iter().map(|t| t.to_hex()).collect(),
                removed: false,
            })
            .collect();

        let contract_address = if tx.raw.contract.is_creation() {
            info.contract_address.map(|a| a.to_eth_hex())
        } else {
            None
        };

        Self {
            block_hash: block_id.to_hex(),
            block_number: encode_quantity(block.number()),
            transaction_index: encode_quantity(index as u64),
            transaction_hash: tx_id.to_hex(),
            from: tx.owner_address().to_eth_hex(),
            to: tx.to_address().map(|a| a.to_eth_hex()),
            cumulative_gas_used: encode_quantity(cumulative),
            effective_gas_price: encode_quantity(energy_fee),
            gas_used: encode_quantity(info.receipt.energy_usage_total),
            contract_address,
            logs,
            logs_bloom: encode_bytes(&[0u8; 256]),
            status: if info.is_success() { "0x1" } else { "0x0" }.to_string(),
            transaction_type: "0x0".to_string(),
        }
    }
}

/// Sync progress reported by `eth_syncing`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncingResult {
    /// Height when the current sync round began
    pub starting_block: String,
    /// Current head height
    pub current_block: String,
    /// Estimated network head height
    pub highest_block: String,
}

/// Concatenated return data of a constant execution, hex-encoded.
pub fn constant_result_hex(execution: &ConstantExecution) -> String {
    let mut data = Vec::new();
    for segment in &execution.constant_results {
        data.extend_from_slice(segment);
    }
    encode_bytes(&data)
}

/// `buildTransaction` result: the unsigned transaction as generic JSON.
#[derive(Debug, Serialize)]
pub struct TransactionJson {
    /// Rendered transaction
    pub transaction: Value,
}

impl TransactionJson {
    /// Render a transaction. With `visible`, text-bearing byte fields
    /// (asset name, memo) appear as UTF-8 strings where they decode
    /// cleanly.
    pub fn from_transaction(tx: &Transaction, visible: bool) -> Self {
        let raw = &tx.raw;
        let mut raw_data = json!({
            "ref_block_bytes": encode_bytes(&raw.ref_block_bytes),
            "ref_block_hash": encode_bytes(&raw.ref_block_hash),
            "expiration": raw.expiration_ms,
            "timestamp": raw.timestamp_ms,
            "fee_limit": raw.fee_limit,
            "contract": [contract_json(&raw.contract, visible)],
        });
        if !raw.memo.is_empty() {
            raw_data["data"] = text_bytes(&raw.memo, visible);
        }
        Self {
            transaction: json!({
                "txID": tx.id().to_hex(),
                "raw_data": raw_data,
                "signature": [],
            }),
        }
    }
}

fn contract_json(contract: &ContractPayload, visible: bool) -> Value {
    let parameter = match contract {
        ContractPayload::Transfer(c) => json!({
            "owner_address": c.owner.to_hex(),
            "to_address": c.to.to_hex(),
            "amount": c.amount,
        }),
        ContractPayload::TransferAsset(c) => json!({
            "owner_address": c.owner.to_hex(),
            "to_address": c.to.to_hex(),
            "asset_name": text_bytes(&c.asset_name, visible),
            "amount": c.amount,
        }),
        ContractPayload::TriggerSmartContract(c) => {
            let mut v = json!({
                "owner_address": c.owner.to_hex(),
                "call_value": c.call_value,
                "data": encode_bytes(&c.data),
            });
            if let Some(target) = c.contract {
                v["contract_address"] = Value::String(target.to_hex());
            }
            if c.token_id != 0 {
                v["token_id"] = json!(c.token_id);
                v["call_token_value"] = json!(c.token_value);
            }
            v
        }
        ContractPayload::CreateSmartContract(c) => {
            let sc = &c.new_contract;
            let mut new_contract = json!({
                "origin_address": sc.origin.to_hex(),
                "bytecode": encode_bytes(&sc.bytecode),
                "call_value": sc.call_value,
                "consume_user_resource_percent": sc.consume_user_resource_percent,
                "origin_energy_limit": sc.origin_energy_limit,
            });
            if let Some(abi) = &sc.abi {
                new_contract["abi"] = json!({ "entrys": abi.entries });
            }
            if let Some(name) = &sc.name {
                new_contract["name"] = Value::String(name.clone());
            }
            if let Some(address) = sc.contract_address {
                new_contract["contract_address"] = Value::String(address.to_hex());
            }
            let mut v = json!({
                "owner_address": c.owner.to_hex(),
                "new_contract": new_contract,
            });
            if c.token_id != 0 {
                v["token_id"] = json!(c.token_id);
                v["call_token_value"] = json!(c.token_value);
            }
            v
        }
    };
    json!({
        "type": contract.type_name(),
        "parameter": parameter,
    })
}

fn text_bytes(bytes: &[u8], visible: bool) -> Value {
    if visible {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return Value::String(text.to_string());
        }
    }
    Value::String(encode_bytes(bytes).trim_start_matches("0x").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use volt_primitives::{Address, H256};
    use volt_types::{
        BlockHeader, ContractResult, RawTransaction, ResourceReceipt, TransferContract,
        TriggerSmartContract, TransactionLog,
    };

    fn addr(tail: u8) -> Address {
        Address::from_eth_bytes([tail; 20])
    }

    fn transfer_tx(amount: u64) -> Transaction {
        Transaction::unsigned(RawTransaction::unsigned(ContractPayload::Transfer(
            TransferContract {
                owner: addr(0x01),
                to: addr(0x02),
                amount,
            },
        )))
    }

    fn block_with(transactions: Vec<Transaction>) -> Block {
        Block {
            header: BlockHeader {
                number: 42,
                parent_id: H256::ZERO,
                tx_root: H256::ZERO,
                state_root: H256::ZERO,
                witness: addr(0x0f),
                timestamp_ms: 1_700_000_003_000,
                version: 2,
            },
            transactions,
        }
    }

    fn info_with(energy: u64, logs: usize) -> TransactionInfo {
        TransactionInfo {
            id: H256::ZERO,
            block_number: 42,
            block_timestamp_ms: 1_700_000_003_000,
            contract_address: None,
            receipt: ResourceReceipt {
                energy_usage_total: energy,
                result: ContractResult::Success,
            },
            logs: (0..logs)
                .map(|_| TransactionLog {
                    address: addr(0x0c),
                    topics: vec![H256::ZERO],
                    data: Bytes::from_static(&[0x01]),
                })
                .collect(),
        }
    }

    // ==================== BlockResult tests ====================

    #[test]
    fn test_block_result_sums_gas() {
        let mut a = transfer_tx(1);
        a.raw.fee_limit = 100;
        let mut b = transfer_tx(2);
        b.raw.fee_limit = 250;
        let block = block_with(vec![a, b]);
        let infos = vec![info_with(30, 0), info_with(70, 0)];

        let result = BlockResult::new(&block, false, 100, Some(&infos));
        assert_eq!(result.gas_used, "0x64");
        assert_eq!(result.gas_limit, "0x15e");
        assert_eq!(result.number, "0x2a");
    }

    #[test]
    fn test_block_result_timestamp_is_verbatim_milliseconds() {
        let block = block_with(vec![]);
        let result = BlockResult::new(&block, false, 100, None);
        assert_eq!(result.timestamp, "0x18bcfe573b8");
    }

    #[test]
    fn test_block_result_hash_only_lists_ids_in_order() {
        let a = transfer_tx(1);
        let b = transfer_tx(2);
        let (id_a, id_b) = (a.id().to_hex(), b.id().to_hex());
        let block = block_with(vec![a, b]);

        let result = BlockResult::new(&block, false, 100, None);
        assert_eq!(result.transactions.len(), 2);
        assert_eq!(result.transactions[0], Value::String(id_a));
        assert_eq!(result.transactions[1], Value::String(id_b));
    }

    #[test]
    fn test_block_result_full_mode_indexes_in_order() {
        let block = block_with(vec![transfer_tx(1), transfer_tx(2), transfer_tx(3)]);
        let result = BlockResult::new(&block, true, 100, None);
        for (i, tx) in result.transactions.iter().enumerate() {
            assert_eq!(
                tx["transactionIndex"],
                Value::String(encode_quantity(i as u64))
            );
        }
    }

    #[test]
    fn test_block_result_placeholders_are_null() {
        let block = block_with(vec![]);
        let value = serde_json::to_value(BlockResult::new(&block, false, 100, None)).unwrap();
        for field in [
            "nonce",
            "sha3Uncles",
            "receiptsRoot",
            "difficulty",
            "totalDifficulty",
            "extraData",
        ] {
            assert!(value[field].is_null(), "{} should be null", field);
        }
        assert_eq!(value["logsBloom"], json!(encode_bytes(&[0u8; 256])));
        assert_eq!(value["uncles"], json!([]));
    }

    #[test]
    fn test_short_info_list_degrades_to_zero() {
        let block = block_with(vec![transfer_tx(1), transfer_tx(2)]);
        let infos = vec![info_with(55, 0)];
        let result = BlockResult::new(&block, false, 100, Some(&infos));
        assert_eq!(result.gas_used, "0x37");
    }

    // ==================== TransactionResult tests ====================

    #[test]
    fn test_transaction_result_fields() {
        let block = block_with(vec![transfer_tx(7)]);
        let tx = &block.transactions[0];
        let result = TransactionResult::new(&block, 0, tx, 21, 100);

        assert_eq!(result.hash, tx.id().to_hex());
        assert_eq!(result.nonce, "0x0000000000000000");
        assert_eq!(result.block_number.as_deref(), Some("0x2a"));
        assert_eq!(result.transaction_index.as_deref(), Some("0x0"));
        assert_eq!(result.from, addr(0x01).to_eth_hex());
        assert_eq!(result.to.as_deref(), Some(addr(0x02).to_eth_hex().as_str()));
        assert_eq!(result.value, "0x7");
        assert_eq!(result.gas, "0x15");
        assert_eq!(result.gas_price, "0x64");
        assert_eq!(result.input, "0x");
    }

    #[test]
    fn test_pending_has_null_block_fields() {
        let tx = transfer_tx(1);
        let value = serde_json::to_value(TransactionResult::pending(&tx, 100)).unwrap();
        assert!(value["blockHash"].is_null());
        assert!(value["blockNumber"].is_null());
        assert!(value["transactionIndex"].is_null());
    }

    #[test]
    fn test_signature_split_and_v_normalization() {
        let mut tx = transfer_tx(1);
        let mut sig = vec![0xaa; 32];
        sig.extend_from_slice(&[0xbb; 32]);
        sig.push(0x01);
        tx.signatures.push(Bytes::from(sig));

        let result = TransactionResult::pending(&tx, 100);
        assert_eq!(result.v.as_deref(), Some("0x1c"));
        assert_eq!(result.r.as_deref(), Some(format!("0x{}", "aa".repeat(32)).as_str()));
        assert_eq!(result.s.as_deref(), Some(format!("0x{}", "bb".repeat(32)).as_str()));
    }

    #[test]
    fn test_unsigned_has_null_signature_fields() {
        let result = TransactionResult::pending(&transfer_tx(1), 100);
        assert!(result.v.is_none());
        assert!(result.r.is_none());
        assert!(result.s.is_none());
    }

    // ==================== TransactionReceipt tests ====================

    #[test]
    fn test_receipt_cumulative_and_log_offsets() {
        let block = block_with(vec![transfer_tx(1), transfer_tx(2)]);
        let infos = vec![info_with(40, 2), info_with(60, 1)];

        let receipt = TransactionReceipt::new(
            &block,
            1,
            &block.transactions[1],
            &infos[1],
            Some(&infos),
            100,
        );
        assert_eq!(receipt.cumulative_gas_used, "0x64");
        assert_eq!(receipt.gas_used, "0x3c");
        assert_eq!(receipt.logs.len(), 1);
        // Two logs emitted by the earlier transaction shift the index.
        assert_eq!(receipt.logs[0].log_index, "0x2");
        assert_eq!(receipt.status, "0x1");
        assert_eq!(receipt.transaction_type, "0x0");
        assert!(receipt.contract_address.is_none());
    }

    #[test]
    fn test_receipt_failure_status() {
        let block = block_with(vec![transfer_tx(1)]);
        let mut info = info_with(10, 0);
        info.receipt.result = ContractResult::Revert;
        let receipt =
            TransactionReceipt::new(&block, 0, &block.transactions[0], &info, None, 100);
        assert_eq!(receipt.status, "0x0");
        assert_eq!(receipt.cumulative_gas_used, "0xa");
    }

    // ==================== Constant result tests ====================

    #[test]
    fn test_constant_result_concatenates_segments() {
        let execution = ConstantExecution {
            transaction: transfer_tx(0),
            energy_used: 5,
            constant_results: vec![
                Bytes::from_static(&[0x01, 0x02]),
                Bytes::from_static(&[0x03]),
            ],
        };
        assert_eq!(constant_result_hex(&execution), "0x010203");
    }

    #[test]
    fn test_constant_result_empty_is_bare_prefix() {
        let execution = ConstantExecution {
            transaction: transfer_tx(0),
            energy_used: 0,
            constant_results: Vec::new(),
        };
        assert_eq!(constant_result_hex(&execution), "0x");
    }

    // ==================== TransactionJson tests ====================

    #[test]
    fn test_transaction_json_shape() {
        let tx = transfer_tx(500);
        let json = TransactionJson::from_transaction(&tx, false);
        let t = &json.transaction;
        assert_eq!(t["txID"], Value::String(tx.id().to_hex()));
        assert_eq!(t["signature"], json!([]));
        assert_eq!(
            t["raw_data"]["contract"][0]["type"],
            Value::String("TransferContract".into())
        );
        assert_eq!(t["raw_data"]["contract"][0]["parameter"]["amount"], json!(500));
    }

    #[test]
    fn test_transaction_json_visible_memo() {
        let mut tx = transfer_tx(1);
        tx.raw.memo = Bytes::from_static(b"hello");
        let visible = TransactionJson::from_transaction(&tx, true);
        assert_eq!(visible.transaction["raw_data"]["data"], json!("hello"));
        let hidden = TransactionJson::from_transaction(&tx, false);
        assert_eq!(hidden.transaction["raw_data"]["data"], json!("68656c6c6f"));
    }

    #[test]
    fn test_transaction_json_trigger_fields() {
        let tx = Transaction::unsigned(RawTransaction::unsigned(
            ContractPayload::TriggerSmartContract(TriggerSmartContract {
                owner: addr(0x0a),
                contract: Some(addr(0x0b)),
                call_value: 9,
                data: Bytes::from_static(&[0xde, 0xad]),
                token_value: 0,
                token_id: 0,
            }),
        ));
        let json = TransactionJson::from_transaction(&tx, false);
        let parameter = &json.transaction["raw_data"]["contract"][0]["parameter"];
        assert_eq!(parameter["contract_address"], json!(addr(0x0b).to_hex()));
        assert_eq!(parameter["data"], json!("0xdead"));
        assert!(parameter.get("token_id").is_none());
    }
}
