//! Ethereum namespace RPC methods (eth_*)

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use serde_json::{json, Value};
use tracing::warn;

use volt_ledger::LedgerView;
use volt_primitives::hex::{decode_quantity, decode_storage_index, encode_bytes, encode_quantity};
use volt_primitives::H256;
use volt_types::{
    Block, ContractPayload, RawTransaction, Transaction, TransferContract, TriggerSmartContract,
    BLOCK_INTERVAL_MS,
};

use crate::args::{CallArguments, ContractKind};
use crate::error::JsonRpcError;
use crate::handler::RpcContext;
use crate::results::{
    constant_result_hex, energy_usage_at, BlockResult, SyncingResult, TransactionReceipt,
    TransactionResult,
};
use crate::types::{
    param, parse_address, parse_full_flag, parse_hash, require_latest, require_latest_at,
};

/// Chain id: the last four bytes of the genesis block id, byte-hex.
fn chain_id_hex(view: &Arc<dyn LedgerView>) -> Result<String, JsonRpcError> {
    let genesis = view
        .block_by_num(0)
        .ok_or_else(|| JsonRpcError::internal_error("genesis block not found"))?;
    let id = genesis.id();
    Ok(encode_bytes(&id.as_bytes()[28..]))
}

/// Position of a transaction in its block, re-derived by scanning.
fn index_of(block: &Block, id: &H256) -> Option<usize> {
    block.transactions.iter().position(|tx| tx.id() == *id)
}

fn call_arguments(value: &Value) -> Result<CallArguments, JsonRpcError> {
    serde_json::from_value(value.clone())
        .map_err(|e| JsonRpcError::invalid_params(e.to_string()))
}

/// Assemble the trigger payload and placeholder transaction behind `call`
/// and `estimateGas`. Never touches the backend.
fn assemble_trigger(
    args: &CallArguments,
) -> Result<(TriggerSmartContract, Transaction), JsonRpcError> {
    let contract = match args.to {
        Some(_) => Some(args.to_address()?),
        None => None,
    };
    let trigger = TriggerSmartContract {
        owner: args.from_address()?,
        contract,
        call_value: args.parse_value()?,
        data: Bytes::from(args.data_bytes()?),
        token_value: 0,
        token_id: 0,
    };
    let transaction = Transaction::unsigned(RawTransaction::unsigned(
        ContractPayload::TriggerSmartContract(trigger.clone()),
    ));
    Ok((trigger, transaction))
}

fn block_result(view: &Arc<dyn LedgerView>, block: &Block, full: bool) -> Value {
    let infos = view.transaction_infos_by_block(block.number());
    let energy_fee = view.energy_price_at(block.timestamp_ms());
    serde_json::to_value(BlockResult::new(block, full, energy_fee, infos.as_deref()))
        .unwrap_or(Value::Null)
}

/// eth_chainId - Returns the chain ID
pub async fn eth_chain_id(
    ctx: Arc<RpcContext>,
    _params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    let view = ctx.backend.view();
    Ok(Value::String(chain_id_hex(&view)?))
}

/// eth_blockNumber - Returns the current block number
pub async fn eth_block_number(
    ctx: Arc<RpcContext>,
    _params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    let number = ctx.backend.view().head_block().map_or(0, |b| b.number());
    Ok(Value::String(encode_quantity(number)))
}

/// eth_protocolVersion - Returns the head block's header version
pub async fn eth_protocol_version(
    ctx: Arc<RpcContext>,
    _params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    Ok(match ctx.backend.view().head_block() {
        Some(block) => Value::String(encode_quantity(u64::from(block.header.version))),
        None => Value::Null,
    })
}

/// eth_gasPrice - Returns the current energy price
pub async fn eth_gas_price(
    ctx: Arc<RpcContext>,
    _params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    Ok(Value::String(encode_quantity(
        ctx.backend.view().energy_price(),
    )))
}

/// eth_getBalance - Returns the balance of an account
pub async fn eth_get_balance(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    let address = parse_address(param(&params, 0, "address")?)?;
    require_latest_at(&params, 1)?;

    let balance = ctx
        .backend
        .view()
        .account(&address)
        .map_or(0, |a| a.balance);
    Ok(Value::String(encode_quantity(balance)))
}

/// eth_getStorageAt - Returns one storage slot of a contract
pub async fn eth_get_storage_at(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    let address = parse_address(param(&params, 0, "address")?)?;
    let key = param(&params, 1, "storage index")?
        .as_str()
        .ok_or_else(|| JsonRpcError::invalid_params("invalid storage index"))
        .and_then(|s| {
            decode_storage_index(s).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
        })?;
    require_latest_at(&params, 2)?;

    let value = ctx
        .backend
        .view()
        .storage_slot(&address, &key)
        .unwrap_or(H256::ZERO);
    Ok(Value::String(value.to_hex()))
}

/// eth_getCode - Returns the runtime code of a contract
pub async fn eth_get_code(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    let address = parse_address(param(&params, 0, "address")?)?;
    require_latest_at(&params, 1)?;

    let code = ctx
        .backend
        .view()
        .contract_info(&address)
        .map_or_else(|| "0x".to_string(), |info| encode_bytes(&info.runtime_code));
    Ok(Value::String(code))
}

/// eth_coinbase - Returns the block-reward recipient
pub async fn eth_coinbase(
    ctx: Arc<RpcContext>,
    _params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    match ctx.backend.coinbase() {
        Some(address) => Ok(Value::String(address.to_eth_hex())),
        None => Err(JsonRpcError::internal_error(
            "etherbase must be explicitly specified",
        )),
    }
}

/// eth_getBlockByHash - Returns a block by its id
pub async fn eth_get_block_by_hash(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    let hash = parse_hash(param(&params, 0, "block hash")?)?;
    let full = parse_full_flag(&params, 1);

    let view = ctx.backend.view();
    Ok(match view.block_by_id(&hash) {
        Some(block) => block_result(&view, &block, full),
        None => Value::Null,
    })
}

/// eth_getBlockByNumber - Returns a block by tag (only `latest`)
pub async fn eth_get_block_by_number(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    require_latest(param(&params, 0, "block number")?)?;
    let full = parse_full_flag(&params, 1);

    let view = ctx.backend.view();
    Ok(match view.head_block() {
        Some(block) => block_result(&view, &block, full),
        None => Value::Null,
    })
}

/// eth_getBlockTransactionCountByHash - Transaction count of a block by id
pub async fn eth_get_block_transaction_count_by_hash(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    let hash = parse_hash(param(&params, 0, "block hash")?)?;
    Ok(match ctx.backend.view().block_by_id(&hash) {
        Some(block) => Value::String(encode_quantity(block.transaction_count() as u64)),
        None => Value::Null,
    })
}

/// eth_getBlockTransactionCountByNumber - Transaction count by tag
pub async fn eth_get_block_transaction_count_by_number(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    require_latest(param(&params, 0, "block number")?)?;
    Ok(match ctx.backend.view().head_block() {
        Some(block) => Value::String(encode_quantity(block.transaction_count() as u64)),
        None => Value::Null,
    })
}

/// eth_getTransactionByHash - Returns a transaction by its id
pub async fn eth_get_transaction_by_hash(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    let id = parse_hash(param(&params, 0, "transaction hash")?)?;
    let view = ctx.backend.view();

    // An execution record names the including block; the index is always
    // re-derived by scanning that block, never read from storage.
    if let Some(info) = view.transaction_info_by_id(&id) {
        let Some(block) = view.block_by_num(info.block_number) else {
            return Ok(Value::Null);
        };
        let Some(index) = index_of(&block, &id) else {
            return Ok(Value::Null);
        };
        let energy_fee = view.energy_price_at(block.timestamp_ms());
        let result = TransactionResult::new(
            &block,
            index,
            &block.transactions[index],
            info.receipt.energy_usage_total,
            energy_fee,
        );
        return Ok(serde_json::to_value(result).unwrap_or(Value::Null));
    }

    // No execution record yet: fall back to the capsule. A capsule naming
    // a block that cannot be located resolves to absent, never a partially
    // populated record.
    if let Some(capsule) = view.transaction_by_id(&id) {
        return Ok(match capsule.block_number {
            None => {
                let result = TransactionResult::pending(&capsule.transaction, view.energy_price());
                serde_json::to_value(result).unwrap_or(Value::Null)
            }
            Some(number) => match view.block_by_num(number) {
                Some(block) => match index_of(&block, &id) {
                    Some(index) => {
                        let energy_fee = view.energy_price_at(block.timestamp_ms());
                        let result = TransactionResult::new(
                            &block,
                            index,
                            &block.transactions[index],
                            0,
                            energy_fee,
                        );
                        serde_json::to_value(result).unwrap_or(Value::Null)
                    }
                    None => Value::Null,
                },
                None => Value::Null,
            },
        });
    }

    Ok(Value::Null)
}

fn transaction_at_index(
    view: &Arc<dyn LedgerView>,
    block: &Block,
    index_value: &Value,
) -> Result<Value, JsonRpcError> {
    let index = index_value
        .as_str()
        .ok_or_else(|| JsonRpcError::invalid_params("invalid index value"))
        .and_then(|s| {
            decode_quantity(s).map_err(|_| JsonRpcError::invalid_params("invalid index value"))
        })? as usize;
    if index >= block.transaction_count() {
        return Ok(Value::Null);
    }

    let infos = view.transaction_infos_by_block(block.number());
    let energy_used = energy_usage_at(infos.as_deref(), index, block.number());
    let energy_fee = view.energy_price_at(block.timestamp_ms());
    let result = TransactionResult::new(
        block,
        index,
        &block.transactions[index],
        energy_used,
        energy_fee,
    );
    Ok(serde_json::to_value(result).unwrap_or(Value::Null))
}

/// eth_getTransactionByBlockHashAndIndex
pub async fn eth_get_transaction_by_block_hash_and_index(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    let hash = parse_hash(param(&params, 0, "block hash")?)?;
    let index_value = param(&params, 1, "index")?.clone();

    let view = ctx.backend.view();
    match view.block_by_id(&hash) {
        Some(block) => transaction_at_index(&view, &block, &index_value),
        None => Ok(Value::Null),
    }
}

/// eth_getTransactionByBlockNumberAndIndex
pub async fn eth_get_transaction_by_block_number_and_index(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    require_latest(param(&params, 0, "block number")?)?;
    let index_value = param(&params, 1, "index")?.clone();

    let view = ctx.backend.view();
    match view.head_block() {
        Some(block) => transaction_at_index(&view, &block, &index_value),
        None => Ok(Value::Null),
    }
}

/// eth_getTransactionReceipt - Returns the receipt of an executed transaction
pub async fn eth_get_transaction_receipt(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    let id = parse_hash(param(&params, 0, "transaction hash")?)?;
    let view = ctx.backend.view();

    let Some(info) = view.transaction_info_by_id(&id) else {
        return Ok(Value::Null);
    };
    let Some(block) = view.block_by_num(info.block_number) else {
        return Ok(Value::Null);
    };
    let Some(index) = index_of(&block, &id) else {
        return Ok(Value::Null);
    };

    let infos = view.transaction_infos_by_block(block.number());
    let energy_fee = view.energy_price_at(block.timestamp_ms());
    let receipt = TransactionReceipt::new(
        &block,
        index,
        &block.transactions[index],
        &info,
        infos.as_deref(),
        energy_fee,
    );
    Ok(serde_json::to_value(receipt).unwrap_or(Value::Null))
}

/// eth_call - Executes a read-only contract call
///
/// Backend failures are absorbed into a bare `0x`: a failed simulation is
/// a normal outcome for this method, never a transport fault.
pub async fn eth_call(ctx: Arc<RpcContext>, params: Vec<Value>) -> Result<Value, JsonRpcError> {
    let args = call_arguments(param(&params, 0, "call")?)?;
    require_latest_at(&params, 1)?;
    // A call always names a deployed target; only the estimation path may
    // leave the contract address open.
    args.to_address()?;
    let (trigger, transaction) = assemble_trigger(&args)?;

    let view = ctx.backend.view();
    Ok(Value::String(
        match view.trigger_constant_contract(&trigger, &transaction) {
            Ok(execution) => constant_result_hex(&execution),
            Err(error) => {
                warn!(%error, "constant call failed");
                "0x".to_string()
            }
        },
    ))
}

/// eth_estimateGas - Estimates the energy a transaction would consume
pub async fn eth_estimate_gas(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    let args = call_arguments(param(&params, 0, "call")?)?;
    require_latest_at(&params, 1)?;

    let view = ctx.backend.view();
    if args.kind() == ContractKind::Transfer {
        // Building the transfer payload validates it; a plain transfer
        // consumes no energy, so execution is skipped entirely.
        let payload = ContractPayload::Transfer(TransferContract {
            owner: args.from_address()?,
            to: args.to_address()?,
            amount: args.parse_value()?,
        });
        view.create_transaction(payload)?;
        return Ok(Value::String(encode_quantity(0)));
    }

    let (trigger, transaction) = assemble_trigger(&args)?;
    let execution = view.trigger_constant_contract(&trigger, &transaction)?;
    Ok(Value::String(encode_quantity(execution.energy_used)))
}

/// eth_syncing - Reports sync progress, or false when idle
pub async fn eth_syncing(ctx: Arc<RpcContext>, _params: Vec<Value>) -> Result<Value, JsonRpcError> {
    if ctx.backend.peer_count() == 0 {
        return Ok(Value::Bool(false));
    }
    let Some(head) = ctx.backend.view().head_block() else {
        return Ok(Value::Bool(false));
    };

    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    let drift = ((now_ms - head.timestamp_ms()) / BLOCK_INTERVAL_MS).max(0) as u64;

    let result = SyncingResult {
        starting_block: encode_quantity(ctx.backend.sync_begin_number()),
        current_block: encode_quantity(head.number()),
        highest_block: encode_quantity(head.number() + drift),
    };
    Ok(serde_json::to_value(result).unwrap_or(Value::Bool(false)))
}

/// Uncle lookups: the chain has no uncles, the answer is always null
pub async fn eth_get_uncle(
    _ctx: Arc<RpcContext>,
    _params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    Ok(Value::Null)
}

/// Uncle counts: always zero
pub async fn eth_get_uncle_count(
    _ctx: Arc<RpcContext>,
    _params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    Ok(Value::String(encode_quantity(0)))
}

/// eth_getWork - Returns the current head id and two null placeholders
pub async fn eth_get_work(ctx: Arc<RpcContext>, _params: Vec<Value>) -> Result<Value, JsonRpcError> {
    let head_id = ctx
        .backend
        .view()
        .head_block()
        .map(|b| Value::String(b.id().to_hex()))
        .unwrap_or(Value::Null);
    Ok(json!([head_id, Value::Null, Value::Null]))
}

/// eth_hashrate - Always zero, no proof of work
pub async fn eth_hashrate(
    _ctx: Arc<RpcContext>,
    _params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    Ok(Value::String(encode_quantity(0)))
}

/// eth_mining - Whether this node is actively producing blocks
pub async fn eth_mining(ctx: Arc<RpcContext>, _params: Vec<Value>) -> Result<Value, JsonRpcError> {
    Ok(Value::Bool(ctx.backend.is_witness_active()))
}

/// eth_accounts - Always empty, the node manages no keys
pub async fn eth_accounts(
    _ctx: Arc<RpcContext>,
    _params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    Ok(json!([]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use volt_ledger::{LedgerBackend, MemoryLedger};
    use volt_primitives::Address;
    use volt_types::BlockHeader;

    fn addr(tail: u8) -> Address {
        Address::from_eth_bytes([tail; 20])
    }

    fn block(number: u64) -> Block {
        Block {
            header: BlockHeader {
                number,
                parent_id: H256::ZERO,
                tx_root: H256::ZERO,
                state_root: H256::ZERO,
                witness: addr(0x07),
                timestamp_ms: 1_700_000_000_000 + number as i64 * 3_000,
                version: 1,
            },
            transactions: Vec::new(),
        }
    }

    // ==================== Helper tests ====================

    #[test]
    fn test_chain_id_is_genesis_id_tail() {
        let ledger = MemoryLedger::new();
        let genesis = block(0);
        let expected = encode_bytes(&genesis.id().as_bytes()[28..]);
        ledger.insert_block(genesis);
        ledger.insert_block(block(1));

        let view = ledger.view();
        assert_eq!(chain_id_hex(&view).unwrap(), expected);
    }

    #[test]
    fn test_chain_id_without_genesis_is_internal_error() {
        let ledger = MemoryLedger::new();
        let view = ledger.view();
        assert_eq!(chain_id_hex(&view).unwrap_err().code, -32603);
    }

    #[test]
    fn test_assemble_trigger_requires_from() {
        let args = CallArguments {
            to: Some(addr(0x02).to_eth_hex()),
            ..CallArguments::default()
        };
        let err = assemble_trigger(&args).unwrap_err();
        assert_eq!(err.message, "invalid address hash value");
    }

    #[test]
    fn test_assemble_trigger_allows_absent_to() {
        let args = CallArguments {
            from: Some(addr(0x01).to_eth_hex()),
            data: Some("0x6080".into()),
            ..CallArguments::default()
        };
        let (trigger, transaction) = assemble_trigger(&args).unwrap();
        assert!(trigger.contract.is_none());
        assert_eq!(transaction.owner_address(), addr(0x01));
    }
}
