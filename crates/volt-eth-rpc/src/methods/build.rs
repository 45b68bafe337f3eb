//! The non-standard `buildTransaction` method.
//!
//! Builds an unsigned native transaction from Ethereum-shaped arguments.
//! Only a node whose state view sits at the chain head may build; derived
//! views reject the method outright.

use std::sync::Arc;

use bytes::Bytes;
use serde_json::Value;

use volt_ledger::{Cursor, LedgerError, LedgerView};
use volt_types::{
    Abi, ContractPayload, CreateSmartContract, SmartContract, Transaction, TransferAssetContract,
    TransferContract, TriggerSmartContract,
};

use crate::args::{BuildArguments, ContractKind};
use crate::error::JsonRpcError;
use crate::handler::RpcContext;
use crate::results::TransactionJson;
use crate::types::param;

/// buildTransaction - Builds an unsigned transaction from call-style args
pub async fn build_transaction(
    ctx: Arc<RpcContext>,
    params: Vec<Value>,
) -> Result<Value, JsonRpcError> {
    let cursor = ctx.backend.cursor();
    if cursor != Cursor::Head {
        return Err(JsonRpcError::method_not_found(format!(
            "the method buildTransaction does not exist/is not available in {}",
            cursor
        )));
    }

    let args: BuildArguments = serde_json::from_value(param(&params, 0, "transaction")?.clone())
        .map_err(|_| JsonRpcError::invalid_request("invalid json request"))?;

    let view = ctx.backend.view();
    let transaction = match args.kind() {
        ContractKind::Create => build_create(&view, &args)?,
        ContractKind::Invoke => build_invoke(&view, &args)?,
        ContractKind::Transfer => build_transfer(&view, &args)?,
        ContractKind::AssetTransfer => build_asset_transfer(&view, &args)?,
        ContractKind::Unknown => return Ok(Value::Null),
    };

    let result = TransactionJson::from_transaction(&transaction, args.visible);
    Ok(serde_json::to_value(result).unwrap_or(Value::Null))
}

/// Backend failures during building: validation keeps its message as a
/// request-level rejection, everything else is internal.
fn map_build_error(error: LedgerError) -> JsonRpcError {
    match error {
        LedgerError::Validation(msg) => {
            if msg.is_empty() {
                JsonRpcError::invalid_request("invalid contract")
            } else {
                JsonRpcError::invalid_request(msg)
            }
        }
        other => {
            let msg = other.to_string();
            if msg.is_empty() {
                JsonRpcError::internal_error("invalid json request")
            } else {
                JsonRpcError::internal_error(msg)
            }
        }
    }
}

fn parse_abi(args: &BuildArguments) -> Result<Option<Abi>, JsonRpcError> {
    match args.abi.as_deref() {
        None | Some("") => Ok(None),
        Some(text) => {
            let entries: Value = serde_json::from_str(text)
                .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?;
            Ok(Some(Abi { entries }))
        }
    }
}

/// Fee limit for contract paths: declared gas at the current energy price.
fn fee_limit(view: &Arc<dyn LedgerView>, args: &BuildArguments) -> Result<u64, JsonRpcError> {
    Ok(args.parse_gas()?.saturating_mul(view.energy_price()))
}

fn apply_permission(transaction: &mut Transaction, args: &BuildArguments) {
    if args.permission_id > 0 {
        transaction.raw.permission_id = args.permission_id;
    }
}

fn apply_extra_data(transaction: &mut Transaction, args: &BuildArguments) {
    if let Some(memo) = args.extra_data.as_deref() {
        if !memo.is_empty() {
            transaction.raw.memo = Bytes::copy_from_slice(memo.as_bytes());
        }
    }
}

fn build_create(
    view: &Arc<dyn LedgerView>,
    args: &BuildArguments,
) -> Result<Transaction, JsonRpcError> {
    let owner = args.from_address()?;
    let new_contract = SmartContract {
        origin: owner,
        contract_address: None,
        abi: parse_abi(args)?,
        bytecode: Bytes::from(args.data_bytes()?),
        call_value: args.parse_value()?,
        consume_user_resource_percent: args.consume_user_resource_percent,
        name: args.name.clone(),
        origin_energy_limit: args.origin_energy_limit,
    };
    let payload = ContractPayload::CreateSmartContract(CreateSmartContract {
        owner,
        new_contract,
        token_value: args.token_value,
        token_id: args.token_id,
    });

    let mut transaction = view.create_transaction(payload).map_err(map_build_error)?;
    transaction.raw.fee_limit = fee_limit(view, args)?;
    apply_permission(&mut transaction, args);
    Ok(transaction)
}

fn build_invoke(
    view: &Arc<dyn LedgerView>,
    args: &BuildArguments,
) -> Result<Transaction, JsonRpcError> {
    let trigger = TriggerSmartContract {
        owner: args.from_address()?,
        contract: Some(args.to_address()?),
        call_value: args.parse_value()?,
        data: Bytes::from(args.data_bytes()?),
        token_value: args.token_value,
        token_id: args.token_id,
    };
    let payload = ContractPayload::TriggerSmartContract(trigger.clone());

    let mut transaction = view.create_transaction(payload).map_err(map_build_error)?;
    transaction.raw.fee_limit = fee_limit(view, args)?;
    // The real trigger run lets the backend populate reference fields and
    // validate the call against current state.
    let mut transaction = view
        .trigger_contract(&trigger, transaction)
        .map_err(map_build_error)?;
    apply_permission(&mut transaction, args);
    Ok(transaction)
}

fn build_transfer(
    view: &Arc<dyn LedgerView>,
    args: &BuildArguments,
) -> Result<Transaction, JsonRpcError> {
    let payload = ContractPayload::Transfer(TransferContract {
        owner: args.from_address()?,
        to: args.to_address()?,
        amount: args.parse_value()?,
    });
    build_generic(view, args, payload)
}

fn build_asset_transfer(
    view: &Arc<dyn LedgerView>,
    args: &BuildArguments,
) -> Result<Transaction, JsonRpcError> {
    if args.token_id == 0 {
        return Err(JsonRpcError::invalid_params(
            "invalid param value: invalid tokenId",
        ));
    }
    // The native asset name is the decimal token id rendered as bytes.
    let payload = ContractPayload::TransferAsset(TransferAssetContract {
        owner: args.from_address()?,
        to: args.to_address()?,
        asset_name: Bytes::from(args.token_id.to_string().into_bytes()),
        amount: args.token_value,
    });
    build_generic(view, args, payload)
}

fn build_generic(
    view: &Arc<dyn LedgerView>,
    args: &BuildArguments,
    payload: ContractPayload,
) -> Result<Transaction, JsonRpcError> {
    let mut transaction = view.create_transaction(payload).map_err(map_build_error)?;
    apply_permission(&mut transaction, args);
    apply_extra_data(&mut transaction, args);
    Ok(transaction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use volt_ledger::{LedgerBackend, MemoryLedger};
    use volt_primitives::Address;

    fn addr(tail: u8) -> Address {
        Address::from_eth_bytes([tail; 20])
    }

    fn args(to: Option<Address>, value: u64) -> BuildArguments {
        BuildArguments {
            from: Some(addr(0x01).to_eth_hex()),
            to: to.map(|a| a.to_eth_hex()),
            value: Some(format!("0x{:x}", value)),
            ..BuildArguments::default()
        }
    }

    fn head_view(ledger: &MemoryLedger) -> Arc<dyn LedgerView> {
        ledger.view()
    }

    // ==================== Builder tests ====================

    #[test]
    fn test_build_transfer_payload() {
        let ledger = MemoryLedger::new();
        let view = head_view(&ledger);
        let transaction = build_transfer(&view, &args(Some(addr(0x02)), 500)).unwrap();
        assert_eq!(
            transaction.raw.contract,
            ContractPayload::Transfer(TransferContract {
                owner: addr(0x01),
                to: addr(0x02),
                amount: 500,
            })
        );
        assert_eq!(transaction.raw.permission_id, 0);
        assert!(transaction.raw.memo.is_empty());
    }

    #[test]
    fn test_permission_applied_only_when_positive() {
        let ledger = MemoryLedger::new();
        let view = head_view(&ledger);

        let mut a = args(Some(addr(0x02)), 1);
        a.permission_id = 2;
        assert_eq!(build_transfer(&view, &a).unwrap().raw.permission_id, 2);

        a.permission_id = -1;
        assert_eq!(build_transfer(&view, &a).unwrap().raw.permission_id, 0);
    }

    #[test]
    fn test_extra_data_becomes_memo() {
        let ledger = MemoryLedger::new();
        let view = head_view(&ledger);
        let mut a = args(Some(addr(0x02)), 1);
        a.extra_data = Some("gift".into());
        let transaction = build_transfer(&view, &a).unwrap();
        assert_eq!(&transaction.raw.memo[..], b"gift");
    }

    #[test]
    fn test_asset_transfer_token_id_as_asset_name() {
        let ledger = MemoryLedger::new();
        let view = head_view(&ledger);
        let mut a = args(Some(addr(0x02)), 0);
        a.token_id = 1000123;
        a.token_value = 77;
        let transaction = build_asset_transfer(&view, &a).unwrap();
        match &transaction.raw.contract {
            ContractPayload::TransferAsset(c) => {
                assert_eq!(&c.asset_name[..], b"1000123");
                assert_eq!(c.amount, 77);
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_create_fee_limit_is_gas_times_price() {
        let ledger = MemoryLedger::new();
        ledger.set_energy_price(420);
        let view = head_view(&ledger);
        let mut a = args(None, 0);
        a.data = Some("0x6080".into());
        a.gas = Some("0x64".into());
        let transaction = build_create(&view, &a).unwrap();
        assert_eq!(transaction.raw.fee_limit, 100 * 420);
        assert!(transaction.raw.contract.is_creation());
    }

    #[test]
    fn test_create_parses_abi() {
        let ledger = MemoryLedger::new();
        let view = head_view(&ledger);
        let mut a = args(None, 0);
        a.data = Some("0x6080".into());
        a.abi = Some(r#"[{"type":"constructor","inputs":[]}]"#.into());
        let transaction = build_create(&view, &a).unwrap();
        match &transaction.raw.contract {
            ContractPayload::CreateSmartContract(c) => {
                assert!(c.new_contract.abi.is_some());
            }
            other => panic!("unexpected payload: {:?}", other),
        }

        a.abi = Some("not json".into());
        assert_eq!(build_create(&view, &a).unwrap_err().code, -32602);
    }

    #[test]
    fn test_validation_failure_maps_to_invalid_request() {
        let ledger = MemoryLedger::new();
        ledger.fail_create(LedgerError::Validation("no such account".into()));
        let view = head_view(&ledger);
        let err = build_transfer(&view, &args(Some(addr(0x02)), 1)).unwrap_err();
        assert_eq!(err.code, -32600);
        assert_eq!(err.message, "no such account");
    }

    #[test]
    fn test_other_failure_maps_to_internal() {
        let ledger = MemoryLedger::new();
        ledger.fail_create(LedgerError::HeaderNotFound);
        let view = head_view(&ledger);
        let err = build_transfer(&view, &args(Some(addr(0x02)), 1)).unwrap_err();
        assert_eq!(err.code, -32603);
        assert_eq!(err.message, "header not found");
    }
}
