//! Contract payloads carried by native transactions.
//!
//! A transaction carries exactly one payload. The payload kind is what the
//! Ethereum-compatibility layer maps to transfer/invoke/create semantics.

use bytes::Bytes;
use volt_primitives::Address;

/// Contract ABI: the entries array (functions, events, constructor) kept as
/// generic JSON. The backend stores it opaquely.
#[derive(Clone, Debug, PartialEq)]
pub struct Abi {
    /// ABI entries
    pub entries: serde_json::Value,
}

/// Plain value transfer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferContract {
    /// Sending account
    pub owner: Address,
    /// Receiving account
    pub to: Address,
    /// Amount in the smallest native unit
    pub amount: u64,
}

/// Asset-token transfer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferAssetContract {
    /// Sending account
    pub owner: Address,
    /// Receiving account
    pub to: Address,
    /// Native asset name (a decimal token id rendered as bytes)
    pub asset_name: Bytes,
    /// Amount in asset units
    pub amount: u64,
}

/// Smart-contract invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerSmartContract {
    /// Calling account
    pub owner: Address,
    /// Target contract. Absent only on the estimation path for payloads
    /// that have no deployed target yet.
    pub contract: Option<Address>,
    /// Native value forwarded with the call
    pub call_value: u64,
    /// ABI-encoded call data
    pub data: Bytes,
    /// Asset amount forwarded with the call
    pub token_value: u64,
    /// Asset id forwarded with the call
    pub token_id: u64,
}

/// Smart-contract metadata carried by a creation payload
#[derive(Clone, Debug, PartialEq)]
pub struct SmartContract {
    /// Creator account
    pub origin: Address,
    /// Assigned contract address, set by the backend after construction
    pub contract_address: Option<Address>,
    /// Optional ABI
    pub abi: Option<Abi>,
    /// Deployment bytecode
    pub bytecode: Bytes,
    /// Native value endowed at creation
    pub call_value: u64,
    /// Share of execution energy charged to callers, 0..=100
    pub consume_user_resource_percent: u64,
    /// Optional human-readable name
    pub name: Option<String>,
    /// Energy ceiling funded by the creator per invocation
    pub origin_energy_limit: u64,
}

/// Smart-contract creation
#[derive(Clone, Debug, PartialEq)]
pub struct CreateSmartContract {
    /// Creating account
    pub owner: Address,
    /// Contract to deploy
    pub new_contract: SmartContract,
    /// Asset amount endowed at creation
    pub token_value: u64,
    /// Asset id endowed at creation
    pub token_id: u64,
}

/// The single contract payload of a native transaction.
#[derive(Clone, Debug, PartialEq)]
pub enum ContractPayload {
    /// Plain value transfer
    Transfer(TransferContract),
    /// Asset-token transfer
    TransferAsset(TransferAssetContract),
    /// Smart-contract invocation
    TriggerSmartContract(TriggerSmartContract),
    /// Smart-contract creation
    CreateSmartContract(CreateSmartContract),
}

impl ContractPayload {
    /// Sending account of the payload
    pub fn owner(&self) -> Address {
        match self {
            ContractPayload::Transfer(c) => c.owner,
            ContractPayload::TransferAsset(c) => c.owner,
            ContractPayload::TriggerSmartContract(c) => c.owner,
            ContractPayload::CreateSmartContract(c) => c.owner,
        }
    }

    /// Wire name of the payload type
    pub fn type_name(&self) -> &'static str {
        match self {
            ContractPayload::Transfer(_) => "TransferContract",
            ContractPayload::TransferAsset(_) => "TransferAssetContract",
            ContractPayload::TriggerSmartContract(_) => "TriggerSmartContract",
            ContractPayload::CreateSmartContract(_) => "CreateSmartContract",
        }
    }

    /// Whether this payload deploys a contract
    pub fn is_creation(&self) -> bool {
        matches!(self, ContractPayload::CreateSmartContract(_))
    }
}

/// Deployed contract metadata plus its runtime code
#[derive(Clone, Debug, PartialEq)]
pub struct ContractInfo {
    /// Stored metadata
    pub contract: SmartContract,
    /// Runtime (post-constructor) bytecode
    pub runtime_code: Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tail: u8) -> Address {
        Address::from_eth_bytes([tail; 20])
    }

    #[test]
    fn test_payload_owner() {
        let payload = ContractPayload::Transfer(TransferContract {
            owner: addr(0x01),
            to: addr(0x02),
            amount: 10,
        });
        assert_eq!(payload.owner(), addr(0x01));
    }

    #[test]
    fn test_payload_type_names() {
        let transfer = ContractPayload::Transfer(TransferContract {
            owner: addr(1),
            to: addr(2),
            amount: 1,
        });
        let trigger = ContractPayload::TriggerSmartContract(TriggerSmartContract {
            owner: addr(1),
            contract: Some(addr(3)),
            call_value: 0,
            data: Bytes::new(),
            token_value: 0,
            token_id: 0,
        });
        assert_eq!(transfer.type_name(), "TransferContract");
        assert_eq!(trigger.type_name(), "TriggerSmartContract");
    }

    #[test]
    fn test_is_creation() {
        let create = ContractPayload::CreateSmartContract(CreateSmartContract {
            owner: addr(1),
            new_contract: SmartContract {
                origin: addr(1),
                contract_address: None,
                abi: None,
                bytecode: Bytes::from_static(&[0x60, 0x80]),
                call_value: 0,
                consume_user_resource_percent: 100,
                name: None,
                origin_energy_limit: 10_000,
            },
            token_value: 0,
            token_id: 0,
        });
        assert!(create.is_creation());
        let transfer = ContractPayload::Transfer(TransferContract {
            owner: addr(1),
            to: addr(2),
            amount: 1,
        });
        assert!(!transfer.is_creation());
    }
}
