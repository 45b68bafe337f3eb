//! Typed request payloads for calls and transaction building.
//!
//! The contract kind is derived once, at the boundary, from which optional
//! fields are populated; every dispatch afterwards matches exhaustively on
//! the derived kind instead of re-inspecting the fields.

use serde::Deserialize;

use volt_primitives::{hex, Address};

use crate::error::JsonRpcError;

/// Contract kind derived from a request's populated fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractKind {
    /// Plain value transfer
    Transfer,
    /// Smart-contract invocation
    Invoke,
    /// Smart-contract creation
    Create,
    /// Asset-token transfer
    AssetTransfer,
    /// Not derivable from the populated fields
    Unknown,
}

/// Arguments of `eth_call` and `eth_estimateGas`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CallArguments {
    /// Caller account
    pub from: Option<String>,
    /// Transfer target or invoked contract
    pub to: Option<String>,
    /// Declared gas amount
    pub gas: Option<String>,
    /// Ignored; the network rate applies
    pub gas_price: Option<String>,
    /// Native value moved by the call
    pub value: Option<String>,
    /// ABI-encoded call data
    #[serde(alias = "input")]
    pub data: Option<String>,
}

impl CallArguments {
    /// Caller address. Absent or malformed input is a parameter error.
    pub fn from_address(&self) -> Result<Address, JsonRpcError> {
        parse_address_field(self.from.as_deref())
    }

    /// Target address. Absent or malformed input is a parameter error.
    pub fn to_address(&self) -> Result<Address, JsonRpcError> {
        parse_address_field(self.to.as_deref())
    }

    /// Native value, zero when absent.
    pub fn parse_value(&self) -> Result<u64, JsonRpcError> {
        parse_quantity_field(self.value.as_deref())
    }

    /// Declared gas amount, zero when absent.
    pub fn parse_gas(&self) -> Result<u64, JsonRpcError> {
        parse_quantity_field(self.gas.as_deref())
    }

    /// Call data bytes, empty when absent.
    pub fn data_bytes(&self) -> Result<Vec<u8>, JsonRpcError> {
        parse_bytes_field(self.data.as_deref())
    }

    /// Derive the contract kind: transfer when `to` is set without data,
    /// invocation when both are set, otherwise unresolved.
    pub fn kind(&self) -> ContractKind {
        match (self.to.is_some(), has_data(self.data.as_deref())) {
            (true, false) => ContractKind::Transfer,
            (true, true) => ContractKind::Invoke,
            _ => ContractKind::Unknown,
        }
    }
}

/// Arguments of the `buildTransaction` extension.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildArguments {
    /// Owner account
    pub from: Option<String>,
    /// Transfer target or invoked contract
    pub to: Option<String>,
    /// Declared gas amount; fee limit = gas x energy price
    pub gas: Option<String>,
    /// Ignored; the network rate applies
    pub gas_price: Option<String>,
    /// Native value
    pub value: Option<String>,
    /// Call data or deployment bytecode
    #[serde(alias = "input")]
    pub data: Option<String>,
    /// Asset id for asset transfers
    pub token_id: u64,
    /// Asset amount for asset transfers
    pub token_value: u64,
    /// Active-permission selector, applied when positive
    pub permission_id: i32,
    /// Memo attached to the raw transaction
    pub extra_data: Option<String>,
    /// Creation: share of execution energy charged to callers
    pub consume_user_resource_percent: u64,
    /// Creation: energy ceiling funded by the creator
    pub origin_energy_limit: u64,
    /// Creation: ABI entries as a JSON array string
    pub abi: Option<String>,
    /// Creation: human-readable contract name
    pub name: Option<String>,
    /// Render text-bearing byte fields as UTF-8 in the result
    pub visible: bool,
}

impl BuildArguments {
    /// Owner address. Absent or malformed input is a parameter error.
    pub fn from_address(&self) -> Result<Address, JsonRpcError> {
        parse_address_field(self.from.as_deref())
    }

    /// Target address. Absent or malformed input is a parameter error.
    pub fn to_address(&self) -> Result<Address, JsonRpcError> {
        parse_address_field(self.to.as_deref())
    }

    /// Native value, zero when absent.
    pub fn parse_value(&self) -> Result<u64, JsonRpcError> {
        parse_quantity_field(self.value.as_deref())
    }

    /// Declared gas amount, zero when absent.
    pub fn parse_gas(&self) -> Result<u64, JsonRpcError> {
        parse_quantity_field(self.gas.as_deref())
    }

    /// Payload bytes, empty when absent.
    pub fn data_bytes(&self) -> Result<Vec<u8>, JsonRpcError> {
        parse_bytes_field(self.data.as_deref())
    }

    /// Derive the contract kind for the build context. A missing `to`
    /// with bytecode present means contract creation; a populated token
    /// id/amount pair without data means an asset transfer.
    pub fn kind(&self) -> ContractKind {
        let data = has_data(self.data.as_deref());
        match (self.to.is_some(), data) {
            (false, true) => ContractKind::Create,
            (true, true) => ContractKind::Invoke,
            (true, false) => {
                if self.token_id != 0 && self.token_value != 0 {
                    ContractKind::AssetTransfer
                } else {
                    ContractKind::Transfer
                }
            }
            (false, false) => ContractKind::Unknown,
        }
    }
}

fn has_data(data: Option<&str>) -> bool {
    matches!(data, Some(d) if !d.is_empty() && d != "0x")
}

fn parse_address_field(field: Option<&str>) -> Result<Address, JsonRpcError> {
    let s = field.ok_or_else(|| JsonRpcError::invalid_params("invalid address hash value"))?;
    Address::from_hex(s).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
}

fn parse_quantity_field(field: Option<&str>) -> Result<u64, JsonRpcError> {
    match field {
        None => Ok(0),
        Some(s) if s.is_empty() => Ok(0),
        Some(s) => hex::decode_quantity(s).map_err(|e| JsonRpcError::invalid_params(e.to_string())),
    }
}

fn parse_bytes_field(field: Option<&str>) -> Result<Vec<u8>, JsonRpcError> {
    match field {
        None => Ok(Vec::new()),
        Some(s) => hex::decode_bytes(s).map_err(|e| JsonRpcError::invalid_params(e.to_string())),
    }
}
