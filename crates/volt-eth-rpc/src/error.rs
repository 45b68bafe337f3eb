//! Protocol error types.
//!
//! The taxonomy is fixed: parameter errors for malformed input (caught
//! before any backend call), invalid-request errors for backend rule
//! rejections, internal errors for everything unexpected, and
//! method-not-found for the intentionally unsupported surface. "No such
//! entity" is never an error here; lookups return a null result instead.

use serde::Serialize;
use serde_json::Value;

use volt_ledger::LedgerError;

/// Standard JSON-RPC 2.0 error codes
pub mod error_code {
    /// Invalid Request: the JSON is not a valid Request object, or the
    /// backend rejected the request on a business rule
    pub const INVALID_REQUEST: i64 = -32600;
    /// Method not found
    pub const METHOD_NOT_FOUND: i64 = -32601;
    /// Invalid params
    pub const INVALID_PARAMS: i64 = -32602;
    /// Internal error
    pub const INTERNAL_ERROR: i64 = -32603;
}

/// JSON-RPC error response
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonRpcError {
    /// Error code
    pub code: i64,
    /// Error message
    pub message: String,
    /// Optional additional data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Create a new JSON-RPC error
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create error with additional data
    pub fn with_data(code: i64, message: impl Into<String>, data: Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Invalid request: well-formed but rejected by backend validation
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(error_code::INVALID_REQUEST, message)
    }

    /// Method not found, with a caller-supplied message
    pub fn method_not_found(message: impl Into<String>) -> Self {
        Self::new(error_code::METHOD_NOT_FOUND, message)
    }

    /// Method not found for a method in the fixed unsupported set
    pub fn unsupported_method(method: &str) -> Self {
        Self::method_not_found(format!(
            "the method {} does not exist/is not available",
            method
        ))
    }

    /// Invalid params: malformed or out-of-range input
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(error_code::INVALID_PARAMS, message)
    }

    /// Internal error. Embedded double quotes are replaced so the message
    /// stays embeddable in a JSON error payload.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(error_code::INTERNAL_ERROR, message.into().replace('"', "'"))
    }
}

/// Default protocol mapping for backend failures.
///
/// Validation, execution, and VM failures carry the backend message as an
/// invalid-request error ("invalid contract" when the backend gives none);
/// missing header/state are internal errors. Paths with a different
/// contract (the call-simulation absorb, the build dispatch) match on the
/// variant themselves instead of going through this impl.
impl From<LedgerError> for JsonRpcError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::Validation(msg)
            | LedgerError::Execution(msg)
            | LedgerError::VmIllegal(msg) => {
                if msg.is_empty() {
                    JsonRpcError::invalid_request("invalid contract")
                } else {
                    JsonRpcError::invalid_request(msg)
                }
            }
            other => JsonRpcError::internal_error(other.to_string()),
        }
    }
}
