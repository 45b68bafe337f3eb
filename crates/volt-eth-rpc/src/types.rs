//! Request/response envelope and parameter helpers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use volt_primitives::{hex, Address, H256};

use crate::error::JsonRpcError;

/// JSON-RPC request ID (number, string, or null)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum JsonRpcId {
    /// Numeric ID
    Number(u64),
    /// String ID
    String(String),
    /// Null ID
    Null,
}

impl Default for JsonRpcId {
    fn default() -> Self {
        Self::Null
    }
}

/// JSON-RPC 2.0 request, already decoded from the transport
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,
    /// Request ID
    #[serde(default)]
    pub id: JsonRpcId,
    /// Method name
    pub method: String,
    /// Positional parameters
    #[serde(default)]
    pub params: Vec<Value>,
}

/// JSON-RPC 2.0 response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version
    pub jsonrpc: String,
    /// Request ID
    pub id: JsonRpcId,
    /// Result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error (on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Create success response
    pub fn success(id: JsonRpcId, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create error response
    pub fn error(id: JsonRpcId, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// Get a required positional parameter.
pub fn param<'a>(
    params: &'a [Value],
    index: usize,
    name: &str,
) -> Result<&'a Value, JsonRpcError> {
    params
        .get(index)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("missing {} parameter", name)))
}

/// Parse an account address from a JSON value, either encoding.
pub fn parse_address(value: &Value) -> Result<Address, JsonRpcError> {
    let s = value
        .as_str()
        .ok_or_else(|| JsonRpcError::invalid_params("address must be a string"))?;
    Address::from_hex(s).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
}

/// Parse a 32-byte hash from a JSON value.
pub fn parse_hash(value: &Value) -> Result<H256, JsonRpcError> {
    let s = value
        .as_str()
        .ok_or_else(|| JsonRpcError::invalid_params("invalid hash value"))?;
    hex::decode_hash(s).map_err(|_| JsonRpcError::invalid_params("invalid hash value"))
}

/// Read the `fullTransactionObjects` flag, defaulting to hashes-only.
pub fn parse_full_flag(params: &[Value], index: usize) -> bool {
    params.get(index).and_then(Value::as_bool).unwrap_or(false)
}

/// Enforce the tag-only block policy: only the literal `latest` proceeds.
///
/// `earliest`/`pending` and explicit heights are deliberate scope
/// rejections of the protocol, not parse failures, and each carries its
/// own message.
pub fn require_latest(value: &Value) -> Result<(), JsonRpcError> {
    let tag = value
        .as_str()
        .ok_or_else(|| JsonRpcError::invalid_params("invalid block number"))?;
    if tag.eq_ignore_ascii_case("earliest") || tag.eq_ignore_ascii_case("pending") {
        return Err(JsonRpcError::invalid_params(
            "TAG [earliest | pending] not supported",
        ));
    }
    if tag.eq_ignore_ascii_case("latest") {
        return Ok(());
    }
    let digits = tag.strip_prefix("0x").unwrap_or(tag);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Err(JsonRpcError::invalid_params(
            "QUANTITY not supported, just support TAG as latest",
        ))
    } else {
        Err(JsonRpcError::invalid_params("invalid block number"))
    }
}

/// Like [`require_latest`], for an optional trailing tag parameter.
pub fn require_latest_at(params: &[Value], index: usize) -> Result<(), JsonRpcError> {
    match params.get(index) {
        Some(value) => require_latest(value),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> Value {
        Value::String(s.to_string())
    }

    // ==================== Envelope tests ====================

    #[test]
    fn test_request_deserialize() {
        let json = r#"{"jsonrpc":"2.0","id":1,"method":"eth_blockNumber","params":[]}"#;
        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.jsonrpc, "2.0");
        assert_eq!(req.id, JsonRpcId::Number(1));
        assert_eq!(req.method, "eth_blockNumber");
        assert!(req.params.is_empty());
    }

    #[test]
    fn test_request_defaults() {
        let json = r#"{"jsonrpc":"2.0","method":"eth_syncing"}"#;
        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.id, JsonRpcId::Null);
        assert!(req.params.is_empty());
    }

    #[test]
    fn test_response_success_serialize() {
        let resp = JsonRpcResponse::success(JsonRpcId::Number(1), Value::String("0x10".into()));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"result\":\"0x10\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_response_error_serialize() {
        let resp = JsonRpcResponse::error(
            JsonRpcId::String("a".into()),
            JsonRpcError::invalid_params("bad"),
        );
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"error\""));
        assert!(json.contains("\"code\":-32602"));
        assert!(!json.contains("\"result\""));
    }

    // ==================== Parameter helper tests ====================

    #[test]
    fn test_param_missing() {
        let err = param(&[], 0, "address").unwrap_err();
        assert_eq!(err.message, "missing address parameter");
    }

    #[test]
    fn test_parse_address_both_encodings() {
        let eth = parse_address(&tag("0x1111111111111111111111111111111111111111")).unwrap();
        let native =
            parse_address(&tag("0x561111111111111111111111111111111111111111")).unwrap();
        assert_eq!(eth, native);
    }

    #[test]
    fn test_parse_address_rejects_non_string() {
        assert!(parse_address(&Value::Number(7.into())).is_err());
    }

    #[test]
    fn test_parse_hash_message() {
        let err = parse_hash(&tag("0x1234")).unwrap_err();
        assert_eq!(err.message, "invalid hash value");
        let err = parse_hash(&Value::Null).unwrap_err();
        assert_eq!(err.message, "invalid hash value");
    }

    #[test]
    fn test_parse_hash_accepts_unprefixed() {
        assert!(parse_hash(&tag(&"ab".repeat(32))).is_ok());
    }

    // ==================== Block tag tests ====================

    #[test]
    fn test_latest_accepted_case_insensitive() {
        assert!(require_latest(&tag("latest")).is_ok());
        assert!(require_latest(&tag("LATEST")).is_ok());
        assert!(require_latest(&tag("Latest")).is_ok());
    }

    #[test]
    fn test_earliest_and_pending_rejected() {
        for t in ["earliest", "pending", "EARLIEST", "Pending"] {
            let err = require_latest(&tag(t)).unwrap_err();
            assert_eq!(err.message, "TAG [earliest | pending] not supported");
        }
    }

    #[test]
    fn test_explicit_quantity_rejected() {
        for t in ["0x0", "0x10", "0", "12ab"] {
            let err = require_latest(&tag(t)).unwrap_err();
            assert_eq!(
                err.message,
                "QUANTITY not supported, just support TAG as latest",
                "tag {}",
                t
            );
        }
    }

    #[test]
    fn test_garbage_tag_rejected() {
        for t in ["", "0x", "newest", "latest1"] {
            let err = require_latest(&tag(t)).unwrap_err();
            assert_eq!(err.message, "invalid block number", "tag {:?}", t);
        }
    }

    #[test]
    fn test_require_latest_at_absent_defaults_to_latest() {
        assert!(require_latest_at(&[], 1).is_ok());
        assert!(require_latest_at(&[Value::Null, tag("pending")], 1).is_err());
    }
}
