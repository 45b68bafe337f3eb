//! JSON-hex codec for the Ethereum wire encoding.
//!
//! Quantities are `0x`-prefixed, lowercase, minimal-length (`0x0` for zero,
//! no leading zero digits otherwise). Byte strings keep their length, so
//! `0x00` and `0x0000` stay distinct. Hashes must be exactly 64 hex digits
//! with an optional `0x` prefix.

use crate::hash::H256;
use std::num::IntErrorKind;
use thiserror::Error;

/// Hex codec error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    /// Quantity without the mandatory `0x` prefix
    #[error("hex quantity must start with 0x")]
    MissingPrefix,
    /// Nothing after the prefix
    #[error("hex string is empty")]
    Empty,
    /// A character outside `[0-9a-fA-F]`
    #[error("invalid hex digit")]
    InvalidDigit,
    /// Non-canonical quantity such as `0x01`
    #[error("hex quantity has leading zero digits")]
    LeadingZero,
    /// Quantity does not fit in 64 bits
    #[error("hex quantity out of range")]
    Overflow,
    /// Wrong digit count for a fixed-size value
    #[error("invalid hex length: {0} digits")]
    InvalidLength(usize),
}

/// Decode a canonical hex quantity (`0x0`, `0x2a`, ...) into an integer.
pub fn decode_quantity(s: &str) -> Result<u64, HexError> {
    let digits = s.strip_prefix("0x").ok_or(HexError::MissingPrefix)?;
    if digits.is_empty() {
        return Err(HexError::Empty);
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(HexError::LeadingZero);
    }
    u64::from_str_radix(digits, 16).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => HexError::Overflow,
        _ => HexError::InvalidDigit,
    })
}

/// Encode an integer as a canonical hex quantity.
pub fn encode_quantity(n: u64) -> String {
    format!("0x{:x}", n)
}

/// Decode a 32-byte hash. Accepts exactly 64 hex digits, `0x` optional.
pub fn decode_hash(s: &str) -> Result<H256, HexError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if digits.len() != 2 * H256::LEN {
        return Err(HexError::InvalidLength(digits.len()));
    }
    let bytes = hex::decode(digits).map_err(|_| HexError::InvalidDigit)?;
    H256::from_slice(&bytes).map_err(|_| HexError::InvalidLength(digits.len()))
}

/// Decode a hex byte string. `0x` is optional, the empty string decodes to
/// an empty vector, and an odd digit count is left-padded with one zero.
pub fn decode_bytes(s: &str) -> Result<Vec<u8>, HexError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if digits.is_empty() {
        return Ok(Vec::new());
    }
    let padded;
    let digits = if digits.len() % 2 == 1 {
        padded = format!("0{}", digits);
        padded.as_str()
    } else {
        digits
    };
    hex::decode(digits).map_err(|_| HexError::InvalidDigit)
}

/// Encode bytes as `0x`-prefixed lowercase hex, preserving length.
pub fn encode_bytes(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Decode a storage-slot index: at most 32 bytes, left-padded to a full word.
pub fn decode_storage_index(s: &str) -> Result<H256, HexError> {
    let bytes = decode_bytes(s)?;
    if bytes.len() > H256::LEN {
        return Err(HexError::InvalidLength(bytes.len() * 2));
    }
    let mut word = [0u8; 32];
    word[H256::LEN - bytes.len()..].copy_from_slice(&bytes);
    Ok(H256::from_bytes(word))
}
