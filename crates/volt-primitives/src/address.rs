//! Account addresses.
//!
//! Volt addresses are 21 bytes: a fixed `0x56` prefix byte followed by a
//! 20-byte account hash. The Ethereum wire form used by the compatibility
//! layer is the 20-byte tail; both encodings are accepted on input.

use std::fmt;
use thiserror::Error;

/// Address parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Invalid hex string
    #[error("invalid address hex: {0}")]
    InvalidHex(String),
    /// Neither the native nor the Ethereum byte length
    #[error("invalid address length: {0} bytes")]
    InvalidLength(usize),
    /// Native-length input with the wrong prefix byte
    #[error("invalid address prefix: 0x{0:02x}")]
    InvalidPrefix(u8),
}

/// 21-byte native account address
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 21]);

impl Address {
    /// Size in bytes of the native form
    pub const LEN: usize = 21;

    /// Size in bytes of the Ethereum wire form
    pub const ETH_LEN: usize = 20;

    /// Network prefix byte carried by every native address
    pub const PREFIX: u8 = 0x56;

    /// Create from native bytes. The prefix byte is taken as-is.
    pub const fn from_bytes(bytes: [u8; 21]) -> Self {
        Address(bytes)
    }

    /// Create from the 20-byte Ethereum form by applying the network prefix.
    pub fn from_eth_bytes(bytes: [u8; 20]) -> Self {
        let mut native = [0u8; 21];
        native[0] = Self::PREFIX;
        native[1..].copy_from_slice(&bytes);
        Address(native)
    }

    /// Create from a byte slice in either encoding.
    ///
    /// A 21-byte slice must carry the network prefix; a 20-byte slice is
    /// taken as the Ethereum form and prefixed.
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        match slice.len() {
            Self::LEN => {
                if slice[0] != Self::PREFIX {
                    return Err(AddressError::InvalidPrefix(slice[0]));
                }
                let mut bytes = [0u8; 21];
                bytes.copy_from_slice(slice);
                Ok(Address(bytes))
            }
            Self::ETH_LEN => {
                let mut bytes = [0u8; 20];
                bytes.copy_from_slice(slice);
                Ok(Self::from_eth_bytes(bytes))
            }
            n => Err(AddressError::InvalidLength(n)),
        }
    }

    /// Parse from a hex string, `0x` prefix optional, either encoding.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes =
            hex::decode(digits).map_err(|_| AddressError::InvalidHex(s.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Get the native 21-byte form
    pub fn as_bytes(&self) -> &[u8; 21] {
        &self.0
    }

    /// Get the 20-byte Ethereum form (prefix stripped)
    pub fn eth_bytes(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Hex-encode the native form
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Hex-encode the Ethereum form
    pub fn to_eth_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0[1..]))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
