//! # volt-primitives
//!
//! Primitive types for the Volt chain: account addresses, hashes, and the
//! JSON-hex codec used by the Ethereum-compatibility RPC layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod hash;
pub mod hex;

pub use address::{Address, AddressError};
pub use hash::{Hash, HashError, H256};

/// Block height type
pub type BlockHeight = u64;

/// Energy amount type (the native gas analogue)
pub type Energy = u64;
