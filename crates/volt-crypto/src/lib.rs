//! # volt-crypto
//!
//! Hashing primitives for the Volt chain.
//!
//! - SHA-256 (native transaction and block ids)
//! - Keccak-256 (Ethereum-compatibility surface, `web3_sha3`)

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::{keccak256, sha256};
