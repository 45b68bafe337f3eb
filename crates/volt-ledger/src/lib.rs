//! # volt-ledger
//!
//! Ledger backend abstraction for Volt.
//!
//! This crate provides:
//! - [`LedgerBackend`] - node-level handle (role, peers, witness state)
//! - [`LedgerView`] - one consistent snapshot of chain state per operation
//! - [`MemoryLedger`] - in-memory backend used in tests
//!
//! Consumers obtain a [`LedgerView`] once at the start of an operation and
//! perform every read of that operation against it, so multi-step
//! derivations stay consistent even while the node keeps importing blocks.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use error::{LedgerError, LedgerResult};
pub use memory::MemoryLedger;
pub use traits::{ConstantExecution, Cursor, LedgerBackend, LedgerView, TransactionCapsule};
