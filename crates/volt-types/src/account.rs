//! Accounts.

use volt_primitives::Address;

/// Ledger-side view of an account.
#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    /// Account address
    pub address: Address,
    /// Native balance, smallest unit
    pub balance: u64,
}
