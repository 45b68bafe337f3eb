//! Ledger backend errors.

use thiserror::Error;

/// The fixed set of failures a ledger backend may raise.
///
/// Callers match on the variant to pick a protocol-level error class; the
/// set is closed so no backend-specific failure leaks through unmapped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Business-rule validation rejected the request
    #[error("{0}")]
    Validation(String),
    /// Contract execution failed
    #[error("{0}")]
    Execution(String),
    /// The VM hit an illegal operation
    #[error("{0}")]
    VmIllegal(String),
    /// A required block header was not found
    #[error("header not found")]
    HeaderNotFound,
    /// A required state entry was not found
    #[error("state not found: {0}")]
    StateNotFound(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        assert_eq!(
            LedgerError::Validation("balance too low".into()).to_string(),
            "balance too low"
        );
        assert_eq!(LedgerError::Execution(String::new()).to_string(), "");
        assert_eq!(LedgerError::HeaderNotFound.to_string(), "header not found");
    }
}
