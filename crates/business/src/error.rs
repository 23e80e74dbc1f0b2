//! Registry errors
//!
//! Every error here is a recoverable notification: the operation made no
//! change and the caller shows the message to the user.

use thiserror::Error;

/// Bank registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("Customer ID already exists.")]
    CustomerExists(String),

    #[error("Customer not found.")]
    CustomerNotFound(String),

    /// A loan was submitted for a customer the registry does not know
    #[error("Customer not found. Please add customer first.")]
    LoanCustomerMissing(String),

    #[error("Loan not found.")]
    LoanNotFound(String),
}

/// Result type alias for registry operations
pub type BankResult<T> = Result<T, BankError>;
