//! # Loanbank Business
//!
//! Business logic layer - the Bank registry of customers and loans.

pub mod bank;
pub mod error;
pub mod notice;
mod records;

pub use bank::Bank;
pub use error::{BankError, BankResult};
pub use notice::{CustomerDetails, Notice};
