//! # Loanbank Core
//!
//! Core domain types: Customer, Loan và toán học trả góp.
//!
//! Không có I/O ở crate này; registry nằm ở `loanbank-business`.

pub mod customer;
pub mod loan;
pub mod schedule;
pub mod update;

pub use customer::{Customer, CustomerUpdate};
pub use loan::{Loan, LoanUpdate, MAX_SCHEDULE_MONTHS, MONTHS_PER_YEAR};
pub use schedule::{AmortizationSchedule, Installment};
pub use update::{Blank, BlankPolicy};
