//! Success notifications and lookup results
//!
//! Mutations return a [`Notice`] whose `Display` is the message shown to the
//! user. [`CustomerDetails`] renders the customer card with its loan, if any.

use loanbank_core::{Customer, Loan};
use rust_decimal::Decimal;
use std::fmt;

/// Outcome of a successful registry mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    CustomerAdded(String),
    CustomerUpdated(String),
    CustomerDeleted(String),
    LoanAdded(String),
    LoanUpdated(String),
    LoanDeleted(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CustomerAdded(id) => write!(f, "Customer {} added.", id),
            Notice::CustomerUpdated(id) => write!(f, "Customer {} updated.", id),
            Notice::CustomerDeleted(id) => write!(f, "Customer {} deleted.", id),
            Notice::LoanAdded(id) => write!(f, "Loan for Customer {} added.", id),
            Notice::LoanUpdated(id) => write!(f, "Loan for Customer {} updated.", id),
            Notice::LoanDeleted(id) => write!(f, "Loan for Customer {} deleted.", id),
        }
    }
}

/// Amount without trailing zeros but with at least one decimal place,
/// e.g. `12000.0`, `12000.5`
fn amount_text(value: Decimal) -> String {
    let value = value.normalize();
    if value.scale() == 0 {
        format!("{}.0", value)
    } else {
        value.to_string()
    }
}

/// A customer together with the loan registered under the same id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerDetails<'a> {
    pub customer: &'a Customer,
    pub loan: Option<&'a Loan>,
}

impl fmt::Display for CustomerDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer ID: {}", self.customer.customer_id)?;
        writeln!(f, "Name: {}", self.customer.name)?;
        write!(f, "Address: {}", self.customer.address)?;

        match self.loan {
            Some(loan) => {
                writeln!(f)?;
                writeln!(f, "Loan Amount: {}", amount_text(loan.loan_amount))?;
                writeln!(f, "Interest Rate: {:.2}%", loan.annual_rate_percent().round_dp(2))?;
                write!(f, "Loan Term: {} years", loan.term_years())
            }
            None => write!(f, "\nNo loan found for this customer."),
        }
    }
}
