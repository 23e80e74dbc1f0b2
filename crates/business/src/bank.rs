//! Bank registry - customers and their loans
//!
//! The registry owns every Customer and Loan for the lifetime of the process.
//! It is constructed explicitly and passed to whoever drives it; there is no
//! global instance.
//!
//! Referential rule: a loan can only be added for an existing customer.
//! Deleting a customer does not delete its loan.

use crate::error::{BankError, BankResult};
use crate::notice::{CustomerDetails, Notice};
use crate::records::Records;
use loanbank_core::{BlankPolicy, Customer, CustomerUpdate, Loan, LoanUpdate};
use tracing::{info, warn};

/// In-memory registry of customers and loans
#[derive(Debug, Clone, Default)]
pub struct Bank {
    customers: Records<Customer>,
    loans: Records<Loan>,
    policy: BlankPolicy,
}

impl Bank {
    /// Create an empty registry with the default blank-value policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with an explicit blank-value policy for updates
    pub fn with_policy(policy: BlankPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> BlankPolicy {
        self.policy
    }

    // === Customers ===

    /// Register a new customer. Rejects duplicate ids without touching the existing record.
    pub fn add_customer(&mut self, customer: Customer) -> BankResult<Notice> {
        let id = customer.customer_id.clone();
        if self.customers.contains(&id) {
            warn!(customer_id = %id, "customer already exists");
            return Err(BankError::CustomerExists(id));
        }

        self.customers.insert(&id, customer);
        info!(customer_id = %id, "customer added");
        Ok(Notice::CustomerAdded(id))
    }

    /// Overwrite the provided name/address fields of an existing customer
    pub fn update_customer(&mut self, customer_id: &str, update: CustomerUpdate) -> BankResult<Notice> {
        let policy = self.policy;
        let customer = self.customers.get_mut(customer_id).ok_or_else(|| {
            warn!(customer_id, "update for unknown customer");
            BankError::CustomerNotFound(customer_id.to_string())
        })?;

        customer.update(update, policy);
        info!(customer_id, "customer updated");
        Ok(Notice::CustomerUpdated(customer_id.to_string()))
    }

    /// Remove a customer. Its loan, if any, stays in the loan registry.
    pub fn delete_customer(&mut self, customer_id: &str) -> BankResult<Notice> {
        if self.customers.remove(customer_id).is_none() {
            warn!(customer_id, "delete for unknown customer");
            return Err(BankError::CustomerNotFound(customer_id.to_string()));
        }

        if self.loans.contains(customer_id) {
            info!(customer_id, "customer deleted, loan kept");
        } else {
            info!(customer_id, "customer deleted");
        }
        Ok(Notice::CustomerDeleted(customer_id.to_string()))
    }

    pub fn customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.get(customer_id)
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    // === Loans ===

    /// Register a loan for an existing customer, replacing any previous loan for that id
    pub fn add_loan(&mut self, loan: Loan) -> BankResult<Notice> {
        let id = loan.customer_id.clone();
        if !self.customers.contains(&id) {
            warn!(customer_id = %id, "loan for unknown customer");
            return Err(BankError::LoanCustomerMissing(id));
        }

        if self.loans.insert(&id, loan).is_some() {
            info!(customer_id = %id, "loan replaced");
        } else {
            info!(customer_id = %id, "loan added");
        }
        Ok(Notice::LoanAdded(id))
    }

    /// Overwrite the provided fields of an existing loan.
    ///
    /// Rate and term are raw annual percent / years and get normalized again.
    pub fn update_loan(&mut self, customer_id: &str, update: LoanUpdate) -> BankResult<Notice> {
        let policy = self.policy;
        let loan = self.loans.get_mut(customer_id).ok_or_else(|| {
            warn!(customer_id, "update for unknown loan");
            BankError::LoanNotFound(customer_id.to_string())
        })?;

        loan.update(update, policy);
        info!(customer_id, "loan updated");
        Ok(Notice::LoanUpdated(customer_id.to_string()))
    }

    pub fn delete_loan(&mut self, customer_id: &str) -> BankResult<Notice> {
        if self.loans.remove(customer_id).is_none() {
            warn!(customer_id, "delete for unknown loan");
            return Err(BankError::LoanNotFound(customer_id.to_string()));
        }

        info!(customer_id, "loan deleted");
        Ok(Notice::LoanDeleted(customer_id.to_string()))
    }

    pub fn loan(&self, customer_id: &str) -> Option<&Loan> {
        self.loans.get(customer_id)
    }

    /// Look up a loan for interest/payment calculations
    pub fn find_loan(&self, customer_id: &str) -> BankResult<&Loan> {
        self.loans
            .get(customer_id)
            .ok_or_else(|| BankError::LoanNotFound(customer_id.to_string()))
    }

    pub fn loan_count(&self) -> usize {
        self.loans.len()
    }

    // === Reporting ===

    /// Customer record plus its loan, if one is registered under the same id
    pub fn get_customer_details(&self, customer_id: &str) -> BankResult<CustomerDetails<'_>> {
        let customer = self
            .customers
            .get(customer_id)
            .ok_or_else(|| BankError::CustomerNotFound(customer_id.to_string()))?;

        Ok(CustomerDetails {
            customer,
            loan: self.loans.get(customer_id),
        })
    }

    /// All customers in insertion order
    pub fn display_customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.customers.values()
    }

    /// All loans in insertion order
    pub fn display_loans(&self) -> impl Iterator<Item = &Loan> + '_ {
        self.loans.values()
    }

    /// Loans whose customer has been deleted
    pub fn orphaned_loans(&self) -> impl Iterator<Item = &Loan> + '_ {
        self.loans
            .values()
            .filter(move |loan| !self.customers.contains(&loan.customer_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn bank_with_alice() -> Bank {
        let mut bank = Bank::new();
        bank.add_customer(Customer::new("C1", "Alice", "123 St")).unwrap();
        bank
    }

    #[test]
    fn test_add_customer() {
        let mut bank = Bank::new();
        let notice = bank.add_customer(Customer::new("C1", "Alice", "123 St")).unwrap();

        assert_eq!(notice, Notice::CustomerAdded("C1".to_string()));
        assert_eq!(bank.customer_count(), 1);
        assert_eq!(bank.customer("C1").map(|c| c.name.as_str()), Some("Alice"));
    }

    #[test]
    fn test_duplicate_customer_rejected() {
        let mut bank = bank_with_alice();
        let err = bank
            .add_customer(Customer::new("C1", "Mallory", "Nowhere"))
            .unwrap_err();

        assert_eq!(err, BankError::CustomerExists("C1".to_string()));
        assert_eq!(bank.customer_count(), 1);
        assert_eq!(bank.customer("C1").unwrap().name, "Alice");
    }

    #[test]
    fn test_update_customer() {
        let mut bank = bank_with_alice();
        bank.update_customer("C1", CustomerUpdate::new().with_address("456 Ave"))
            .unwrap();

        let customer = bank.customer("C1").unwrap();
        assert_eq!(customer.name, "Alice");
        assert_eq!(customer.address, "456 Ave");
    }

    #[test]
    fn test_update_unknown_customer() {
        let mut bank = Bank::new();
        let err = bank
            .update_customer("C9", CustomerUpdate::new().with_name("Ghost"))
            .unwrap_err();

        assert_eq!(err, BankError::CustomerNotFound("C9".to_string()));
        assert_eq!(bank.customer_count(), 0);
    }

    #[test]
    fn test_delete_customer() {
        let mut bank = bank_with_alice();
        assert!(bank.delete_customer("C1").is_ok());
        assert_eq!(bank.customer_count(), 0);

        let err = bank.delete_customer("C1").unwrap_err();
        assert_eq!(err.to_string(), "Customer not found.");
    }

    #[test]
    fn test_add_loan_requires_customer() {
        let mut bank = Bank::new();
        let err = bank
            .add_loan(Loan::new("C1", dec!(12000), dec!(12), 1))
            .unwrap_err();

        assert_eq!(err, BankError::LoanCustomerMissing("C1".to_string()));
        assert_eq!(bank.loan_count(), 0);
    }

    #[test]
    fn test_add_loan_overwrites() {
        let mut bank = bank_with_alice();
        bank.add_loan(Loan::new("C1", dec!(12000), dec!(12), 1)).unwrap();
        bank.add_loan(Loan::new("C1", dec!(5000), dec!(6), 2)).unwrap();

        assert_eq!(bank.loan_count(), 1);
        let loan = bank.loan("C1").unwrap();
        assert_eq!(loan.loan_amount, dec!(5000));
        assert_eq!(loan.loan_term, 24);
    }

    #[test]
    fn test_update_loan_skips_zero_term() {
        let mut bank = bank_with_alice();
        bank.add_loan(Loan::new("C1", dec!(12000), dec!(12), 1)).unwrap();

        let notice = bank
            .update_loan("C1", LoanUpdate::new().with_term(0))
            .unwrap();
        assert_eq!(notice.to_string(), "Loan for Customer C1 updated.");
        assert_eq!(bank.loan("C1").unwrap().loan_term, 12);
    }

    #[test]
    fn test_update_loan_applies_zero_with_policy() {
        let mut bank = Bank::with_policy(BlankPolicy::Apply);
        bank.add_customer(Customer::new("C1", "Alice", "123 St")).unwrap();
        bank.add_loan(Loan::new("C1", dec!(12000), dec!(12), 1)).unwrap();

        bank.update_loan("C1", LoanUpdate::new().with_rate(dec!(0)))
            .unwrap();
        assert_eq!(bank.loan("C1").unwrap().interest_rate, Decimal::ZERO);
    }

    #[test]
    fn test_update_unknown_loan() {
        let mut bank = bank_with_alice();
        let err = bank
            .update_loan("C1", LoanUpdate::new().with_amount(dec!(1)))
            .unwrap_err();
        assert_eq!(err, BankError::LoanNotFound("C1".to_string()));
    }

    #[test]
    fn test_delete_loan() {
        let mut bank = bank_with_alice();
        bank.add_loan(Loan::new("C1", dec!(12000), dec!(12), 1)).unwrap();

        assert_eq!(
            bank.delete_loan("C1").unwrap(),
            Notice::LoanDeleted("C1".to_string())
        );
        assert!(bank.delete_loan("C1").is_err());
        assert!(bank.find_loan("C1").is_err());
    }

    #[test]
    fn test_delete_customer_keeps_loan() {
        let mut bank = bank_with_alice();
        bank.add_loan(Loan::new("C1", dec!(12000), dec!(12), 1)).unwrap();
        bank.delete_customer("C1").unwrap();

        let err = bank.get_customer_details("C1").unwrap_err();
        assert_eq!(err, BankError::CustomerNotFound("C1".to_string()));
        assert!(bank.loan("C1").is_some());
        assert_eq!(bank.orphaned_loans().count(), 1);
    }

    #[test]
    fn test_customer_details() {
        let mut bank = bank_with_alice();
        let details = bank.get_customer_details("C1").unwrap();
        assert!(details.loan.is_none());

        bank.add_loan(Loan::new("C1", dec!(12000), dec!(12), 1)).unwrap();
        let details = bank.get_customer_details("C1").unwrap();
        assert_eq!(details.customer.customer_id, "C1");
        assert_eq!(details.loan.map(|l| l.loan_term), Some(12));
    }

    #[test]
    fn test_display_in_insertion_order() {
        let mut bank = Bank::new();
        for id in ["C3", "C1", "C2"] {
            bank.add_customer(Customer::new(id, "Name", "Addr")).unwrap();
        }
        bank.add_loan(Loan::new("C2", dec!(100), dec!(5), 1)).unwrap();
        bank.add_loan(Loan::new("C3", dec!(200), dec!(5), 1)).unwrap();

        let customers: Vec<_> = bank.display_customers().map(|c| c.customer_id.as_str()).collect();
        assert_eq!(customers, vec!["C3", "C1", "C2"]);

        let loans: Vec<_> = bank.display_loans().map(|l| l.customer_id.as_str()).collect();
        assert_eq!(loans, vec!["C2", "C3"]);
    }
}
