/// Property-based tests using proptest
/// Registry invariants that should hold for any sequence of ids and values
use loanbank_business::Bank;
use loanbank_core::{BlankPolicy, Customer, CustomerUpdate, Loan, LoanUpdate};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn customer_id() -> impl Strategy<Value = String> {
    "C[0-9]{1,3}"
}

fn loan_for(id: &str, amount: u32, rate_bp: u32, years: i32) -> Loan {
    Loan::new(id, Decimal::from(amount), Decimal::new(rate_bp as i64, 2), years)
}

proptest! {
    #[test]
    fn loan_for_unknown_customer_leaves_loans_unchanged(
        known in prop::collection::vec(customer_id(), 0..8),
        stranger in "X[0-9]{1,3}",
        amount in 1u32..=100_000,
    ) {
        let mut bank = Bank::new();
        for id in &known {
            let _ = bank.add_customer(Customer::new(id.as_str(), "Name", "Addr"));
            let _ = bank.add_loan(loan_for(id, amount, 500, 1));
        }
        let before: Vec<Loan> = bank.display_loans().cloned().collect();

        prop_assert!(bank.add_loan(loan_for(&stranger, amount, 500, 1)).is_err());

        let after: Vec<Loan> = bank.display_loans().cloned().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn second_loan_overwrites_first(
        id in customer_id(),
        first in 1u32..=100_000,
        second in 1u32..=100_000,
    ) {
        let mut bank = Bank::new();
        bank.add_customer(Customer::new(id.as_str(), "Name", "Addr")).unwrap();
        bank.add_loan(loan_for(&id, first, 500, 1)).unwrap();
        let count = bank.loan_count();

        bank.add_loan(loan_for(&id, second, 700, 2)).unwrap();
        prop_assert_eq!(bank.loan_count(), count);
        prop_assert_eq!(bank.loan(&id).unwrap().loan_amount, Decimal::from(second));
    }

    #[test]
    fn empty_updates_leave_records_unchanged(
        id in customer_id(),
        name in "[A-Za-z ]{0,12}",
        amount in 1u32..=100_000,
        rate_bp in 0u32..=3_000,
        years in 0i32..=40,
        apply in any::<bool>(),
    ) {
        let policy = if apply { BlankPolicy::Apply } else { BlankPolicy::Skip };
        let mut bank = Bank::with_policy(policy);
        let customer = Customer::new(id.as_str(), name.as_str(), "Addr");
        let loan = loan_for(&id, amount, rate_bp, years);
        bank.add_customer(customer.clone()).unwrap();
        bank.add_loan(loan.clone()).unwrap();

        bank.update_customer(&id, CustomerUpdate::new()).unwrap();
        bank.update_loan(&id, LoanUpdate::new()).unwrap();

        prop_assert_eq!(bank.customer(&id), Some(&customer));
        prop_assert_eq!(bank.loan(&id), Some(&loan));
    }

    #[test]
    fn duplicate_customer_never_replaces(
        id in customer_id(),
        first in "[A-Za-z]{1,10}",
        second in "[A-Za-z]{1,10}",
    ) {
        let mut bank = Bank::new();
        bank.add_customer(Customer::new(id.as_str(), first.as_str(), "Addr")).unwrap();

        prop_assert!(bank.add_customer(Customer::new(id.as_str(), second.as_str(), "Other")).is_err());
        prop_assert_eq!(bank.customer_count(), 1);
        prop_assert_eq!(&bank.customer(&id).unwrap().name, &first);
    }
}
