//! Customer, loan and amortization schedule reports

use chrono::{DateTime, Utc};
use loanbank_business::Bank;
use loanbank_core::{AmortizationSchedule, Customer, Loan};
use rust_decimal::Decimal;

use crate::exporters::ReportData;

/// Two-decimal rendering used by every money column
fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

// ============================================================================
// Customer Report
// ============================================================================

/// All customers, in registration order
#[derive(Debug, Clone)]
pub struct CustomerReport {
    pub title: String,
    pub customers: Vec<Customer>,
    pub generated_at: DateTime<Utc>,
}

impl CustomerReport {
    pub fn from_bank(bank: &Bank) -> Self {
        Self {
            title: "Customers".to_string(),
            customers: bank.display_customers().cloned().collect(),
            generated_at: Utc::now(),
        }
    }
}

impl ReportData for CustomerReport {
    fn title(&self) -> &str {
        &self.title
    }

    fn headers(&self) -> Vec<String> {
        vec![
            "Customer ID".to_string(),
            "Name".to_string(),
            "Address".to_string(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.customers
            .iter()
            .map(|c| vec![c.customer_id.clone(), c.name.clone(), c.address.clone()])
            .collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        vec![
            ("Total Customers".to_string(), self.customers.len().to_string()),
            ("Generated At".to_string(), self.generated_at.to_rfc3339()),
        ]
    }

    fn column_widths(&self) -> Vec<usize> {
        vec![15, 20, 20]
    }

    fn table_heading(&self) -> Option<(String, usize)> {
        Some(("Customer ID   Name                Address".to_string(), 47))
    }
}

// ============================================================================
// Loan Report
// ============================================================================

/// All loans, in registration order
#[derive(Debug, Clone)]
pub struct LoanReport {
    pub title: String,
    pub loans: Vec<Loan>,
    /// Loans whose customer record no longer exists
    pub orphaned: usize,
    pub generated_at: DateTime<Utc>,
}

impl LoanReport {
    pub fn from_bank(bank: &Bank) -> Self {
        Self {
            title: "Loans".to_string(),
            loans: bank.display_loans().cloned().collect(),
            orphaned: bank.orphaned_loans().count(),
            generated_at: Utc::now(),
        }
    }

    pub fn total_principal(&self) -> Decimal {
        self.loans.iter().map(|l| l.loan_amount).sum()
    }
}

impl ReportData for LoanReport {
    fn title(&self) -> &str {
        &self.title
    }

    fn headers(&self) -> Vec<String> {
        vec![
            "Customer ID".to_string(),
            "Loan Amount".to_string(),
            "Interest Rate (%)".to_string(),
            "Loan Term (Years)".to_string(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.loans
            .iter()
            .map(|l| {
                vec![
                    l.customer_id.clone(),
                    money(l.loan_amount),
                    money(l.annual_rate_percent()),
                    l.term_years().to_string(),
                ]
            })
            .collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        vec![
            ("Total Loans".to_string(), self.loans.len().to_string()),
            ("Total Principal".to_string(), money(self.total_principal())),
            ("Loans Without Customer".to_string(), self.orphaned.to_string()),
            ("Generated At".to_string(), self.generated_at.to_rfc3339()),
        ]
    }

    fn column_widths(&self) -> Vec<usize> {
        vec![15, 15, 20, 20]
    }

    fn table_heading(&self) -> Option<(String, usize)> {
        Some((
            "Customer ID   Loan Amount    Interest Rate (%)    Loan Term (Years)".to_string(),
            61,
        ))
    }

    fn numeric_columns(&self) -> Vec<usize> {
        vec![1, 2, 3]
    }
}

// ============================================================================
// Schedule Report
// ============================================================================

/// Month-by-month amortization schedule of one loan
#[derive(Debug, Clone)]
pub struct ScheduleReport {
    pub title: String,
    pub loan: Loan,
    pub schedule: AmortizationSchedule,
}

impl ScheduleReport {
    /// `None` when the term is longer than
    /// [`MAX_SCHEDULE_MONTHS`](loanbank_core::MAX_SCHEDULE_MONTHS)
    pub fn from_loan(loan: &Loan) -> Option<Self> {
        let schedule = loan.amortization_schedule()?;
        Some(Self {
            title: format!("Amortization Schedule - Customer {}", loan.customer_id),
            loan: loan.clone(),
            schedule,
        })
    }
}

impl ReportData for ScheduleReport {
    fn title(&self) -> &str {
        &self.title
    }

    fn headers(&self) -> Vec<String> {
        vec![
            "Month".to_string(),
            "Payment".to_string(),
            "Interest".to_string(),
            "Principal".to_string(),
            "Balance".to_string(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.schedule
            .installments()
            .iter()
            .map(|i| {
                vec![
                    i.month.to_string(),
                    money(i.payment),
                    money(i.interest),
                    money(i.principal),
                    money(i.balance),
                ]
            })
            .collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        vec![
            ("Customer ID".to_string(), self.loan.customer_id.clone()),
            ("Monthly Payment".to_string(), money(self.schedule.monthly_payment)),
            ("Total Paid".to_string(), money(self.schedule.total_paid())),
            ("Total Interest".to_string(), money(self.schedule.total_interest())),
            ("Simple Interest".to_string(), money(self.loan.calculate_interest())),
        ]
    }

    fn numeric_columns(&self) -> Vec<usize> {
        (0..5).collect()
    }
}
