//! # Loan Module
//!
//! Định nghĩa Loan - khoản vay lãi suất cố định, trả góp đều hàng tháng.
//!
//! Loan chỉ lưu dạng đã chuẩn hóa:
//! - `interest_rate`: lãi suất tháng dạng phân số (`annual_percent / 100 / 12`)
//! - `loan_term`: kỳ hạn tính bằng tháng (`years * 12`, lưu `i64` nên không tràn)

use crate::schedule::{AmortizationSchedule, Installment};
use crate::update::BlankPolicy;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Số tháng trong một năm
pub const MONTHS_PER_YEAR: i64 = 12;

/// Số kỳ tối đa của một lịch trả nợ chi tiết (1000 năm)
pub const MAX_SCHEDULE_MONTHS: i64 = 1000 * MONTHS_PER_YEAR;

/// Chuyển lãi suất năm (%) sang lãi suất tháng dạng phân số.
///
/// # Examples
/// ```
/// use loanbank_core::loan::monthly_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(monthly_rate(Decimal::from(12)), Decimal::new(1, 2));
/// ```
pub fn monthly_rate(annual_percent: Decimal) -> Decimal {
    annual_percent / Decimal::ONE_HUNDRED / Decimal::from(MONTHS_PER_YEAR)
}

/// Chuyển kỳ hạn năm sang tháng. Mọi giá trị `i32` đều chính xác.
pub fn term_months(years: i32) -> i64 {
    i64::from(years) * MONTHS_PER_YEAR
}

/// Khoản vay của một khách hàng.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// ID của khách hàng sở hữu khoản vay
    pub customer_id: String,
    /// Số tiền gốc
    pub loan_amount: Decimal,
    /// Lãi suất tháng dạng phân số (0.01 = 1%/tháng)
    pub interest_rate: Decimal,
    /// Kỳ hạn tính bằng tháng
    pub loan_term: i64,
}

impl Loan {
    /// Tạo Loan từ lãi suất năm (%) và kỳ hạn năm
    pub fn new(
        customer_id: impl Into<String>,
        loan_amount: Decimal,
        annual_rate_percent: Decimal,
        term_years: i32,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            loan_amount,
            interest_rate: monthly_rate(annual_rate_percent),
            loan_term: term_months(term_years),
        }
    }

    /// Tổng tiền lãi theo công thức đơn giản: `gốc * lãi tháng * số tháng`.
    ///
    /// Đây không phải tổng lãi trả góp thực tế
    /// (xem [`AmortizationSchedule::total_interest`]).
    pub fn calculate_interest(&self) -> Decimal {
        self.loan_amount
            .saturating_mul(self.interest_rate)
            .saturating_mul(Decimal::from(self.loan_term))
    }

    /// Số tiền trả hàng tháng: `(P * r) / (1 - (1 + r)^(-n))`.
    ///
    /// Trả về 0 khi `n <= 0`. Khi `r = 0` trả về `P / n`.
    pub fn generate_payment_schedule(&self) -> Decimal {
        if self.loan_term <= 0 {
            return Decimal::ZERO;
        }

        let principal = self.loan_amount;
        let rate = self.interest_rate;
        let months = Decimal::from(self.loan_term);

        // (P * r) / (1 - g^-1) == P * r * g / (g - 1), với g = (1 + r)^n
        match (Decimal::ONE + rate).checked_powu(self.loan_term as u64) {
            Some(growth) if growth == Decimal::ONE => principal / months,
            Some(growth) => principal
                .checked_mul(rate)
                .and_then(|v| v.checked_mul(growth))
                .and_then(|v| v.checked_div(growth - Decimal::ONE))
                .unwrap_or_else(|| principal.saturating_mul(rate)),
            // g quá lớn: g^-1 ~ 0
            None => principal.saturating_mul(rate),
        }
    }

    /// Lịch trả nợ đầy đủ theo tháng.
    ///
    /// Trả về `None` khi kỳ hạn vượt [`MAX_SCHEDULE_MONTHS`].
    pub fn amortization_schedule(&self) -> Option<AmortizationSchedule> {
        if self.loan_term > MAX_SCHEDULE_MONTHS {
            return None;
        }

        let payment = self.generate_payment_schedule();
        let mut schedule = AmortizationSchedule::new(payment);
        if self.loan_term <= 0 {
            return Some(schedule);
        }

        let mut balance = self.loan_amount;
        for month in 1..=self.loan_term {
            let interest = balance.saturating_mul(self.interest_rate);
            // Kỳ cuối trả hết phần gốc còn lại
            let (due, principal) = if month == self.loan_term {
                (interest.saturating_add(balance), balance)
            } else {
                (payment, payment.saturating_sub(interest))
            };
            balance -= principal;

            schedule.push(Installment {
                month,
                payment: due,
                interest,
                principal,
                balance,
            });
        }

        Some(schedule)
    }

    /// Áp dụng partial update. Lãi suất và kỳ hạn được chuẩn hóa lại như khi tạo.
    pub fn update(&mut self, update: LoanUpdate, policy: BlankPolicy) {
        if let Some(amount) = policy.admit(update.loan_amount) {
            self.loan_amount = amount;
        }
        if let Some(rate) = policy.admit(update.interest_rate) {
            self.interest_rate = monthly_rate(rate);
        }
        if let Some(years) = policy.admit(update.loan_term) {
            self.loan_term = term_months(years);
        }
    }

    /// Lãi suất năm (%) để hiển thị
    pub fn annual_rate_percent(&self) -> Decimal {
        self.interest_rate * Decimal::ONE_HUNDRED * Decimal::from(MONTHS_PER_YEAR)
    }

    /// Kỳ hạn theo năm (chia nguyên) để hiển thị
    pub fn term_years(&self) -> i64 {
        self.loan_term.div_euclid(MONTHS_PER_YEAR)
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loan {} ({} at {:.2}% for {} months)",
            self.customer_id,
            self.loan_amount,
            self.annual_rate_percent().round_dp(2),
            self.loan_term
        )
    }
}

/// Partial update cho Loan.
///
/// Giá trị là dạng thô như khi tạo: lãi suất năm (%) và kỳ hạn năm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanUpdate {
    pub loan_amount: Option<Decimal>,
    /// Lãi suất năm (%)
    pub interest_rate: Option<Decimal>,
    /// Kỳ hạn năm
    pub loan_term: Option<i32>,
}

impl LoanUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.loan_amount = Some(amount);
        self
    }

    pub fn with_rate(mut self, annual_percent: Decimal) -> Self {
        self.interest_rate = Some(annual_percent);
        self
    }

    pub fn with_term(mut self, years: i32) -> Self {
        self.loan_term = Some(years);
        self
    }

    /// Không có field nào được cung cấp
    pub fn is_empty(&self) -> bool {
        self.loan_amount.is_none() && self.interest_rate.is_none() && self.loan_term.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_loan() -> Loan {
        Loan::new("C1", dec!(12000), dec!(12), 1)
    }

    #[test]
    fn test_loan_normalization() {
        let loan = sample_loan();

        assert_eq!(loan.customer_id, "C1");
        assert_eq!(loan.loan_amount, dec!(12000));
        assert_eq!(loan.interest_rate, dec!(0.01));
        assert_eq!(loan.loan_term, 12);
    }

    #[test]
    fn test_calculate_interest_simple_formula() {
        let loan = sample_loan();
        assert_eq!(loan.calculate_interest(), dec!(1440));
    }

    #[test]
    fn test_monthly_payment() {
        let loan = sample_loan();
        let payment = loan.generate_payment_schedule();
        assert_eq!(payment.round_dp(2), dec!(1066.19));
    }

    #[test]
    fn test_payment_zero_term() {
        let loan = Loan::new("C1", dec!(12000), dec!(12), 0);
        assert_eq!(loan.loan_term, 0);
        assert_eq!(loan.generate_payment_schedule(), Decimal::ZERO);

        let loan = Loan::new("C1", dec!(12000), dec!(12), -2);
        assert_eq!(loan.generate_payment_schedule(), Decimal::ZERO);
    }

    #[test]
    fn test_payment_zero_rate() {
        let loan = Loan::new("C1", dec!(12000), dec!(0), 1);
        assert_eq!(loan.generate_payment_schedule(), dec!(1000));
        assert_eq!(loan.calculate_interest(), Decimal::ZERO);
    }

    #[test]
    fn test_payment_thirty_years() {
        // 200k, 6%/năm, 30 năm -> ~1199.10/tháng
        let loan = Loan::new("C2", dec!(200000), dec!(6), 30);
        assert_eq!(loan.interest_rate, dec!(0.005));
        assert_eq!(loan.loan_term, 360);
        assert_eq!(loan.generate_payment_schedule().round_dp(2), dec!(1199.10));
    }

    #[test]
    fn test_update_renormalizes() {
        let mut loan = sample_loan();
        loan.update(
            LoanUpdate::new().with_rate(dec!(6)).with_term(2),
            BlankPolicy::Skip,
        );

        assert_eq!(loan.interest_rate, dec!(0.005));
        assert_eq!(loan.loan_term, 24);
        assert_eq!(loan.loan_amount, dec!(12000));
    }

    #[test]
    fn test_update_zero_skipped_by_default() {
        let mut loan = sample_loan();
        loan.update(
            LoanUpdate::new()
                .with_amount(dec!(0))
                .with_rate(dec!(0))
                .with_term(0),
            BlankPolicy::Skip,
        );

        assert_eq!(loan, sample_loan());
    }

    #[test]
    fn test_update_zero_applied_when_allowed() {
        let mut loan = sample_loan();
        loan.update(LoanUpdate::new().with_term(0), BlankPolicy::Apply);

        assert_eq!(loan.loan_term, 0);
        assert_eq!(loan.generate_payment_schedule(), Decimal::ZERO);
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut loan = sample_loan();
        let update = LoanUpdate::new();
        assert!(update.is_empty());

        loan.update(update, BlankPolicy::Apply);
        assert_eq!(loan, sample_loan());
    }

    #[test]
    fn test_display_conversions() {
        let loan = Loan::new("C1", dec!(5000), dec!(7.5), 3);
        assert_eq!(loan.annual_rate_percent().round_dp(2), dec!(7.50));
        assert_eq!(loan.term_years(), 3);
        assert_eq!(
            format!("{}", loan),
            "Loan C1 (5000 at 7.50% for 36 months)"
        );
    }

    #[test]
    fn test_schedule_pays_off_principal() {
        let loan = sample_loan();
        let schedule = loan.amortization_schedule().unwrap();

        assert_eq!(schedule.len(), 12);
        let first = &schedule.installments()[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.interest, dec!(120));

        let last = schedule.installments().last().unwrap();
        assert_eq!(last.month, 12);
        assert_eq!(last.balance, Decimal::ZERO);

        let principal: Decimal = schedule.installments().iter().map(|i| i.principal).sum();
        assert_eq!(principal, dec!(12000));
        assert_eq!(schedule.total_interest().round_dp(2), dec!(794.23));
    }

    #[test]
    fn test_schedule_empty_for_zero_term() {
        let loan = Loan::new("C1", dec!(1000), dec!(5), 0);
        assert!(loan.amortization_schedule().unwrap().is_empty());
    }

    #[test]
    fn test_large_term_is_exact() {
        let loan = Loan::new("C1", dec!(1000), dec!(5), 200_000_000);
        assert_eq!(loan.loan_term, 2_400_000_000);
        assert_eq!(loan.term_years(), 200_000_000);

        let loan = Loan::new("C1", dec!(1000), dec!(5), i32::MAX);
        assert_eq!(loan.loan_term, i64::from(i32::MAX) * 12);
    }

    #[test]
    fn test_schedule_refused_above_limit() {
        let loan = Loan::new("C1", dec!(1000), dec!(5), 200_000_000);
        assert!(loan.amortization_schedule().is_none());
        // Payment is still available without the row-by-row schedule
        assert!(loan.generate_payment_schedule() > Decimal::ZERO);

        let at_limit = Loan::new("C1", dec!(1000), dec!(5), 1000);
        assert_eq!(at_limit.loan_term, MAX_SCHEDULE_MONTHS);
        let schedule = at_limit.amortization_schedule().unwrap();
        assert_eq!(schedule.len() as i64, MAX_SCHEDULE_MONTHS);

        let over = Loan::new("C1", dec!(1000), dec!(5), 1001);
        assert!(over.amortization_schedule().is_none());
    }
}
