//! # Schedule Module
//!
//! Lịch trả nợ (amortization schedule) của một Loan: mỗi tháng một kỳ,
//! gồm phần lãi, phần gốc và dư nợ còn lại.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Một kỳ trả nợ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// Tháng thứ mấy (bắt đầu từ 1)
    pub month: i64,
    /// Số tiền phải trả kỳ này
    pub payment: Decimal,
    /// Phần lãi
    pub interest: Decimal,
    /// Phần gốc
    pub principal: Decimal,
    /// Dư nợ sau kỳ này
    pub balance: Decimal,
}

/// Lịch trả nợ đầy đủ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Số tiền trả hàng tháng (trước điều chỉnh kỳ cuối)
    pub monthly_payment: Decimal,
    installments: Vec<Installment>,
}

impl AmortizationSchedule {
    pub fn new(monthly_payment: Decimal) -> Self {
        Self {
            monthly_payment,
            installments: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, installment: Installment) {
        self.installments.push(installment);
    }

    pub fn installments(&self) -> &[Installment] {
        &self.installments
    }

    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    /// Tổng số tiền phải trả
    pub fn total_paid(&self) -> Decimal {
        self.installments.iter().map(|i| i.payment).sum()
    }

    /// Tổng tiền lãi thực tế theo lịch trả góp
    pub fn total_interest(&self) -> Decimal {
        self.installments.iter().map(|i| i.interest).sum()
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a Installment;
    type IntoIter = std::slice::Iter<'a, Installment>;

    fn into_iter(self) -> Self::IntoIter {
        self.installments.iter()
    }
}
