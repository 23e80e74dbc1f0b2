//! # Customer Module
//!
//! Định nghĩa Customer - hồ sơ định danh và liên lạc của khách hàng.
//! Customer không có logic tính toán, chỉ giữ dữ liệu.

use crate::update::BlankPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Thông tin khách hàng.
///
/// `customer_id` do caller cấp (không tự sinh) và không đổi sau khi tạo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// ID của khách hàng (C1, CUST_001, ...)
    pub customer_id: String,
    /// Tên đầy đủ
    pub name: String,
    /// Địa chỉ
    pub address: String,
}

impl Customer {
    /// Tạo Customer mới
    pub fn new(
        customer_id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
            address: address.into(),
        }
    }

    /// Áp dụng partial update. `customer_id` không bao giờ thay đổi.
    pub fn update(&mut self, update: CustomerUpdate, policy: BlankPolicy) {
        if let Some(name) = policy.admit(update.name) {
            self.name = name;
        }
        if let Some(address) = policy.admit(update.address) {
            self.address = address;
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.customer_id, self.address)
    }
}

/// Partial update cho Customer: chỉ `name` và `address`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl CustomerUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Không có field nào được cung cấp
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none()
    }
}
