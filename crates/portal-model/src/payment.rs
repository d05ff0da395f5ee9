//! Received payments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::billing::ChargeKind;
use crate::macros::labeled_enum;

labeled_enum! {
    pub enum PaymentStatus ("payment status") {
        Completed => ("completed", "Completed"),
        Pending => ("pending", "Pending"),
        Failed => ("failed", "Failed"),
    }
}

labeled_enum! {
    pub enum PaymentMethod ("payment method") {
        BankTransfer => ("bank-transfer", "Bank Transfer"),
        CreditCard => ("credit-card", "Credit Card"),
        Check => ("check", "Check"),
        Cash => ("cash", "Cash"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub tenant: String,
    pub unit: String,
    pub property: String,
    pub amount: u64,
    pub kind: ChargeKind,
    pub method: PaymentMethod,
    pub date: NaiveDate,
    pub status: PaymentStatus,
    pub reference: String,
}

/// Aggregate usage of one payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodShare {
    pub method: PaymentMethod,
    pub count: u32,
    pub percentage: u8,
    pub total_amount: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub total_received: u64,
    pub this_month: u64,
    pub pending: u64,
    pub failed: u64,
    /// Days between invoice and payment, averaged.
    pub average_payment_days: f64,
    pub collection_rate: f64,
}
