//! Invoices and recurring charges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::macros::labeled_enum;

labeled_enum! {
    pub enum InvoiceStatus ("invoice status") {
        Paid => ("paid", "Paid"),
        Pending => ("pending", "Pending"),
        Overdue => ("overdue", "Overdue"),
    }
}

labeled_enum! {
    pub enum ChargeKind ("charge type") {
        Rent => ("rent", "Rent"),
        Utilities => ("utilities", "Utilities"),
        LateFee => ("late-fee", "Late Fee"),
        Maintenance => ("maintenance", "Maintenance"),
        Deposit => ("deposit", "Security Deposit"),
        Other => ("other", "Other"),
    }
}

labeled_enum! {
    pub enum Frequency ("frequency") {
        Weekly => ("weekly", "Weekly"),
        Monthly => ("monthly", "Monthly"),
        Quarterly => ("quarterly", "Quarterly"),
        Yearly => ("yearly", "Yearly"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub tenant: String,
    pub unit: String,
    pub property: String,
    pub amount: u64,
    pub kind: ChargeKind,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringBill {
    pub id: String,
    pub tenant: String,
    pub unit: String,
    pub property: String,
    pub amount: u64,
    pub kind: ChargeKind,
    pub frequency: Frequency,
    pub next_due: NaiveDate,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotals {
    pub invoiced: u64,
    pub paid: u64,
    pub pending: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSummary {
    pub total_invoiced: u64,
    pub total_paid: u64,
    pub total_pending: u64,
    pub total_overdue: u64,
    pub this_month: MonthTotals,
}

impl BillingSummary {
    /// Share of invoiced money already collected, in percent.
    pub fn collected_percent(&self) -> f64 {
        if self.total_invoiced == 0 {
            return 0.0;
        }
        self.total_paid as f64 / self.total_invoiced as f64 * 100.0
    }
}
