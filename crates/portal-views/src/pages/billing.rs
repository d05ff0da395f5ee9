//! Invoices and recurring charges.

use portal_core::matches_query;
use portal_model::{BillingSummary, ChargeKind, Invoice, InvoiceStatus, RecurringBill};
use serde::Serialize;

use crate::mock;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingTab {
    #[default]
    Invoices,
    Recurring,
    Reports,
}

impl BillingTab {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Invoices => "Invoices",
            Self::Recurring => "Recurring Billing",
            Self::Reports => "Reports",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingState {
    pub tab: BillingTab,
    pub query: String,
    pub status: Option<InvoiceStatus>,
    pub kind: Option<ChargeKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingPage {
    pub tab: BillingTab,
    pub summary: BillingSummary,
    pub collected_percent: f64,
    pub invoices: Vec<Invoice>,
    pub recurring: Vec<RecurringBill>,
}

impl BillingState {
    fn matches(&self, invoice: &Invoice) -> bool {
        matches_query(
            &self.query,
            &[&invoice.id, &invoice.tenant, &invoice.unit, &invoice.property],
        ) && self.status.is_none_or(|s| s == invoice.status)
            && self.kind.is_none_or(|k| k == invoice.kind)
    }
}

pub fn billing(state: &BillingState) -> BillingPage {
    let summary = mock::billing_summary();
    BillingPage {
        tab: state.tab,
        collected_percent: summary.collected_percent(),
        summary,
        invoices: mock::invoices()
            .into_iter()
            .filter(|i| state.matches(i))
            .collect(),
        recurring: mock::recurring_bills(),
    }
}
