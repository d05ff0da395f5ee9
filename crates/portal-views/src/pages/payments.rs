//! Received payments.

use portal_core::matches_query;
use portal_model::{MethodShare, Payment, PaymentMethod, PaymentStatus, PaymentSummary};
use serde::Serialize;

use crate::mock;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentsTab {
    #[default]
    Transactions,
    Methods,
    Analytics,
}

impl PaymentsTab {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transactions => "Transactions",
            Self::Methods => "Payment Methods",
            Self::Analytics => "Analytics",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentsState {
    pub tab: PaymentsTab,
    pub query: String,
    pub status: Option<PaymentStatus>,
    pub method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentsPage {
    pub tab: PaymentsTab,
    pub summary: PaymentSummary,
    pub payments: Vec<Payment>,
    pub methods: Vec<MethodShare>,
}

pub fn payments(state: &PaymentsState) -> PaymentsPage {
    let payments = mock::payments()
        .into_iter()
        .filter(|p| {
            matches_query(&state.query, &[&p.id, &p.tenant, &p.reference, &p.property])
                && state.status.is_none_or(|s| s == p.status)
                && state.method.is_none_or(|m| m == p.method)
        })
        .collect();
    PaymentsPage {
        tab: state.tab,
        summary: mock::payment_summary(),
        payments,
        methods: mock::payment_methods(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_method_and_reference() {
        let cards = PaymentsState {
            method: Some(PaymentMethod::CreditCard),
            ..PaymentsState::default()
        };
        assert_eq!(payments(&cards).payments.len(), 2);

        let by_ref = PaymentsState {
            query: "chk".to_string(),
            ..PaymentsState::default()
        };
        let found = payments(&by_ref).payments;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, PaymentStatus::Pending);
    }

    #[test]
    fn method_shares_cover_all_payments() {
        let page = payments(&PaymentsState::default());
        let total: u8 = page.methods.iter().map(|m| m.percentage).sum();
        assert_eq!(total, 100);
    }
}
