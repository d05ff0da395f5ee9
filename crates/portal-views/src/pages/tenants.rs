//! Tenant list and tenant detail pages.

use portal_core::matches_query;
use portal_model::{RentStatus, Tenant, TenantProfile, TenantStatus};
use serde::Serialize;

use super::ViewMode;
use crate::mock;
use crate::notice::Notice;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantListState {
    pub query: String,
    pub status: Option<TenantStatus>,
    pub payment_status: Option<RentStatus>,
    pub view_mode: ViewMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantCard {
    pub tenant: Tenant,
    pub initials: String,
    pub unit_label: String,
    pub lease_months: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantListPage {
    pub cards: Vec<TenantCard>,
    pub view_mode: ViewMode,
}

impl TenantListState {
    fn matches(&self, tenant: &Tenant) -> bool {
        matches_query(
            &self.query,
            &[&tenant.name, &tenant.email, &tenant.unit, &tenant.property],
        ) && self.status.is_none_or(|s| s == tenant.status)
            && self.payment_status.is_none_or(|s| s == tenant.payment_status)
    }
}

pub fn tenant_list(state: &TenantListState) -> TenantListPage {
    let cards = mock::tenants()
        .into_iter()
        .filter(|t| state.matches(t))
        .map(|tenant| TenantCard {
            initials: tenant.initials(),
            unit_label: tenant.unit_label(),
            lease_months: tenant.lease_months(),
            tenant,
        })
        .collect();
    TenantListPage {
        cards,
        view_mode: state.view_mode,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TenantDetail {
    Found(Box<TenantProfile>),
    NotFound { id: String },
}

pub fn tenant_detail(id: &str) -> TenantDetail {
    match mock::tenant_profile(id) {
        Some(profile) => TenantDetail::Found(Box::new(profile)),
        None => TenantDetail::NotFound { id: id.to_string() },
    }
}

/// Removing a tenant is confirmed but changes nothing.
pub fn remove_tenant(tenant: &Tenant) -> Notice {
    tracing::info!(tenant = tenant.id, "tenant removal requested");
    Notice::success("Tenant removed successfully!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_and_payment_filter() {
        let state = TenantListState {
            query: "riverside".to_string(),
            ..TenantListState::default()
        };
        let page = tenant_list(&state);
        assert_eq!(page.cards.len(), 1);
        assert_eq!(page.cards[0].initials, "MR");

        let overdue = TenantListState {
            payment_status: Some(RentStatus::Overdue),
            ..TenantListState::default()
        };
        assert_eq!(tenant_list(&overdue).cards[0].tenant.name, "Michael Rodriguez");

        let inactive = TenantListState {
            status: Some(TenantStatus::Inactive),
            ..TenantListState::default()
        };
        assert!(tenant_list(&inactive).cards.is_empty());
    }

    #[test]
    fn detail_for_known_and_unknown_ids() {
        let TenantDetail::Found(profile) = tenant_detail("3") else {
            panic!("tenant 3 missing");
        };
        assert_eq!(profile.tenant.name, "Alex Chen");
        assert_eq!(profile.security_deposit, 2000);
        assert_eq!(profile.documents.len(), 3);
        assert_eq!(
            tenant_detail("9"),
            TenantDetail::NotFound { id: "9".to_string() }
        );
    }
}
