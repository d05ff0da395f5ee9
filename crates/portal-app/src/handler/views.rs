//! Page-local state and the demo-only page actions.

use portal_views::mock;
use portal_views::pages::reports::export_report;
use portal_views::pages::subscription::{choose_package, copy_license_number};
use portal_views::pages::team::remove_member;
use portal_views::pages::tenants::remove_tenant;

use super::{HandlerResult, MessageHandler};
use crate::message::ViewsMessage;
use crate::state::AppState;

pub struct ViewsHandler;

impl MessageHandler<ViewsMessage> for ViewsHandler {
    fn handle(&self, state: &mut AppState, msg: ViewsMessage) -> HandlerResult {
        if let Some(notice) = apply(state, msg) {
            state.notify(notice);
        }
        Ok(None)
    }
}

/// Number of properties matching the list page's current filter.
fn property_matches(state: &AppState) -> usize {
    state.ui.properties.filter.apply(state.store.properties()).len()
}

/// Applies one view message and returns the notice it raises, if any.
fn apply(state: &mut AppState, msg: ViewsMessage) -> Option<portal_views::Notice> {
    let ui = &mut state.ui;
    match msg {
        ViewsMessage::PropertySearch(query) => {
            ui.properties.filter.query = query;
            restart_property_pages(state);
        }
        ViewsMessage::PropertyTypeFilter(property_type) => {
            ui.properties.filter.property_type = property_type;
            restart_property_pages(state);
        }
        ViewsMessage::PropertyStatusFilter(status) => {
            ui.properties.filter.status = status;
            restart_property_pages(state);
        }
        ViewsMessage::PropertyView(mode) => ui.properties.view_mode = mode,
        ViewsMessage::PropertyPage(page) => {
            let total = property_matches(state);
            state.ui.properties.pager.go_to(page, total);
        }
        ViewsMessage::NextPropertyPage => {
            let total = property_matches(state);
            state.ui.properties.pager.next(total);
        }
        ViewsMessage::PreviousPropertyPage => ui.properties.pager.previous(),
        ViewsMessage::PropertyPageSize(size) => ui.properties.pager.set_page_size(size),

        ViewsMessage::TenantSearch(query) => ui.tenants.query = query,
        ViewsMessage::TenantStatusFilter(status) => ui.tenants.status = status,
        ViewsMessage::TenantPaymentFilter(status) => ui.tenants.payment_status = status,
        ViewsMessage::TenantView(mode) => ui.tenants.view_mode = mode,
        ViewsMessage::RemoveTenant(id) => {
            return mock::tenants()
                .iter()
                .find(|t| t.id == id)
                .map(remove_tenant);
        }

        ViewsMessage::BillingTab(tab) => ui.billing.tab = tab,
        ViewsMessage::BillingSearch(query) => ui.billing.query = query,
        ViewsMessage::BillingStatusFilter(status) => ui.billing.status = status,
        ViewsMessage::BillingKindFilter(kind) => ui.billing.kind = kind,
        ViewsMessage::PaymentsTab(tab) => ui.payments.tab = tab,
        ViewsMessage::PaymentsSearch(query) => ui.payments.query = query,
        ViewsMessage::PaymentsStatusFilter(status) => ui.payments.status = status,
        ViewsMessage::PaymentsMethodFilter(method) => ui.payments.method = method,

        ViewsMessage::ReportPeriod(period) => ui.reports.period = period,
        ViewsMessage::ReportsTab(tab) => ui.reports.tab = tab,
        ViewsMessage::ExportReport => return Some(export_report(ui.reports.period)),

        ViewsMessage::TeamSearch(query) => ui.team.query = query,
        ViewsMessage::RemoveMember(id) => {
            return mock::team_members()
                .iter()
                .find(|m| m.id == id)
                .map(remove_member);
        }

        ViewsMessage::VoucherCode(code) => ui.subscription.voucher_code = code,
        ViewsMessage::ApplyVoucher => return ui.subscription.apply_voucher(),
        ViewsMessage::ChoosePackage(id) => return Some(choose_package(&id)),
        ViewsMessage::CopyLicenseNumber => return Some(copy_license_number()),

        ViewsMessage::SettingsTab(tab) => state.settings.tab = tab,
        ViewsMessage::UpdateProfile(profile) => state.settings.set_profile(profile),
        ViewsMessage::UpdateBusiness(business) => state.settings.set_business(business),
        ViewsMessage::UpdateSecurity(security) => state.settings.set_security(security),
        ViewsMessage::ToggleNotification(toggle) => {
            state.settings.toggle(toggle);
        }
        ViewsMessage::SaveSettings => return Some(state.settings.save()),
    }
    None
}

fn restart_property_pages(state: &mut AppState) {
    let total = property_matches(state);
    state.ui.properties.pager.go_to(1, total);
}
