//! Per-page local state: filters, tabs, search text and open forms.

use portal_session::{Credentials, PasswordChange};
use portal_views::pages::billing::BillingState;
use portal_views::pages::license::LicenseState;
use portal_views::pages::payments::PaymentsState;
use portal_views::pages::properties::PropertyListState;
use portal_views::pages::reports::ReportsState;
use portal_views::pages::subscription::SubscriptionState;
use portal_views::pages::team::TeamState;
use portal_views::pages::tenants::TenantListState;
use portal_views::{InvoiceForm, PaymentForm, TeamMemberForm, TenantForm};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub properties: PropertyListState,
    pub tenants: TenantListState,
    pub billing: BillingState,
    pub payments: PaymentsState,
    pub reports: ReportsState,
    pub team: TeamState,
    pub subscription: SubscriptionState,
    pub license: LicenseState,

    pub sign_in: Credentials,
    pub password: PasswordChange,

    pub invoice_form: InvoiceForm,
    pub payment_form: PaymentForm,
    pub tenant_form: TenantForm,
    pub team_member_form: TeamMemberForm,

    /// The current page is hidden behind the license renewal prompt.
    pub license_prompt: bool,
}
