use portal_model::{
    BusinessSettings, ChargeKind, InvoiceStatus, PaymentMethod, PaymentStatus, ProfileSettings,
    PropertyStatus, PropertyType, RentStatus, ReportPeriod, SecuritySettings, TenantStatus,
};
use portal_views::ViewMode;
use portal_views::pages::billing::BillingTab;
use portal_views::pages::payments::PaymentsTab;
use portal_views::pages::reports::ReportsTab;
use portal_views::pages::settings::{NotificationToggle, SettingsTab};

/// Local page state changes and the demo-only page actions.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewsMessage {
    // Properties
    PropertySearch(String),
    PropertyTypeFilter(Option<PropertyType>),
    PropertyStatusFilter(Option<PropertyStatus>),
    PropertyView(ViewMode),
    PropertyPage(usize),
    NextPropertyPage,
    PreviousPropertyPage,
    PropertyPageSize(usize),

    // Tenants
    TenantSearch(String),
    TenantStatusFilter(Option<TenantStatus>),
    TenantPaymentFilter(Option<RentStatus>),
    TenantView(ViewMode),
    RemoveTenant(u32),

    // Billing and payments
    BillingTab(BillingTab),
    BillingSearch(String),
    BillingStatusFilter(Option<InvoiceStatus>),
    BillingKindFilter(Option<ChargeKind>),
    PaymentsTab(PaymentsTab),
    PaymentsSearch(String),
    PaymentsStatusFilter(Option<PaymentStatus>),
    PaymentsMethodFilter(Option<PaymentMethod>),

    // Reports
    ReportPeriod(ReportPeriod),
    ReportsTab(ReportsTab),
    ExportReport,

    // Team
    TeamSearch(String),
    RemoveMember(u32),

    // Subscription
    VoucherCode(String),
    ApplyVoucher,
    ChoosePackage(String),
    CopyLicenseNumber,

    // Settings
    SettingsTab(SettingsTab),
    UpdateProfile(ProfileSettings),
    UpdateBusiness(BusinessSettings),
    UpdateSecurity(SecuritySettings),
    ToggleNotification(NotificationToggle),
    SaveSettings,
}
