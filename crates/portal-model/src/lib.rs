//! Domain types shared by the landlord portal crates.
//!
//! Properties are the only entity with real lifecycle semantics; the rest
//! describe the mock records shown by the presentational pages.

mod macros;

pub mod billing;
pub mod error;
pub mod ids;
pub mod payment;
pub mod pii;
pub mod property;
pub mod reports;
pub mod session;
pub mod settings;
pub mod subscription;
pub mod team;
pub mod tenant;

pub use billing::{BillingSummary, ChargeKind, Frequency, Invoice, InvoiceStatus, MonthTotals, RecurringBill};
pub use error::{ModelError, Result};
pub use ids::PropertyId;
pub use payment::{MethodShare, Payment, PaymentMethod, PaymentStatus, PaymentSummary};
pub use property::{
    PLACEHOLDER_IMAGE_URL, Property, PropertyStatus, PropertyType, StaffData, UnitDraft, UnitStatus,
};
pub use reports::{
    FinancialMetrics, MaintenanceCategory, MaintenanceReport, Metric, PropertyPerformance,
    ReportPeriod, RevenuePoint, TenantAnalytics,
};
pub use session::{Role, Session};
pub use settings::{
    BusinessSettings, NotificationSettings, PortalSettings, ProfileSettings, SecuritySettings,
};
pub use subscription::{
    Discount, License, LicenseStatus, Limit, Package, PackageAction, PackageLimits, SpecialOffer,
    UsageStats, Voucher, VoucherStatus,
};
pub use team::{MemberStatus, TeamMember, TeamRole};
pub use tenant::{
    EmergencyContact, Employer, LeaseDocument, MaintenanceRequest, Priority, RentCharge,
    RentStatus, RequestStatus, Tenant, TenantProfile, TenantStatus,
};
