//! Fixed demo records backing every page except the property pages.

mod analytics;
mod finance;
mod subscription;
mod team;
mod tenants;
mod units;

use chrono::NaiveDate;

pub use analytics::{
    dashboard_stats, financial_metrics, maintenance_report, property_performance,
    recent_activity, revenue_series, tenant_analytics,
};
pub use finance::{billing_summary, invoices, payment_methods, payment_summary, payments, recurring_bills};
pub use subscription::{current_license, packages, special_offers, usage_stats, vouchers};
pub use team::team_members;
pub use tenants::{tenant_profile, tenants};
pub use units::{PropertyOption, UnitOption, UnitRow, maintenance_rows, property_options, tenant_options, unit_options, unit_rows};

/// Calendar date from literal parts. Invalid parts fall back to the minimum
/// date, which none of the fixtures use.
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
