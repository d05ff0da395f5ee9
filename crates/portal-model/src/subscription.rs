//! License packages, vouchers and usage accounting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::macros::labeled_enum;

/// A package limit; `Unlimited` never constrains usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Limit {
    Count(u32),
    Unlimited,
}

impl Limit {
    /// Percentage of the limit in use, rounded. Always 0 for unlimited.
    pub fn usage_percent(self, current: u32) -> u32 {
        match self {
            Limit::Unlimited | Limit::Count(0) => 0,
            Limit::Count(max) => {
                (f64::from(current) / f64::from(max) * 100.0).round() as u32
            }
        }
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Limit::Count(n) => write!(f, "{n}"),
            Limit::Unlimited => f.write_str("Unlimited"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageLimits {
    pub properties: Limit,
    pub units: Limit,
    pub users: Limit,
}

labeled_enum! {
    pub enum LicenseStatus ("license status") {
        Active => ("active", "Active"),
        Expiring => ("expiring", "Expiring Soon"),
        Expired => ("expired", "Expired"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub license_number: String,
    pub package_id: String,
    pub package_name: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: LicenseStatus,
    pub limits: PackageLimits,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    /// Monthly price in whole dollars.
    pub price: u32,
    pub limits: PackageLimits,
    pub features: Vec<String>,
    pub popular: bool,
}

/// What choosing a package would mean relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageAction {
    CurrentPlan,
    Upgrade,
    Downgrade,
}

impl PackageAction {
    pub fn between(current: &Package, candidate: &Package) -> Self {
        if current.id == candidate.id {
            PackageAction::CurrentPlan
        } else if candidate.price > current.price {
            PackageAction::Upgrade
        } else {
            PackageAction::Downgrade
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PackageAction::CurrentPlan => "Current Plan",
            PackageAction::Upgrade => "Upgrade",
            PackageAction::Downgrade => "Downgrade",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Discount {
    Percentage(u32),
    Fixed(u32),
}

impl std::fmt::Display for Discount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discount::Percentage(p) => write!(f, "{p}% off"),
            Discount::Fixed(amount) => write!(f, "${amount} off"),
        }
    }
}

labeled_enum! {
    pub enum VoucherStatus ("voucher status") {
        Available => ("available", "Available"),
        Used => ("used", "Used"),
        Expired => ("expired", "Expired"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    pub code: String,
    pub title: String,
    pub description: String,
    pub discount: Discount,
    /// Smallest bill the voucher applies to, in dollars.
    pub min_spend: u32,
    pub valid_until: NaiveDate,
    pub status: VoucherStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialOffer {
    pub id: String,
    pub title: String,
    pub description: String,
    pub discount: Discount,
    pub valid_until: NaiveDate,
    pub terms: String,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub properties: u32,
    pub units: u32,
    pub users: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(id: &str, price: u32) -> Package {
        Package {
            id: id.to_string(),
            name: id.to_string(),
            price,
            limits: PackageLimits {
                properties: Limit::Count(5),
                units: Limit::Count(50),
                users: Limit::Count(2),
            },
            features: Vec::new(),
            popular: false,
        }
    }

    #[test]
    fn usage_percent_rounds_and_ignores_unlimited() {
        assert_eq!(Limit::Count(50).usage_percent(12), 24);
        assert_eq!(Limit::Count(500).usage_percent(186), 37);
        assert_eq!(Limit::Count(10).usage_percent(3), 30);
        assert_eq!(Limit::Unlimited.usage_percent(1_000), 0);
    }

    #[test]
    fn package_action_compares_price() {
        let pro = package("pro", 79);
        assert_eq!(PackageAction::between(&pro, &pro), PackageAction::CurrentPlan);
        assert_eq!(
            PackageAction::between(&pro, &package("ent", 199)),
            PackageAction::Upgrade
        );
        assert_eq!(
            PackageAction::between(&pro, &package("starter", 29)),
            PackageAction::Downgrade
        );
    }

    #[test]
    fn limit_display() {
        assert_eq!(Limit::Unlimited.to_string(), "Unlimited");
        assert_eq!(Limit::Count(10).to_string(), "10");
        assert_eq!(Discount::Fixed(50).to_string(), "$50 off");
    }
}
