//! Subscription, packages and vouchers.

use portal_model::{
    License, Limit, Package, PackageAction, SpecialOffer, UsageStats, Voucher,
};
use serde::Serialize;

use crate::mock;
use crate::notice::Notice;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionState {
    pub voucher_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageLine {
    pub label: &'static str,
    pub current: u32,
    pub limit: Limit,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageCard {
    pub package: Package,
    pub action: PackageAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionPage {
    pub license: License,
    pub usage: Vec<UsageLine>,
    pub packages: Vec<PackageCard>,
    pub vouchers: Vec<Voucher>,
    pub offers: Vec<SpecialOffer>,
}

fn usage_lines(license: &License, usage: UsageStats) -> Vec<UsageLine> {
    [
        ("Properties", usage.properties, license.limits.properties),
        ("Units", usage.units, license.limits.units),
        ("Users", usage.users, license.limits.users),
    ]
    .into_iter()
    .map(|(label, current, limit)| UsageLine {
        label,
        current,
        limit,
        percent: limit.usage_percent(current),
    })
    .collect()
}

pub fn subscription() -> SubscriptionPage {
    let license = mock::current_license();
    let packages = mock::packages();
    let current = packages
        .iter()
        .find(|p| p.id == license.package_id)
        .cloned();
    let packages = packages
        .into_iter()
        .map(|package| PackageCard {
            action: current
                .as_ref()
                .map_or(PackageAction::Upgrade, |c| PackageAction::between(c, &package)),
            package,
        })
        .collect();
    SubscriptionPage {
        usage: usage_lines(&license, mock::usage_stats()),
        license,
        packages,
        vouchers: mock::vouchers(),
        offers: mock::special_offers(),
    }
}

impl SubscriptionState {
    /// Confirms the typed code and clears the field. Blank input does nothing.
    pub fn apply_voucher(&mut self) -> Option<Notice> {
        let code = self.voucher_code.trim().to_uppercase();
        if code.is_empty() {
            return None;
        }
        self.voucher_code.clear();
        Some(Notice::success(format!(
            "Voucher \"{code}\" applied successfully!"
        )))
    }
}

pub fn choose_package(package_id: &str) -> Notice {
    Notice::info(format!("Upgrading to {package_id}..."))
}

pub fn copy_license_number() -> Notice {
    Notice::info("License number copied to clipboard!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_follow_price() {
        let page = subscription();
        let actions: Vec<&str> = page.packages.iter().map(|c| c.action.label()).collect();
        assert_eq!(actions, ["Downgrade", "Current Plan", "Upgrade"]);
    }

    #[test]
    fn usage_against_license_limits() {
        let page = subscription();
        let percents: Vec<u32> = page.usage.iter().map(|u| u.percent).collect();
        assert_eq!(percents, [24, 37, 30]);
    }

    #[test]
    fn voucher_is_trimmed_and_uppercased() {
        let mut state = SubscriptionState {
            voucher_code: "  save20now ".to_string(),
        };
        let notice = state.apply_voucher().unwrap();
        assert_eq!(notice.message, "Voucher \"SAVE20NOW\" applied successfully!");
        assert!(state.voucher_code.is_empty());

        state.voucher_code = "   ".to_string();
        assert_eq!(state.apply_voucher(), None);
    }
}
