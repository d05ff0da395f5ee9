use portal_model::{
    Discount, License, LicenseStatus, Limit, Package, PackageLimits, SpecialOffer, UsageStats,
    Voucher, VoucherStatus,
};

use super::{date, strings};

const PROFESSIONAL_FEATURES: [&str; 7] = [
    "Advanced Analytics",
    "Automated Billing",
    "Maintenance Management",
    "Tenant Portal",
    "Financial Reporting",
    "API Access",
    "Priority Support",
];

fn limits(properties: u32, units: u32, users: u32) -> PackageLimits {
    PackageLimits {
        properties: Limit::Count(properties),
        units: Limit::Count(units),
        users: Limit::Count(users),
    }
}

pub fn current_license() -> License {
    License {
        license_number: "LIC-2024-PRO-789456".to_string(),
        package_id: "PKG-PROFESSIONAL".to_string(),
        package_name: "Professional Plan".to_string(),
        issue_date: date(2024, 1, 1),
        expiry_date: date(2024, 12, 31),
        status: LicenseStatus::Active,
        limits: limits(50, 500, 10),
        features: strings(&PROFESSIONAL_FEATURES),
    }
}

pub fn packages() -> Vec<Package> {
    vec![
        Package {
            id: "PKG-STARTER".to_string(),
            name: "Starter Plan".to_string(),
            price: 29,
            limits: limits(5, 50, 2),
            features: strings(&["Basic Analytics", "Tenant Management", "Basic Reporting"]),
            popular: false,
        },
        Package {
            id: "PKG-PROFESSIONAL".to_string(),
            name: "Professional Plan".to_string(),
            price: 79,
            limits: limits(50, 500, 10),
            features: strings(&PROFESSIONAL_FEATURES),
            popular: true,
        },
        Package {
            id: "PKG-ENTERPRISE".to_string(),
            name: "Enterprise Plan".to_string(),
            price: 199,
            limits: PackageLimits {
                properties: Limit::Unlimited,
                units: Limit::Unlimited,
                users: Limit::Unlimited,
            },
            features: strings(&[
                "All Professional Features",
                "Custom Integrations",
                "White Label",
                "Dedicated Support",
                "Custom Reports",
                "Multi-location Support",
            ]),
            popular: false,
        },
    ]
}

pub fn vouchers() -> Vec<Voucher> {
    vec![
        Voucher {
            code: "SAVE20NOW".to_string(),
            title: "20% Off Next Billing Cycle".to_string(),
            description: "Get 20% discount on your next monthly payment".to_string(),
            discount: Discount::Percentage(20),
            min_spend: 50,
            valid_until: date(2024, 3, 31),
            status: VoucherStatus::Available,
        },
        Voucher {
            code: "UPGRADE50".to_string(),
            title: "$50 Upgrade Credit".to_string(),
            description: "Apply $50 credit when upgrading to a higher plan".to_string(),
            discount: Discount::Fixed(50),
            min_spend: 100,
            valid_until: date(2024, 4, 15),
            status: VoucherStatus::Available,
        },
        Voucher {
            code: "FREEMONTH".to_string(),
            title: "One Month Free".to_string(),
            description: "Get one month free on annual subscription".to_string(),
            discount: Discount::Percentage(100),
            min_spend: 0,
            valid_until: date(2024, 2, 29),
            status: VoucherStatus::Used,
        },
    ]
}

pub fn special_offers() -> Vec<SpecialOffer> {
    vec![
        SpecialOffer {
            id: "OFFER-001".to_string(),
            title: "Annual Subscription Discount".to_string(),
            description: "Save 25% when you switch to annual billing".to_string(),
            discount: Discount::Percentage(25),
            valid_until: date(2024, 3, 31),
            terms: "Valid for new annual subscriptions only".to_string(),
            featured: true,
        },
        SpecialOffer {
            id: "OFFER-002".to_string(),
            title: "Referral Bonus".to_string(),
            description: "Get $25 credit for each successful referral".to_string(),
            discount: Discount::Fixed(25),
            valid_until: date(2024, 12, 31),
            terms: "Referred customer must maintain subscription for 3 months".to_string(),
            featured: false,
        },
    ]
}

pub fn usage_stats() -> UsageStats {
    UsageStats {
        properties: 12,
        units: 186,
        users: 3,
    }
}
