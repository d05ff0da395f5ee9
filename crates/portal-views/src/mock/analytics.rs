use portal_model::{
    FinancialMetrics, MaintenanceCategory, MaintenanceReport, Metric, PropertyPerformance,
    RevenuePoint, TenantAnalytics,
};

use crate::pages::dashboard::{Activity, ActivityKind, StatCard, Trend};

pub fn financial_metrics() -> FinancialMetrics {
    FinancialMetrics {
        total_revenue: Metric::new(84_250.0, 78_900.0, 6.8),
        total_expenses: Metric::new(23_400.0, 21_800.0, 7.3),
        net_income: Metric::new(60_850.0, 57_100.0, 6.6),
        occupancy_rate: Metric::new(88.2, 85.7, 2.9),
    }
}

pub fn property_performance() -> Vec<PropertyPerformance> {
    [
        ("Sunset Apartments", 28_800, 91.7, 24, 1_200),
        ("Riverside Condos", 32_400, 88.9, 18, 1_800),
        ("Garden View Townhomes", 23_050, 83.3, 12, 1_925),
    ]
    .into_iter()
    .map(|(name, revenue, occupancy, units, avg_rent)| PropertyPerformance {
        name: name.to_string(),
        revenue,
        occupancy,
        units,
        avg_rent,
    })
    .collect()
}

pub fn tenant_analytics() -> TenantAnalytics {
    TenantAnalytics {
        total_tenants: 54,
        new_tenants: 8,
        renewals: 12,
        move_outs: 3,
        average_tenancy: 18,
        satisfaction_score: 4.2,
    }
}

pub fn maintenance_report() -> MaintenanceReport {
    MaintenanceReport {
        total_requests: 23,
        completed: 18,
        pending: 5,
        average_resolution_time: 3.2,
        total_cost: 4_850,
        categories: [
            ("Plumbing", 8, 1_800),
            ("Electrical", 5, 1_200),
            ("HVAC", 4, 1_100),
            ("General", 6, 750),
        ]
        .into_iter()
        .map(|(category, count, cost)| MaintenanceCategory {
            category: category.to_string(),
            count,
            cost,
        })
        .collect(),
    }
}

pub fn revenue_series() -> Vec<RevenuePoint> {
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
        .into_iter()
        .zip([65_000, 72_000, 68_000, 84_250, 78_000, 84_250])
        .map(|(month, revenue)| RevenuePoint {
            month: month.to_string(),
            revenue,
        })
        .collect()
}

pub fn dashboard_stats() -> Vec<StatCard> {
    [
        ("Total Properties", "24", "+2 this month", Trend::Up),
        ("Total Units", "186", "+8 this month", Trend::Up),
        ("Occupied Units", "164", "88.2% occupancy", Trend::Up),
        ("Monthly Revenue", "$84,250", "+12.5% from last month", Trend::Up),
        ("Outstanding Rent", "$12,840", "6 tenants pending", Trend::Down),
        ("Maintenance Requests", "8", "3 urgent", Trend::Neutral),
    ]
    .into_iter()
    .map(|(title, value, change, trend)| StatCard {
        title,
        value: value.to_string(),
        change: change.to_string(),
        trend,
    })
    .collect()
}

pub fn recent_activity() -> Vec<Activity> {
    [
        (ActivityKind::Payment, "Rent payment received", "Sarah Johnson paid $1,800 for Unit 4B", "2 hours ago"),
        (ActivityKind::Maintenance, "Maintenance request submitted", "Leaky faucet in Unit 2A kitchen", "4 hours ago"),
        (ActivityKind::Tenant, "New tenant signed lease", "Alex Chen moved into Unit 7C", "1 day ago"),
        (ActivityKind::Property, "Property inspection completed", "123 Main Street quarterly inspection", "2 days ago"),
        (ActivityKind::Lease, "Lease renewal reminder", "Unit 5A lease expires in 30 days", "3 days ago"),
    ]
    .into_iter()
    .map(|(kind, title, description, time)| Activity {
        kind,
        title,
        description,
        time,
    })
    .collect()
}
