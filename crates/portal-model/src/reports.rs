//! Aggregate figures for the reports and dashboard pages.

use serde::{Deserialize, Serialize};

use crate::macros::labeled_enum;

labeled_enum! {
    #[derive(Default)]
    pub enum ReportPeriod ("report period") {
        Week => ("week", "This Week"),
        #[default]
        Month => ("month", "This Month"),
        Quarter => ("quarter", "This Quarter"),
        Year => ("year", "This Year"),
    }
}

/// Current vs previous value of a headline metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub current: f64,
    pub previous: f64,
    pub growth: f64,
}

impl Metric {
    pub const fn new(current: f64, previous: f64, growth: f64) -> Self {
        Self {
            current,
            previous,
            growth,
        }
    }

    pub fn is_up(&self) -> bool {
        self.growth >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    pub total_revenue: Metric,
    pub total_expenses: Metric,
    pub net_income: Metric,
    pub occupancy_rate: Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyPerformance {
    pub name: String,
    pub revenue: u64,
    pub occupancy: f64,
    pub units: u32,
    pub avg_rent: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenantAnalytics {
    pub total_tenants: u32,
    pub new_tenants: u32,
    pub renewals: u32,
    pub move_outs: u32,
    /// Months.
    pub average_tenancy: u32,
    pub satisfaction_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceCategory {
    pub category: String,
    pub count: u32,
    pub cost: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceReport {
    pub total_requests: u32,
    pub completed: u32,
    pub pending: u32,
    /// Days.
    pub average_resolution_time: f64,
    pub total_cost: u64,
    pub categories: Vec<MaintenanceCategory>,
}

impl MaintenanceReport {
    pub fn completion_percent(&self) -> u32 {
        if self.total_requests == 0 {
            return 0;
        }
        (f64::from(self.completed) / f64::from(self.total_requests) * 100.0).round() as u32
    }
}

/// One month of the revenue chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: u64,
}
