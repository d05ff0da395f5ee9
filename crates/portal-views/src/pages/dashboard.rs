//! Landing page overview.

use portal_session::Route;
use serde::Serialize;

use crate::mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Payment,
    Maintenance,
    Tenant,
    Property,
    Lease,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
}

/// One bar of the revenue chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueBar {
    pub month: String,
    pub revenue: u64,
    /// Bar height relative to the best month, 0-100.
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Occupancy {
    pub rate: f64,
    pub total_units: u32,
    pub occupied_units: u32,
    pub vacant_units: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPage {
    pub stats: Vec<StatCard>,
    pub revenue: Vec<RevenueBar>,
    pub occupancy: Occupancy,
    pub activity: Vec<Activity>,
    pub quick_actions: Vec<QuickAction>,
}

pub fn revenue_bars() -> Vec<RevenueBar> {
    let series = mock::revenue_series();
    let max = series.iter().map(|p| p.revenue).max().unwrap_or(0);
    series
        .into_iter()
        .map(|point| RevenueBar {
            height: if max == 0 {
                0.0
            } else {
                point.revenue as f64 / max as f64 * 100.0
            },
            month: point.month,
            revenue: point.revenue,
        })
        .collect()
}

pub fn occupancy(total_units: u32, occupied_units: u32, rate: f64) -> Occupancy {
    Occupancy {
        rate,
        total_units,
        occupied_units,
        vacant_units: total_units.saturating_sub(occupied_units),
    }
}

pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            title: "Add Property",
            description: "Create a new property listing",
            route: Route::NewProperty,
        },
        QuickAction {
            title: "New Tenant",
            description: "Add a tenant to a unit",
            route: Route::NewTenant,
        },
        QuickAction {
            title: "Generate Invoice",
            description: "Create rent or utility invoice",
            route: Route::Billing,
        },
        QuickAction {
            title: "Settings",
            description: "Manage preferences",
            route: Route::Settings,
        },
    ]
}

pub fn dashboard() -> DashboardPage {
    DashboardPage {
        stats: mock::dashboard_stats(),
        revenue: revenue_bars(),
        occupancy: occupancy(186, 164, 88.2),
        activity: mock::recent_activity(),
        quick_actions: quick_actions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_month_is_full_height() {
        let bars = revenue_bars();
        assert_eq!(bars.len(), 6);
        assert_eq!(bars[3].height, 100.0);
        assert_eq!(bars[5].height, 100.0);
        assert!(bars[0].height < bars[1].height);
    }

    #[test]
    fn vacant_units_are_the_remainder() {
        assert_eq!(dashboard().occupancy.vacant_units, 22);
        assert_eq!(occupancy(5, 9, 0.0).vacant_units, 0);
    }

    #[test]
    fn add_property_opens_the_wizard() {
        assert_eq!(quick_actions()[0].route, Route::NewProperty);
    }
}
