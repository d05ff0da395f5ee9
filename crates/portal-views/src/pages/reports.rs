//! Reports and analytics.

use portal_model::{
    FinancialMetrics, MaintenanceReport, PropertyPerformance, ReportPeriod, TenantAnalytics,
};
use serde::Serialize;

use crate::mock;
use crate::notice::Notice;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportsTab {
    #[default]
    Financial,
    Properties,
    Tenants,
    Maintenance,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportsState {
    pub period: ReportPeriod,
    pub tab: ReportsTab,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportsPage {
    pub period: ReportPeriod,
    pub tab: ReportsTab,
    pub metrics: FinancialMetrics,
    pub performance: Vec<PropertyPerformance>,
    pub tenants: TenantAnalytics,
    pub maintenance: MaintenanceReport,
    pub maintenance_completion: u32,
}

/// The demo figures are the same for every period; only the label changes.
pub fn reports(state: &ReportsState) -> ReportsPage {
    let maintenance = mock::maintenance_report();
    ReportsPage {
        period: state.period,
        tab: state.tab,
        metrics: mock::financial_metrics(),
        performance: mock::property_performance(),
        tenants: mock::tenant_analytics(),
        maintenance_completion: maintenance.completion_percent(),
        maintenance,
    }
}

pub fn export_report(period: ReportPeriod) -> Notice {
    Notice::info(format!("Exporting {} report...", period.label().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_is_carried_through() {
        let page = reports(&ReportsState {
            period: ReportPeriod::Quarter,
            ..ReportsState::default()
        });
        assert_eq!(page.period.label(), "This Quarter");
        assert_eq!(page.performance.len(), 3);
        assert_eq!(page.maintenance_completion, 78);
        assert!(page.metrics.net_income.is_up());
    }
}
