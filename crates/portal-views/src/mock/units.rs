use chrono::NaiveDate;
use portal_model::{MaintenanceRequest, Priority, RequestStatus, UnitStatus};
use serde::Serialize;

use super::date;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyOption {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitOption {
    pub id: &'static str,
    pub name: &'static str,
    pub property_id: &'static str,
}

/// Choices offered by the invoice, payment and tenant forms.
pub fn property_options() -> Vec<PropertyOption> {
    [
        ("1", "Sunset Apartments"),
        ("2", "Riverside Condos"),
        ("3", "Garden View Townhomes"),
    ]
    .into_iter()
    .map(|(id, name)| PropertyOption { id, name })
    .collect()
}

pub fn tenant_options() -> Vec<(&'static str, &'static str)> {
    vec![
        ("1", "Sarah Johnson"),
        ("2", "Michael Rodriguez"),
        ("3", "Alex Chen"),
    ]
}

/// Units selectable in a form. With a property chosen, only its units.
pub fn unit_options(property_id: Option<&str>) -> Vec<UnitOption> {
    [
        ("1A", "Unit 1A", "1"),
        ("1B", "Unit 1B", "1"),
        ("2A", "Unit 2A", "2"),
        ("2B", "Unit 2B", "2"),
        ("7C", "Unit 7C", "3"),
    ]
    .into_iter()
    .map(|(id, name, owner)| UnitOption {
        id,
        name,
        property_id: owner,
    })
    .filter(|unit| property_id.is_none_or(|p| p.is_empty() || unit.property_id == p))
    .collect()
}

/// Row of the units tab on the property detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitRow {
    pub unit: &'static str,
    pub tenant: Option<&'static str>,
    pub rent: u64,
    pub status: UnitStatus,
    pub lease_end: Option<NaiveDate>,
}

pub fn unit_rows() -> Vec<UnitRow> {
    vec![
        UnitRow {
            unit: "1A",
            tenant: Some("John Doe"),
            rent: 1200,
            status: UnitStatus::Occupied,
            lease_end: Some(date(2024, 12, 31)),
        },
        UnitRow {
            unit: "1B",
            tenant: Some("Jane Smith"),
            rent: 1200,
            status: UnitStatus::Occupied,
            lease_end: Some(date(2024, 11, 30)),
        },
        UnitRow {
            unit: "2A",
            tenant: None,
            rent: 1300,
            status: UnitStatus::Vacant,
            lease_end: None,
        },
        UnitRow {
            unit: "2B",
            tenant: Some("Mike Johnson"),
            rent: 1300,
            status: UnitStatus::Occupied,
            lease_end: Some(date(2025, 1, 15)),
        },
    ]
}

pub fn maintenance_rows() -> Vec<MaintenanceRequest> {
    vec![
        MaintenanceRequest {
            date: date(2024, 1, 15),
            unit: Some("1A".to_string()),
            issue: "Leaky faucet".to_string(),
            status: RequestStatus::Pending,
            priority: Priority::Medium,
        },
        MaintenanceRequest {
            date: date(2024, 1, 14),
            unit: Some("2B".to_string()),
            issue: "AC not working".to_string(),
            status: RequestStatus::InProgress,
            priority: Priority::High,
        },
    ]
}
