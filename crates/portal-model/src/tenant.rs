//! Tenants and their lease records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::macros::labeled_enum;

labeled_enum! {
    pub enum TenantStatus ("tenant status") {
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
        Pending => ("pending", "Pending"),
    }
}

labeled_enum! {
    /// Rent standing of a tenant or a single historical charge.
    pub enum RentStatus ("rent status") {
        Paid => ("paid", "Paid"),
        Pending => ("pending", "Pending"),
        Overdue => ("overdue", "Overdue"),
    }
}

labeled_enum! {
    pub enum Priority ("priority") {
        High => ("high", "High"),
        Medium => ("medium", "Medium"),
        Low => ("low", "Low"),
    }
}

labeled_enum! {
    pub enum RequestStatus ("request status") {
        Pending => ("pending", "Pending"),
        InProgress => ("in-progress", "In Progress"),
        Completed => ("completed", "Completed"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub unit: String,
    pub property: String,
    pub rent_amount: u64,
    pub lease_start: NaiveDate,
    pub lease_end: NaiveDate,
    pub status: TenantStatus,
    pub payment_status: RentStatus,
}

impl Tenant {
    /// Two-letter avatar initials.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }

    /// Lease length in 30-day months, rounded up.
    pub fn lease_months(&self) -> i64 {
        let days = (self.lease_end - self.lease_start).num_days();
        if days <= 0 {
            return 0;
        }
        (days + 29) / 30
    }

    pub fn unit_label(&self) -> String {
        format!("{} - {}", self.unit, self.property)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    pub name: String,
    pub position: String,
    pub income: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentCharge {
    pub date: NaiveDate,
    pub amount: u64,
    pub kind: String,
    pub status: RentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub date: NaiveDate,
    /// Unit label when the request is tracked at property level.
    pub unit: Option<String>,
    pub issue: String,
    pub status: RequestStatus,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseDocument {
    pub name: String,
    pub format: String,
    pub date: NaiveDate,
    pub size: String,
}

/// Extended record shown on the tenant detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantProfile {
    pub tenant: Tenant,
    pub property_address: String,
    pub security_deposit: u64,
    pub move_in_date: NaiveDate,
    pub emergency_contact: EmergencyContact,
    pub employer: Employer,
    pub notes: String,
    pub payment_history: Vec<RentCharge>,
    pub maintenance_requests: Vec<MaintenanceRequest>,
    pub documents: Vec<LeaseDocument>,
}
