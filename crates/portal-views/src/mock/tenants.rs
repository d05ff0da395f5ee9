use portal_model::{
    EmergencyContact, Employer, LeaseDocument, MaintenanceRequest, Priority, RentCharge,
    RentStatus, RequestStatus, Tenant, TenantProfile, TenantStatus,
};

use super::date;

struct Row {
    id: u32,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    unit: &'static str,
    property: &'static str,
    rent: u64,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    payment: RentStatus,
}

const ROWS: [Row; 3] = [
    Row {
        id: 1,
        name: "Sarah Johnson",
        email: "sarah.johnson@email.com",
        phone: "+1 (555) 123-4567",
        unit: "Unit 4B",
        property: "Sunset Apartments",
        rent: 1800,
        start: (2024, 1, 15),
        end: (2024, 12, 31),
        payment: RentStatus::Paid,
    },
    Row {
        id: 2,
        name: "Michael Rodriguez",
        email: "michael.r@email.com",
        phone: "+1 (555) 987-6543",
        unit: "Unit 2A",
        property: "Riverside Condos",
        rent: 2200,
        start: (2023, 8, 1),
        end: (2024, 7, 31),
        payment: RentStatus::Overdue,
    },
    Row {
        id: 3,
        name: "Alex Chen",
        email: "alex.chen@email.com",
        phone: "+1 (555) 456-7890",
        unit: "Unit 7C",
        property: "Garden View Townhomes",
        rent: 2000,
        start: (2024, 3, 1),
        end: (2025, 2, 28),
        payment: RentStatus::Pending,
    },
];

pub fn tenants() -> Vec<Tenant> {
    ROWS.iter()
        .map(|row| Tenant {
            id: row.id,
            name: row.name.to_string(),
            email: row.email.to_string(),
            phone: row.phone.to_string(),
            unit: row.unit.to_string(),
            property: row.property.to_string(),
            rent_amount: row.rent,
            lease_start: date(row.start.0, row.start.1, row.start.2),
            lease_end: date(row.end.0, row.end.1, row.end.2),
            status: TenantStatus::Active,
            payment_status: row.payment,
        })
        .collect()
}

fn property_address(property: &str) -> &'static str {
    match property {
        "Sunset Apartments" => "123 Main Street, Downtown",
        "Riverside Condos" => "456 River Road, Riverside",
        _ => "789 Garden Lane, Suburbs",
    }
}

/// Full record for the detail page. Every tenant shares the same demo
/// history, deposit and employer details.
pub fn tenant_profile(id: &str) -> Option<TenantProfile> {
    let tenant = tenants()
        .into_iter()
        .find(|t| t.id.to_string() == id.trim())?;
    let rent = tenant.rent_amount;
    let start = tenant.lease_start;

    let payment_history = [
        (date(2024, 1, 1), RentStatus::Paid),
        (date(2024, 2, 1), RentStatus::Paid),
        (date(2024, 3, 1), RentStatus::Paid),
        (date(2024, 4, 1), RentStatus::Pending),
    ]
    .into_iter()
    .map(|(date, status)| RentCharge {
        date,
        amount: rent,
        kind: "Rent".to_string(),
        status,
    })
    .collect();

    let maintenance_requests = vec![
        MaintenanceRequest {
            date: date(2024, 3, 15),
            unit: None,
            issue: "Leaky faucet in kitchen".to_string(),
            status: RequestStatus::Completed,
            priority: Priority::Medium,
        },
        MaintenanceRequest {
            date: date(2024, 2, 20),
            unit: None,
            issue: "AC filter replacement".to_string(),
            status: RequestStatus::Completed,
            priority: Priority::Low,
        },
    ];

    let documents = [
        ("Lease Agreement", "2.4 MB"),
        ("Security Deposit Receipt", "156 KB"),
        ("Move-in Inspection", "1.2 MB"),
    ]
    .into_iter()
    .map(|(name, size)| LeaseDocument {
        name: name.to_string(),
        format: "PDF".to_string(),
        date: start,
        size: size.to_string(),
    })
    .collect();

    Some(TenantProfile {
        property_address: property_address(&tenant.property).to_string(),
        security_deposit: rent,
        move_in_date: start,
        emergency_contact: EmergencyContact {
            name: "John Johnson".to_string(),
            relationship: "Spouse".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
        },
        employer: Employer {
            name: "Tech Corp Inc.".to_string(),
            position: "Software Engineer".to_string(),
            income: 75_000,
        },
        notes: "Excellent tenant, always pays on time. Has one small dog.".to_string(),
        payment_history,
        maintenance_requests,
        documents,
        tenant,
    })
}
