use portal_model::{MemberStatus, TeamMember, TeamRole};

use super::{date, strings};

pub fn team_members() -> Vec<TeamMember> {
    [
        (1, "John Doe", "john.doe@propertyhub.com", "+1 (555) 123-4567", TeamRole::Owner, "Management",
            &["Sunset Apartments", "Riverside Condos"][..], (2020, 1, 15), MemberStatus::Active, (2024, 1, 20)),
        (2, "Sarah Johnson", "sarah.johnson@propertyhub.com", "+1 (555) 987-6543", TeamRole::Manager, "Property Management",
            &["Garden View Townhomes"][..], (2021, 3, 20), MemberStatus::Active, (2024, 1, 19)),
        (3, "Mike Wilson", "mike.wilson@propertyhub.com", "+1 (555) 456-7890", TeamRole::Clerk, "Administration",
            &[][..], (2022, 6, 10), MemberStatus::Active, (2024, 1, 18)),
        (4, "Emily Davis", "emily.davis@propertyhub.com", "+1 (555) 321-0987", TeamRole::Manager, "Maintenance",
            &["Sunset Apartments", "Riverside Condos", "Garden View Townhomes"][..], (2021, 9, 5), MemberStatus::Inactive, (2024, 1, 10)),
    ]
    .into_iter()
    .map(|(id, name, email, phone, role, department, properties, joined, status, seen)| TeamMember {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        role,
        department: department.to_string(),
        properties: strings(properties),
        join_date: date(joined.0, joined.1, joined.2),
        status,
        last_active: date(seen.0, seen.1, seen.2),
    })
    .collect()
}
