//! Team members with access to the portal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::macros::labeled_enum;

labeled_enum! {
    pub enum TeamRole ("team role") {
        Owner => ("owner", "Owner"),
        Manager => ("manager", "Manager"),
        Clerk => ("clerk", "Clerk"),
    }
}

labeled_enum! {
    pub enum MemberStatus ("member status") {
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: TeamRole,
    pub department: String,
    pub properties: Vec<String>,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
    pub last_active: NaiveDate,
}

impl TeamMember {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }
}
