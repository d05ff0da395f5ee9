//! Signed-in user session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::macros::labeled_enum;

labeled_enum! {
    /// Portal role of the signed-in user.
    #[derive(Default)]
    pub enum Role ("role") {
        Admin => ("admin", "Admin"),
        Manager => ("manager", "Manager"),
        #[default]
        Clerk => ("clerk", "Clerk"),
    }
}

/// Client-side session record issued by the credential check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    pub first_login: bool,
    pub organization_id: String,
    pub role: Role,
    pub license_expiry_date: DateTime<Utc>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// A license is expired once its expiry instant lies strictly in the past.
    pub fn license_expired(&self, now: DateTime<Utc>) -> bool {
        self.license_expiry_date < now
    }

    /// Initials shown in the sidebar avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}
