//! Signed-in user's profile.

use portal_model::{Role, Session};
use serde::Serialize;

const MISSING: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePage {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub organization_id: String,
}

fn or_missing(value: &str) -> String {
    if value.trim().is_empty() {
        MISSING.to_string()
    } else {
        value.to_string()
    }
}

pub fn profile(session: &Session) -> ProfilePage {
    ProfilePage {
        name: or_missing(&session.name),
        email: or_missing(&session.email),
        role: session.role,
        organization_id: session.organization_id.clone(),
    }
}
