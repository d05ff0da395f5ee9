//! License management page.

use chrono::{DateTime, Utc};
use portal_model::Session;
use portal_session::{activate_license, license_status_line};
use serde::Serialize;

use crate::notice::Notice;

pub const LICENSE_PLACEHOLDER: &str = "LIC-XXXX-XXXX-XXXX";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicensePage {
    pub expires_on: String,
    pub expired: bool,
}

pub fn license_page(session: &Session, now: DateTime<Utc>) -> LicensePage {
    LicensePage {
        expires_on: session
            .license_expiry_date
            .format("%B %-d, %Y")
            .to_string(),
        expired: session.license_expired(now),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseState {
    pub license_number: String,
    pub message: Option<Notice>,
}

impl LicenseState {
    /// Tries the typed number against the session. The typed text is kept
    /// either way.
    pub fn activate(&mut self, session: &mut Session, now: DateTime<Utc>) -> Notice {
        let notice = match activate_license(session, &self.license_number, now) {
            Ok(expiry) => Notice::success(license_status_line(expiry)),
            Err(err) => Notice::error(err.user_message()),
        };
        self.message = Some(notice.clone());
        notice
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use portal_model::Role;

    use super::*;

    fn session(expiry: DateTime<Utc>) -> Session {
        Session {
            id: "1".to_string(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            first_login: false,
            organization_id: "org-123".to_string(),
            role: Role::Admin,
            license_expiry_date: expiry,
        }
    }

    #[test]
    fn activation_updates_page() {
        let now = Utc.with_ymd_and_hms(2025, 6, 5, 9, 0, 0).unwrap();
        let mut session = session(now - Duration::days(1));
        assert!(license_page(&session, now).expired);

        let mut state = LicenseState {
            license_number: "VALID-LICENSE-2026".to_string(),
            message: None,
        };
        let notice = state.activate(&mut session, now);
        assert!(!notice.is_error());
        assert_eq!(notice.message, "License renewed successfully! New expiry: June 5, 2026");

        let page = license_page(&session, now);
        assert_eq!(page.expires_on, "June 5, 2026");
        assert!(!page.expired);
    }

    #[test]
    fn unknown_number_is_rejected() {
        let now = Utc.with_ymd_and_hms(2025, 6, 5, 9, 0, 0).unwrap();
        let mut session = session(now);
        let mut state = LicenseState {
            license_number: "valid-license-2026".to_string(),
            message: None,
        };
        let notice = state.activate(&mut session, now);
        assert!(notice.is_error());
        assert_eq!(notice.message, "Invalid license number. Please try again.");
        assert_eq!(session.license_expiry_date, now);
    }
}
