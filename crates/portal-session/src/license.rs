//! License number activation.

use chrono::{DateTime, Months, Utc};
use portal_model::Session;
use tracing::{info, warn};

use crate::error::SessionError;

/// Accepted license numbers and the years each one grants from activation.
pub const LICENSE_CODES: [(&str, u32); 2] = [("VALID-LICENSE-2026", 1), ("VALID-LICENSE-2027", 2)];

/// Extends the session's license when `code` is an accepted number.
///
/// Codes are matched exactly. The new expiry counts from `now`, not from
/// the old expiry.
pub fn activate_license(
    session: &mut Session,
    code: &str,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, SessionError> {
    let Some((_, years)) = LICENSE_CODES.iter().find(|(known, _)| *known == code) else {
        warn!("license activation rejected");
        return Err(SessionError::InvalidLicense);
    };
    let expiry = now
        .checked_add_months(Months::new(years * 12))
        .ok_or(SessionError::InvalidLicense)?;
    session.license_expiry_date = expiry;
    info!(expires = %expiry.date_naive(), "license activated");
    Ok(expiry)
}

/// Confirmation shown after a successful activation.
pub fn license_status_line(expiry: DateTime<Utc>) -> String {
    format!(
        "License renewed successfully! New expiry: {}",
        expiry.format("%B %-d, %Y")
    )
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use portal_model::Role;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn expired() -> Session {
        Session {
            id: "1".to_string(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            first_login: false,
            organization_id: "org-123".to_string(),
            role: Role::Admin,
            license_expiry_date: now() - Duration::days(1),
        }
    }

    #[test]
    fn codes_extend_by_their_years() {
        let mut session = expired();
        let one = activate_license(&mut session, "VALID-LICENSE-2026", now()).unwrap();
        assert_eq!(one, Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap());
        assert!(!session.license_expired(now()));

        let two = activate_license(&mut session, "VALID-LICENSE-2027", now()).unwrap();
        assert_eq!(two, Utc.with_ymd_and_hms(2027, 6, 15, 12, 0, 0).unwrap());
        assert_eq!(session.license_expiry_date, two);
    }

    #[test]
    fn other_codes_leave_session_alone() {
        let mut session = expired();
        let before = session.license_expiry_date;
        for code in ["valid-license-2026", " VALID-LICENSE-2026", "", "VALID-LICENSE-2028"] {
            let err = activate_license(&mut session, code, now()).unwrap_err();
            assert_eq!(err.user_message(), "Invalid license number. Please try again.");
        }
        assert_eq!(session.license_expiry_date, before);
    }

    #[test]
    fn status_line_spells_out_the_date() {
        let expiry = Utc.with_ymd_and_hms(2026, 6, 5, 0, 0, 0).unwrap();
        assert_eq!(
            license_status_line(expiry),
            "License renewed successfully! New expiry: June 5, 2026"
        );
    }
}
