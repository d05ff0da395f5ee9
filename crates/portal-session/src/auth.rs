//! Stub credential check.

use chrono::{DateTime, Duration, Utc};
use portal_model::pii::redact;
use portal_model::{Role, Session};
use tracing::{info, warn};

use crate::error::SessionError;

pub const ADMIN_EMAIL: &str = "admin@example.com";

/// The password that marks an account as never having changed it.
pub const INITIAL_PASSWORD: &str = "password";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Accepts the demo admin account with any password.
///
/// The issued license already expired a day before `now`, so every fresh
/// session starts on the renewal prompt.
pub fn authorize(credentials: &Credentials, now: DateTime<Utc>) -> Result<Session, SessionError> {
    if credentials.email != ADMIN_EMAIL {
        warn!(email = redact(&credentials.email), "sign-in rejected");
        return Err(SessionError::InvalidCredentials);
    }

    let session = Session {
        id: "1".to_string(),
        name: "Admin".to_string(),
        email: ADMIN_EMAIL.to_string(),
        first_login: credentials.password == INITIAL_PASSWORD,
        organization_id: "org-123".to_string(),
        role: Role::Admin,
        license_expiry_date: now - Duration::days(1),
    };
    info!(
        email = redact(&session.email),
        first_login = session.first_login,
        "signed in"
    );
    Ok(session)
}

/// Where the sign-in page sends a freshly authorized session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    ChangePassword,
    /// Stay on the sign-in page and ask for a license number.
    RenewLicense,
    Dashboard,
}

pub fn sign_in_outcome(session: &Session, now: DateTime<Utc>) -> SignInOutcome {
    if session.first_login {
        SignInOutcome::ChangePassword
    } else if session.license_expired(now) {
        SignInOutcome::RenewLicense
    } else {
        SignInOutcome::Dashboard
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn admin_with_initial_password_is_first_login() {
        let session = authorize(&Credentials::new(ADMIN_EMAIL, "password"), now()).unwrap();
        assert!(session.first_login);
        assert!(session.is_admin());
        assert_eq!(session.organization_id, "org-123");
        assert_eq!(session.license_expiry_date, now() - Duration::days(1));
        assert_eq!(sign_in_outcome(&session, now()), SignInOutcome::ChangePassword);
    }

    #[test]
    fn any_other_password_is_accepted() {
        let session = authorize(&Credentials::new(ADMIN_EMAIL, "hunter22"), now()).unwrap();
        assert!(!session.first_login);
        assert_eq!(sign_in_outcome(&session, now()), SignInOutcome::RenewLicense);
    }

    #[test]
    fn unknown_email_is_rejected() {
        assert_eq!(
            authorize(&Credentials::new("someone@example.com", "password"), now()),
            Err(SessionError::InvalidCredentials)
        );
    }

    #[test]
    fn valid_license_goes_to_dashboard() {
        let mut session = authorize(&Credentials::new(ADMIN_EMAIL, "x"), now()).unwrap();
        session.license_expiry_date = now() + Duration::days(30);
        assert_eq!(sign_in_outcome(&session, now()), SignInOutcome::Dashboard);
    }
}
