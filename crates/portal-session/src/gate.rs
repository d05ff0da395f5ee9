//! Route guard applied to every navigation.

use chrono::{DateTime, Utc};
use portal_model::Session;
use tracing::debug;

use crate::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(Route),
    /// The page is blocked until a license number is activated.
    RenewLicense,
}

pub struct SessionGate;

impl SessionGate {
    /// Decides whether `session` may open `route` at `now`.
    ///
    /// Rules apply in order: public pages, missing session, first-login
    /// password change, admin-only license page, expired license.
    pub fn check(session: Option<&Session>, route: &Route, now: DateTime<Utc>) -> GateDecision {
        let decision = Self::decide(session, route, now);
        if decision != GateDecision::Allow {
            debug!(route = %route, ?decision, "navigation gated");
        }
        decision
    }

    fn decide(session: Option<&Session>, route: &Route, now: DateTime<Utc>) -> GateDecision {
        if route.is_public() {
            return GateDecision::Allow;
        }
        let Some(session) = session else {
            return GateDecision::Redirect(Route::SignIn);
        };
        if session.first_login && *route != Route::ChangePassword {
            return GateDecision::Redirect(Route::ChangePassword);
        }
        if *route == Route::License && !session.is_admin() {
            return GateDecision::Redirect(Route::Dashboard);
        }
        let renewal_exempt = matches!(route, Route::License | Route::ChangePassword);
        if session.license_expired(now) && !renewal_exempt {
            return GateDecision::RenewLicense;
        }
        GateDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use portal_model::Role;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn session(role: Role, first_login: bool, valid_days: i64) -> Session {
        Session {
            id: "1".to_string(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            first_login,
            organization_id: "org-123".to_string(),
            role,
            license_expiry_date: now() + Duration::days(valid_days),
        }
    }

    #[test]
    fn anonymous_users_go_to_sign_in() {
        assert_eq!(
            SessionGate::check(None, &Route::Properties, now()),
            GateDecision::Redirect(Route::SignIn)
        );
        assert_eq!(SessionGate::check(None, &Route::SignIn, now()), GateDecision::Allow);
    }

    #[test]
    fn first_login_forces_password_change() {
        let s = session(Role::Admin, true, -1);
        assert_eq!(
            SessionGate::check(Some(&s), &Route::Dashboard, now()),
            GateDecision::Redirect(Route::ChangePassword)
        );
        assert_eq!(
            SessionGate::check(Some(&s), &Route::ChangePassword, now()),
            GateDecision::Allow
        );
    }

    #[test]
    fn license_page_is_admin_only() {
        let clerk = session(Role::Clerk, false, 30);
        assert_eq!(
            SessionGate::check(Some(&clerk), &Route::License, now()),
            GateDecision::Redirect(Route::Dashboard)
        );
        let admin = session(Role::Admin, false, 30);
        assert_eq!(SessionGate::check(Some(&admin), &Route::License, now()), GateDecision::Allow);
    }

    #[test]
    fn expired_license_blocks_pages_but_not_license() {
        let admin = session(Role::Admin, false, -1);
        assert_eq!(
            SessionGate::check(Some(&admin), &Route::Team, now()),
            GateDecision::RenewLicense
        );
        assert_eq!(SessionGate::check(Some(&admin), &Route::License, now()), GateDecision::Allow);
    }

    #[test]
    fn valid_session_is_allowed() {
        let manager = session(Role::Manager, false, 1);
        assert_eq!(
            SessionGate::check(Some(&manager), &Route::Reports, now()),
            GateDecision::Allow
        );
    }
}
