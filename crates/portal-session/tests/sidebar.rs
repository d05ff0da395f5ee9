//! Sidebar contents per role.

use chrono::{Duration, TimeZone, Utc};
use portal_model::{Role, Session};
use portal_session::{Route, sidebar, sidebar_user};

fn session(role: Role) -> Session {
    Session {
        id: "1".to_string(),
        name: "Admin".to_string(),
        email: "admin@example.com".to_string(),
        first_login: false,
        organization_id: "org-123".to_string(),
        role,
        license_expiry_date: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::days(1),
    }
}

#[test]
fn admin_sidebar() {
    let items = sidebar(Some(&session(Role::Admin)), &Route::Properties);
    insta::assert_json_snapshot!("admin_sidebar", items);
}

#[test]
fn license_link_is_admin_only() {
    for role in [Role::Manager, Role::Clerk] {
        let items = sidebar(Some(&session(role)), &Route::Dashboard);
        assert_eq!(items.len(), 10);
        assert!(items.iter().all(|item| item.route != Route::License));
    }
    assert_eq!(sidebar(None, &Route::Dashboard).len(), 10);
}

#[test]
fn only_exact_page_is_active() {
    let items = sidebar(None, &Route::Property(portal_model::PropertyId::from(2)));
    assert!(items.iter().all(|item| !item.active));

    let items = sidebar(None, &Route::Dashboard);
    let active: Vec<&str> = items.iter().filter(|i| i.active).map(|i| i.name).collect();
    assert_eq!(active, ["Dashboard"]);
}

#[test]
fn user_block_shows_role() {
    let user = sidebar_user(&session(Role::Manager));
    assert_eq!(user.initials, "A");
    assert_eq!(user.role_icon, "shield");
    assert_eq!(serde_json::to_value(&user).unwrap()["role"], "manager");
}
