//! Sidebar entries.

use portal_model::{Role, Session};
use serde::Serialize;

use crate::route::Route;

/// One sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    #[serde(rename = "href")]
    pub route: Route,
    pub icon: &'static str,
    /// The link points at the current page.
    pub active: bool,
}

const ITEMS: [(&str, &str); 11] = [
    ("Dashboard", "home"),
    ("Properties", "building"),
    ("Tenants", "users"),
    ("Billing", "receipt"),
    ("Payments", "credit-card"),
    ("Reports", "bar-chart"),
    ("Team", "user-plus"),
    ("Subscription", "key"),
    ("Settings", "settings"),
    ("License", "key"),
    ("Profile", "user"),
];

fn route_for(name: &str) -> Route {
    match name {
        "Properties" => Route::Properties,
        "Tenants" => Route::Tenants,
        "Billing" => Route::Billing,
        "Payments" => Route::Payments,
        "Reports" => Route::Reports,
        "Team" => Route::Team,
        "Subscription" => Route::Subscription,
        "Settings" => Route::Settings,
        "License" => Route::License,
        "Profile" => Route::Profile,
        _ => Route::Dashboard,
    }
}

/// Links visible to `session`. Without a session the role counts as clerk.
pub fn sidebar(session: Option<&Session>, current: &Route) -> Vec<NavItem> {
    let role = session.map(|s| s.role).unwrap_or_default();
    ITEMS
        .iter()
        .filter(|(name, _)| *name != "License" || role == Role::Admin)
        .map(|&(name, icon)| {
            let route = route_for(name);
            NavItem {
                name,
                active: route == *current,
                route,
                icon,
            }
        })
        .collect()
}

/// Account block at the bottom of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarUser {
    pub name: String,
    pub email: String,
    pub initials: String,
    pub role: Role,
    pub role_icon: &'static str,
}

pub fn sidebar_user(session: &Session) -> SidebarUser {
    let role_icon = match session.role {
        Role::Admin => "crown",
        Role::Manager => "shield",
        Role::Clerk => "user",
    };
    SidebarUser {
        name: session.name.clone(),
        email: session.email.clone(),
        initials: session.initials(),
        role: session.role,
        role_icon,
    }
}
