//! Page addresses.

use std::fmt;
use std::str::FromStr;

use portal_model::PropertyId;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Every page of the portal.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Route {
    #[default]
    Dashboard,
    Properties,
    NewProperty,
    Property(PropertyId),
    Tenants,
    NewTenant,
    Tenant(String),
    Billing,
    Payments,
    Reports,
    Settings,
    Subscription,
    Team,
    License,
    Profile,
    SignIn,
    ChangePassword,
}

impl Route {
    /// Parses a path such as `/properties/3`. Query strings, fragments and
    /// trailing slashes are ignored.
    pub fn parse(path: &str) -> Result<Self, SessionError> {
        let unknown = || SessionError::UnknownRoute(path.to_string());
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = bare.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Self::Dashboard,
            ["properties"] => Self::Properties,
            ["properties", "new"] => Self::NewProperty,
            ["properties", id] => Self::Property(PropertyId::new(*id).map_err(|_| unknown())?),
            ["tenants"] => Self::Tenants,
            ["tenants", "new"] => Self::NewTenant,
            ["tenants", id] => Self::Tenant((*id).to_string()),
            ["billing"] => Self::Billing,
            ["payments"] => Self::Payments,
            ["reports"] => Self::Reports,
            ["settings"] => Self::Settings,
            ["subscription"] => Self::Subscription,
            ["team"] => Self::Team,
            ["license"] => Self::License,
            ["profile"] => Self::Profile,
            ["auth", "signin"] => Self::SignIn,
            ["auth", "change-password"] => Self::ChangePassword,
            _ => return Err(unknown()),
        };
        Ok(route)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::Properties => "/properties".to_string(),
            Self::NewProperty => "/properties/new".to_string(),
            Self::Property(id) => format!("/properties/{id}"),
            Self::Tenants => "/tenants".to_string(),
            Self::NewTenant => "/tenants/new".to_string(),
            Self::Tenant(id) => format!("/tenants/{id}"),
            Self::Billing => "/billing".to_string(),
            Self::Payments => "/payments".to_string(),
            Self::Reports => "/reports".to_string(),
            Self::Settings => "/settings".to_string(),
            Self::Subscription => "/subscription".to_string(),
            Self::Team => "/team".to_string(),
            Self::License => "/license".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::SignIn => "/auth/signin".to_string(),
            Self::ChangePassword => "/auth/change-password".to_string(),
        }
    }

    /// Page heading.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Properties => "Properties",
            Self::NewProperty => "Add New Property",
            Self::Property(_) => "Property Details",
            Self::Tenants => "Tenants",
            Self::NewTenant => "Add New Tenant",
            Self::Tenant(_) => "Tenant Details",
            Self::Billing => "Billing & Invoicing",
            Self::Payments => "Payments",
            Self::Reports => "Reports & Analytics",
            Self::Settings => "Settings",
            Self::Subscription => "Subscription & Licensing",
            Self::Team => "Team Management",
            Self::License => "License Management",
            Self::Profile => "Profile",
            Self::SignIn => "Sign In",
            Self::ChangePassword => "Change Password",
        }
    }

    /// Reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::SignIn)
    }

    /// One representative of each page, in sidebar-ish order.
    pub fn catalog() -> Vec<Route> {
        vec![
            Self::Dashboard,
            Self::Properties,
            Self::NewProperty,
            Self::Property(PropertyId::from(1)),
            Self::Tenants,
            Self::NewTenant,
            Self::Tenant("1".to_string()),
            Self::Billing,
            Self::Payments,
            Self::Reports,
            Self::Settings,
            Self::Subscription,
            Self::Team,
            Self::License,
            Self::Profile,
            Self::SignIn,
            Self::ChangePassword,
        ]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Route {
    type Error = SessionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path()
    }
}
