//! Session handling for the landlord portal.
//!
//! Sign-in is a stub credential check; everything else here decides which
//! pages a session may see and what the sidebar offers.

pub mod auth;
pub mod error;
pub mod gate;
pub mod license;
pub mod navigation;
pub mod password;
pub mod route;

pub use auth::{Credentials, SignInOutcome, authorize, sign_in_outcome};
pub use error::SessionError;
pub use gate::{GateDecision, SessionGate};
pub use license::{LICENSE_CODES, activate_license, license_status_line};
pub use navigation::{NavItem, SidebarUser, sidebar, sidebar_user};
pub use password::{MIN_PASSWORD_LEN, PasswordChange};
pub use route::Route;
