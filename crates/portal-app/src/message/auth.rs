use portal_session::{Credentials, PasswordChange};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMessage {
    SignIn(Credentials),
    SignOut,
    ChangePassword(PasswordChange),
    /// License number typed into the license page or the renewal prompt.
    LicenseNumberChanged(String),
    ActivateLicense,
}
