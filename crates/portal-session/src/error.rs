use thiserror::Error;

/// Failures surfaced to the user as inline form text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Invalid license number. Please try again.")]
    InvalidLicense,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,

    #[error("No page at {0}")]
    UnknownRoute(String),
}

impl SessionError {
    /// The message rendered under the form that failed.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
