//! Shell-level error type.

use portal_core::{StoreError, WizardError};
use portal_session::SessionError;
use thiserror::Error;

/// Errors raised while handling a message.
///
/// None of these are fatal. The shell turns each one into an error notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PortalError {
    // =========================================================================
    // SESSION
    // =========================================================================
    #[error(transparent)]
    Session(#[from] SessionError),

    /// An action that needs a signed-in user arrived without a session.
    #[error("not signed in")]
    NotSignedIn,

    // =========================================================================
    // PROPERTIES
    // =========================================================================
    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A wizard message arrived while no wizard was open.
    #[error("no property wizard is open")]
    NoWizard,

    /// An edit named a unit or staff row that is no longer in the draft.
    #[error("no {entry} at position {index}")]
    MissingEntry { entry: &'static str, index: usize },
}

impl PortalError {
    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Session(err) => err.user_message(),
            Self::NotSignedIn => "Please sign in to continue.".to_string(),
            Self::Wizard(err) => err.user_message(),
            Self::Store(err) => format!("Could not save the property: {err}."),
            Self::NoWizard => "Start a new property first.".to_string(),
            Self::MissingEntry { entry, .. } => format!("That {entry} was already removed."),
        }
    }
}

#[cfg(test)]
mod tests {
    use portal_model::PropertyId;

    use super::*;

    #[test]
    fn user_messages() {
        let err = PortalError::from(SessionError::PasswordMismatch);
        assert_eq!(err.user_message(), "Passwords do not match.");

        let err = PortalError::from(StoreError::DuplicateId(PropertyId::from(3)));
        assert!(err.user_message().starts_with("Could not save the property"));
        assert_eq!(PortalError::NoWizard.user_message(), "Start a new property first.");

        let err = PortalError::MissingEntry {
            entry: "unit",
            index: 4,
        };
        assert_eq!(err.to_string(), "no unit at position 4");
        assert_eq!(err.user_message(), "That unit was already removed.");
    }
}
