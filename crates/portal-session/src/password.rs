//! First-login password change.

use serde::Deserialize;

use crate::error::SessionError;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PasswordChange {
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn new(new_password: impl Into<String>, confirm_password: impl Into<String>) -> Self {
        Self {
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Mismatch is reported before length.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.new_password != self.confirm_password {
            return Err(SessionError::PasswordMismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SessionError::PasswordTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_in_order() {
        assert_eq!(
            PasswordChange::new("abc", "abd").validate(),
            Err(SessionError::PasswordMismatch)
        );
        assert_eq!(
            PasswordChange::new("abc", "abc").validate(),
            Err(SessionError::PasswordTooShort)
        );
        assert_eq!(PasswordChange::new("abcdef", "abcdef").validate(), Ok(()));
    }

    #[test]
    fn messages_match_the_form() {
        assert_eq!(
            SessionError::PasswordTooShort.user_message(),
            "Password must be at least 6 characters long."
        );
        assert_eq!(SessionError::PasswordMismatch.to_string(), "Passwords do not match.");
    }
}
