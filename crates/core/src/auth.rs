//! Sign-in form validation.
//!
//! Client-side only: the form checks that the ID is exactly ten characters
//! and the password is non-empty, re-validating on every field change. A
//! successful sign-in produces a typed identifier and is logged; there is
//! no authentication backend in current scope.

use serde::{Deserialize, Serialize};
use std::fmt;
use umrs_types::TenDigitId;

/// Who is signing in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Doctor,
    Patient,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Doctor => "Doctor",
            Self::Patient => "Patient",
            Self::Admin => "Admin",
        };
        f.write_str(s)
    }
}

/// Errors surfaced by the sign-in form.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoginError {
    /// ID not ten characters long, or password empty. One combined
    /// advisory message, as the form shows a single error banner.
    #[error("Please enter a valid ID and password")]
    InvalidCredentials,
}

/// Validated sign-in outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignIn {
    pub role: Role,
    pub id: TenDigitId,
}

/// The two-field sign-in form.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub id: String,
    pub password: String,
}

impl LoginForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the current field values.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::InvalidCredentials` unless the ID is exactly
    /// ten characters and the password is non-empty.
    pub fn validate(&self) -> Result<TenDigitId, LoginError> {
        let id = TenDigitId::new(&self.id).map_err(|_| LoginError::InvalidCredentials)?;
        if self.password.is_empty() {
            return Err(LoginError::InvalidCredentials);
        }
        Ok(id)
    }

    /// Whether the submit button should be enabled.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Attempts to sign in under the selected role.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::InvalidCredentials` when validation fails.
    pub fn sign_in(&self, role: Role) -> Result<SignIn, LoginError> {
        let id = self.validate()?;
        tracing::info!(%role, "sign-in");
        Ok(SignIn { role, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, password: &str) -> LoginForm {
        LoginForm {
            id: id.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_ten_character_id_and_password_validate() {
        assert!(form("0123456789", "secret").is_valid());
    }

    #[test]
    fn test_wrong_length_id_is_rejected() {
        assert_eq!(
            form("012345678", "secret").validate(),
            Err(LoginError::InvalidCredentials)
        );
        assert_eq!(
            form("01234567890", "secret").validate(),
            Err(LoginError::InvalidCredentials)
        );
    }

    #[test]
    fn test_empty_password_is_rejected() {
        let err = form("0123456789", "").validate().expect_err("should reject");
        assert_eq!(err.to_string(), "Please enter a valid ID and password");
    }

    #[test]
    fn test_sign_in_carries_role_and_typed_id() {
        let signed = form("0123456789", "pw")
            .sign_in(Role::Doctor)
            .expect("should sign in");
        assert_eq!(signed.role, Role::Doctor);
        assert_eq!(signed.id.as_str(), "0123456789");
    }
}
