use thiserror::Error;

use super::PasswordError;

/// Failures surfaced by the session manager.
///
/// Login failures never say whether the email exists, so there is one
/// variant for both an unknown email and a wrong password.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    WeakPassword(#[from] PasswordError),

    #[error("Email already exists or invalid data provided")]
    RegistrationRejected,

    #[error("Failed to secure password: {0}")]
    Hashing(String),
}
