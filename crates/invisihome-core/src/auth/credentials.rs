//! In-memory account storage.
//!
//! Accounts live only as long as the process. Passwords are kept as Argon2
//! PHC strings so the plaintext never sits in the store, even though the
//! store itself is a stand-in for a real user database.
//!
//! Hashing and verification are plain blocking functions; callers on an
//! async runtime should run them through `spawn_blocking`.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::debug;

use super::AuthError;

/// Hash a password into an Argon2 PHC string with a fresh salt
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Check a candidate password against a stored PHC string
pub fn verify_password(password_hash: &str, password: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// A registered account.
#[derive(Debug, Clone)]
pub struct Account {
    pub name: String,
    pub email: String,
    password_hash: String,
}

impl Account {
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// Ordered list of registered accounts, keyed by email.
#[derive(Debug, Default)]
pub struct CredentialStore {
    accounts: Vec<Account>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The account registered under exactly this email, if any.
    /// Emails are unique, so there is at most one.
    pub fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.email == email)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    /// Check that an account could be added, before paying for the hash.
    /// Empty fields and duplicate emails are rejected.
    pub fn check_registration(&self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::RegistrationRejected);
        }
        if self.contains_email(email) {
            debug!(email = %email, "Registration rejected, email already present");
            return Err(AuthError::RegistrationRejected);
        }
        Ok(())
    }

    /// Append an account whose password has already been hashed.
    ///
    /// The duplicate check runs again so the store never holds two accounts
    /// for one email.
    pub fn insert(&mut self, name: &str, email: &str, password_hash: String) -> Result<&Account, AuthError> {
        if name.is_empty() || email.is_empty() || self.contains_email(email) {
            return Err(AuthError::RegistrationRejected);
        }

        self.accounts.push(Account {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        });
        debug!(count = self.accounts.len(), "Account registered");

        // Just pushed, so last() is the new account
        self.accounts.last().ok_or(AuthError::RegistrationRejected)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
