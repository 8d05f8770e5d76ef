//! The single authenticated identity and the operations that change it.
//!
//! `SessionManager` owns the credential store and the optional current
//! session. It is created once at startup and handed to the views; nothing
//! else mutates either.

use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{hash_password, validate_password, verify_password, AuthError, CredentialStore};

/// Simulated round-trip for login and signup.
pub const DEFAULT_AUTH_LATENCY: Duration = Duration::from_millis(1000);

/// The currently signed-in identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl SessionData {
    fn new(email: &str, name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
        }
    }
}

pub struct SessionManager {
    store: CredentialStore,
    data: Option<SessionData>,
    latency: Duration,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_AUTH_LATENCY)
    }

    /// Create a manager with a custom simulated latency (zero for tests)
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            store: CredentialStore::new(),
            data: None,
            latency,
        }
    }

    pub fn current(&self) -> Option<&SessionData> {
        self.data.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.is_some()
    }

    pub fn account_count(&self) -> usize {
        self.store.len()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Sign in with an existing account.
    ///
    /// A failure leaves any current session as it was.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<SessionData, AuthError> {
        self.simulate_latency().await;

        let verified = match self.store.find_by_email(email).cloned() {
            Some(account) => {
                let hash = account.password_hash().to_string();
                let password = password.to_string();
                let is_match = tokio::task::spawn_blocking(move || verify_password(&hash, &password))
                    .await
                    .map_err(|e| AuthError::Hashing(e.to_string()))?;
                is_match.then_some(account)
            }
            None => None,
        };

        let Some(account) = verified else {
            warn!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        };
        let session = SessionData::new(&account.email, &account.name);

        info!(session_id = %session.id, "Login successful");
        self.data = Some(session.clone());
        Ok(session)
    }

    /// Register a new account and sign it in.
    ///
    /// The password policy runs before the simulated round-trip, so a weak
    /// password fails immediately and nothing is stored. A rejected signup
    /// leaves any current session as it was.
    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<SessionData, AuthError> {
        if let Err(e) = validate_password(password) {
            debug!(reason = %e, "Signup rejected by password policy");
            return Err(e.into());
        }

        self.simulate_latency().await;

        if let Err(e) = self.store.check_registration(name, email, password) {
            warn!(error = %e, "Signup rejected");
            return Err(e);
        }

        // Argon2 blocks for a noticeable time; run it off the runtime threads
        let owned = password.to_string();
        let hash = tokio::task::spawn_blocking(move || hash_password(&owned))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))??;

        let account = self.store.insert(name, email, hash)?;
        let session = SessionData::new(&account.email, &account.name);

        info!(session_id = %session.id, accounts = self.store.len(), "Signup successful");
        self.data = Some(session.clone());
        Ok(session)
    }

    pub fn logout(&mut self) {
        if let Some(data) = self.data.take() {
            info!(session_id = %data.id, "Logged out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::PasswordError;

    fn manager() -> SessionManager {
        SessionManager::with_latency(Duration::ZERO)
    }

    // -------------------------------------------------------------------------
    // Login
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_login_requires_exact_match() {
        let mut sm = manager();
        sm.signup("Ada", "a@x.com", "Abcdef1!").await.expect("signup");
        sm.logout();

        assert_eq!(sm.login("a@x.com", "wrong").await, Err(AuthError::InvalidCredentials));
        assert!(!sm.is_authenticated());

        let session = sm.login("a@x.com", "Abcdef1!").await.expect("login");
        assert_eq!(session.email, "a@x.com");
        assert_eq!(session.name, "Ada");
        assert_eq!(sm.current(), Some(&session));
    }

    #[tokio::test]
    async fn test_login_unknown_email_same_error() {
        let mut sm = manager();
        sm.signup("Ada", "a@x.com", "Abcdef1!").await.expect("signup");
        sm.logout();

        let unknown = sm.login("nobody@x.com", "Abcdef1!").await.unwrap_err();
        let wrong = sm.login("a@x.com", "Abcdef1?").await.unwrap_err();
        assert_eq!(unknown, wrong);
    }

    #[tokio::test]
    async fn test_login_with_empty_store_fails() {
        let mut sm = manager();
        assert!(sm.login("a@x.com", "Abcdef1!").await.is_err());
        assert!(sm.current().is_none());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_session() {
        let mut sm = manager();
        let first = sm.signup("Ada", "a@x.com", "Abcdef1!").await.expect("signup");

        assert!(sm.login("a@x.com", "nope").await.is_err());
        assert_eq!(sm.current(), Some(&first));
    }

    // -------------------------------------------------------------------------
    // Signup
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_signup_weak_password_changes_nothing() {
        let mut sm = manager();
        let err = sm.signup("Ada", "a@x.com", "short").await.unwrap_err();
        assert_eq!(err, AuthError::WeakPassword(PasswordError::TooShort));
        assert_eq!(err.to_string(), "Password must be at least 8 characters long");
        assert_eq!(sm.account_count(), 0);
        assert!(!sm.is_authenticated());

        // Policy still wins when the other fields are invalid too
        let err = sm.signup("", "", "abcdefgh").await.unwrap_err();
        assert_eq!(err, AuthError::WeakPassword(PasswordError::MissingUppercase));
        assert_eq!(sm.account_count(), 0);
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let mut sm = manager();
        sm.signup("Ada", "a@x.com", "Abcdef1!").await.expect("signup");
        sm.logout();

        let err = sm.signup("Eve", "a@x.com", "Zyxwvu9?").await.unwrap_err();
        assert_eq!(err, AuthError::RegistrationRejected);
        assert_eq!(err.to_string(), "Email already exists or invalid data provided");
        assert_eq!(sm.account_count(), 1);
        assert!(!sm.is_authenticated());

        // Original credentials still work, the new ones do not
        assert!(sm.login("a@x.com", "Zyxwvu9?").await.is_err());
        let session = sm.login("a@x.com", "Abcdef1!").await.expect("login");
        assert_eq!(session.name, "Ada");
    }

    #[tokio::test]
    async fn test_failed_signup_keeps_existing_session() {
        let mut sm = manager();
        let first = sm.signup("Ada", "a@x.com", "Abcdef1!").await.expect("signup");

        let err = sm.signup("Eve", "a@x.com", "Zyxwvu9?").await.unwrap_err();
        assert_eq!(err, AuthError::RegistrationRejected);
        assert_eq!(sm.current(), Some(&first));

        let err = sm.signup("Eve", "e@x.com", "weak").await.unwrap_err();
        assert_eq!(err, AuthError::WeakPassword(PasswordError::TooShort));
        assert_eq!(sm.current(), Some(&first));

        let err = sm.signup("", "e@x.com", "Zyxwvu9?").await.unwrap_err();
        assert_eq!(err, AuthError::RegistrationRejected);
        assert_eq!(sm.current(), Some(&first));
        assert_eq!(sm.account_count(), 1);
    }

    #[tokio::test]
    async fn test_signup_empty_name_rejected() {
        let mut sm = manager();
        let err = sm.signup("", "a@x.com", "Abcdef1!").await.unwrap_err();
        assert_eq!(err, AuthError::RegistrationRejected);
        assert_eq!(sm.account_count(), 0);
    }

    #[tokio::test]
    async fn test_signup_logs_in() {
        let mut sm = manager();
        let session = sm.signup("Ada", "a@x.com", "Abcdef1!").await.expect("signup");
        assert_eq!(sm.account_count(), 1);
        assert_eq!(sm.current(), Some(&session));
        assert_eq!(session.name, "Ada");
        assert_eq!(session.email, "a@x.com");
        assert!(!session.id.is_empty());
    }

    // -------------------------------------------------------------------------
    // Logout & latency
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_logout_returns_to_anonymous() {
        let mut sm = manager();
        sm.signup("Ada", "a@x.com", "Abcdef1!").await.expect("signup");
        sm.logout();
        assert!(!sm.is_authenticated());

        // Logging out twice is harmless
        sm.logout();
        assert!(sm.current().is_none());
    }

    #[tokio::test]
    async fn test_each_login_gets_new_session_id() {
        let mut sm = manager();
        let first = sm.signup("Ada", "a@x.com", "Abcdef1!").await.expect("signup");
        sm.logout();
        let second = sm.login("a@x.com", "Abcdef1!").await.expect("login");
        assert_ne!(first.id, second.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_latency() {
        let mut sm = SessionManager::with_latency(Duration::from_millis(1000));
        let start = tokio::time::Instant::now();
        let _ = sm.login("a@x.com", "Abcdef1!").await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_weak_signup_skips_latency() {
        let mut sm = SessionManager::with_latency(Duration::from_millis(1000));
        let start = tokio::time::Instant::now();
        let _ = sm.signup("Ada", "a@x.com", "weak").await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
