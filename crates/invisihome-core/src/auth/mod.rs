//! Authentication module for managing accounts and the current session.
//!
//! This module provides:
//! - `CredentialStore`: process-lifetime list of registered accounts
//! - `SessionManager`: the single current identity plus login/signup/logout
//! - `password`: the fixed five-rule password policy applied at signup
//!
//! Nothing here is persisted. Accounts and the session vanish when the
//! process exits.

pub mod credentials;
pub mod error;
pub mod password;
pub mod session;

pub use credentials::{hash_password, verify_password, Account, CredentialStore};
pub use error::AuthError;
pub use password::{validate_password, PasswordError};
pub use session::{SessionData, SessionManager};
