//! Core library for Invisihome.
//!
//! Holds everything the front ends share:
//!
//! - `auth`: in-memory credential store, session manager and password policy
//! - `analysis`: ward statistics, upload metadata, mock model results, CSV export
//! - `config`: user configuration and directory locations
//! - `utils`: display formatting helpers

pub mod analysis;
pub mod auth;
pub mod config;
pub mod utils;

pub use auth::{AuthError, PasswordError, SessionData, SessionManager};
pub use config::Config;
