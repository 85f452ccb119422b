// src/lib.rs
//! Generate random passwords that satisfy a fixed strength policy, and check
//! arbitrary strings against that same policy.
//!
//! ```
//! let password = strong_password::generate_password();
//! assert_eq!(password.chars().count(), 16);
//! assert!(strong_password::is_password_strong(&password));
//! ```

pub mod cli;
pub mod config;
pub mod generators;
pub mod logging;
pub mod models;
pub mod policy;

pub use crate::generators::{GeneratorError, PasswordGenerator};
pub use crate::models::{GeneratedPassword, StrengthReport};
pub use crate::policy::Violation;

/// Generate a 16 character password that passes [`is_password_strong`].
pub fn generate_password() -> String {
    PasswordGenerator::new().generate_password()
}

/// Check a password against the strength policy.
pub fn is_password_strong(password: &str) -> bool {
    policy::is_strong(password)
}
