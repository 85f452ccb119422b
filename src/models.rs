// src/models.rs
use serde::Serialize;

use crate::policy::Violation;

/// Outcome of checking a password against the policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub strong: bool,
    pub length: usize,
    pub violations: Vec<Violation>,
}

/// A password produced by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub attempts: usize, // Candidates built before one passed, at least 1
}
