// src/generators/mod.rs
pub mod password;

pub use password::{build_candidate, GeneratorError, PasswordGenerator};
