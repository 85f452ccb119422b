// src/generators/password.rs
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::GeneratedPassword;
use crate::policy::{self, LETTERS, SPECIAL_CHARACTERS};

/// Number of characters in every generated password.
pub const PASSWORD_LENGTH: usize = 16;

/// Default cap on candidates built by [`PasswordGenerator::try_generate`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

const SPECIAL_SLOTS: usize = 2;
const DIGIT_SLOTS: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("No strong password found after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generates passwords that satisfy the strength policy.
///
/// Uses the thread-local generator by default. Any other `Rng` can be
/// injected with [`PasswordGenerator::with_rng`].
pub struct PasswordGenerator<R = ThreadRng> {
    rng: R,
    max_attempts: usize,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the cap used by [`try_generate`](Self::try_generate). Zero is raised to one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Builds candidates until one is strong. Never gives up.
    pub fn generate_password(&mut self) -> String {
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let candidate = build_candidate(&mut self.rng);
            if policy::is_strong(&candidate) {
                log::debug!("Generated strong password after {} attempt(s)", attempts);
                return candidate;
            }
            log::trace!("Candidate {} rejected by policy", attempts);
        }
    }

    /// Like [`generate_password`](Self::generate_password) but stops after
    /// `max_attempts` candidates.
    pub fn try_generate(&mut self) -> Result<GeneratedPassword> {
        for attempts in 1..=self.max_attempts {
            let candidate = build_candidate(&mut self.rng);
            if policy::is_strong(&candidate) {
                log::debug!("Generated strong password after {} attempt(s)", attempts);
                return Ok(GeneratedPassword {
                    password: candidate,
                    attempts,
                });
            }
            log::trace!("Candidate {} rejected by policy", attempts);
        }

        log::warn!("Gave up after {} candidates", self.max_attempts);
        Err(GeneratorError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }

    pub fn is_password_strong(&self, password: &str) -> bool {
        policy::is_strong(password)
    }
}

/// Builds one shuffled 16 character candidate.
///
/// Two special characters, five digits and nine letters, each letter
/// upper-cased with even odds. The result is not checked against the policy.
pub fn build_candidate<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut slots: Vec<char> = Vec::with_capacity(PASSWORD_LENGTH);

    for i in 0..PASSWORD_LENGTH {
        let c = if i < SPECIAL_SLOTS {
            SPECIAL_CHARACTERS[rng.gen_range(0..SPECIAL_CHARACTERS.len())]
        } else if i < SPECIAL_SLOTS + DIGIT_SLOTS {
            char::from(b'0' + rng.gen_range(0..10u8))
        } else {
            let letter = LETTERS[rng.gen_range(0..LETTERS.len())];
            if rng.gen_bool(0.5) {
                letter.to_ascii_uppercase()
            } else {
                letter
            }
        };
        slots.push(c);
    }

    // Hide which slot produced which class
    slots.shuffle(rng);
    slots.into_iter().collect()
}
