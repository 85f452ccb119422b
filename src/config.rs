// src/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;
use thiserror::Error;

use crate::generators::password::DEFAULT_MAX_ATTEMPTS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

// Runtime configuration for the command line tool
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Password Generation
    pub max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
            log_file: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    // Load configuration from environment variables. Malformed values keep
    // their defaults and are returned so they can be logged once logging is up.
    pub fn load() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build a configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut errors = Vec::new();

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_log_level(&level) {
                Ok(level) => config.log_level = level,
                Err(e) => errors.push(e),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        // Password Generation
        if let Some(val) = lookup("GENERATOR_MAX_ATTEMPTS") {
            match parse_max_attempts(&val) {
                Ok(attempts) => config.max_attempts = attempts,
                Err(e) => errors.push(e),
            }
        }

        (config, errors)
    }
}

fn parse_log_level(value: &str) -> Result<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ConfigError::InvalidValue {
            key: "LOG_LEVEL",
            value: value.to_string(),
        }),
    }
}

fn parse_max_attempts(value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(attempts) if attempts > 0 => Ok(attempts),
        _ => Err(ConfigError::InvalidValue {
            key: "GENERATOR_MAX_ATTEMPTS",
            value: value.to_string(),
        }),
    }
}
