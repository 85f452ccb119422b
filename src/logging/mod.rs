// src/logging/mod.rs
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use log::LevelFilter;
use thiserror::Error;

use crate::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Cannot open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Raise the configured level by one step per `-v` flag.
pub fn effective_level(base: LevelFilter, verbosity: u8) -> LevelFilter {
    let levels = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    let start = levels.iter().position(|l| *l == base).unwrap_or(2);
    let index = (start + verbosity as usize).min(levels.len() - 1);
    levels[index]
}

/// Install the global logger. Logs go to stderr, or are appended to
/// `config.log_file` when one is set.
pub fn init(config: &Config, verbosity: u8) -> Result<()> {
    let level = effective_level(config.log_level, verbosity);

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(true);

    if let Some(path) = &config.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(open_log_file(path)?)));
    }

    builder.try_init()?;
    log::debug!("Logging initialised at {}", level);
    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| LoggingError::LogFile {
                path: path.display().to_string(),
                source,
            })?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::LogFile {
            path: path.display().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(effective_level(LevelFilter::Warn, 0), LevelFilter::Warn);
        assert_eq!(effective_level(LevelFilter::Warn, 1), LevelFilter::Info);
        assert_eq!(effective_level(LevelFilter::Warn, 2), LevelFilter::Debug);
        assert_eq!(effective_level(LevelFilter::Info, 9), LevelFilter::Trace);
    }

    #[test]
    fn log_file_is_created_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("strongpass.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
