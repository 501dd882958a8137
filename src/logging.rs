//! Log setup.
//!
//! Logs are appended to a file so they never mix with command output. The
//! filter comes from `RUST_LOG` when set, otherwise from the configured level.

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    str::FromStr,
    sync::Mutex,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILE_PATH: &str = "/var/log/tac/tac.log";
pub const LOG_FILE_VARIABLE: &str = "TENANTCTL_LOG_FILE";

/// Level names accepted in the `log-level` setting
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

pub fn is_valid_log_level(level: &str) -> bool {
    LevelFilter::from_str(level).is_ok()
}

pub fn log_file_path() -> PathBuf {
    std::env::var(LOG_FILE_VARIABLE)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE_PATH))
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new(crate::configuration::DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber.
///
/// Falls back to stderr when the log file cannot be opened.
pub fn init(log_level: &str) {
    let filter = env_filter(log_level);
    let path = log_file_path();

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!("Cannot open log file {}: {}", path.display(), e);
        }
    }
}
