//! Default locations and line formats

use super::severity::Severity;
use std::path::{Path, PathBuf};

/// Root under which each logger gets its own directory.
pub const DEFAULT_LOG_ROOT: &str = "/var/log";

/// `[<timestamp> - <level> - <logger_name>]: <message>`
pub const DEFAULT_FORMAT: &str = "[{asctime} - {levelname} - {name}]: {message}";

/// Request-aware variant of [`DEFAULT_FORMAT`].
pub const REQUEST_FORMAT: &str = "[{asctime} - {levelname} - {name} - {request_id}]: {message}";

/// `{root}/{logger_name}`
pub fn default_log_dir(root: &Path, logger_name: &str) -> PathBuf {
    root.join(logger_name)
}

/// `{root}/{logger_name}/{severity}.log`
pub fn default_file_path(root: &Path, logger_name: &str, severity: Severity) -> PathBuf {
    default_log_dir(root, logger_name).join(severity.file_name())
}
