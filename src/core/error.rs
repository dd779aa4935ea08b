//! Error types for the logging facade

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Configuration key that is not one of the five severity names
    #[error("Invalid log level: '{name}'")]
    InvalidSeverity { name: String },

    /// IO error with context
    #[error("IO error while {operation} '{}': {source}", .path.display())]
    IoOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration document could not be parsed
    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Format template could not be parsed
    #[error("Formatter error in '{template}': {message}")]
    FormatterError { template: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an invalid severity error
    pub fn invalid_severity(name: impl Into<String>) -> Self {
        LoggerError::InvalidSeverity { name: name.into() }
    }

    /// Create an IO operation error with the path it concerns
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl AsRef<Path>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a formatter error
    pub fn formatter(template: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_severity("VERBOSE");
        assert!(matches!(err, LoggerError::InvalidSeverity { .. }));

        let err = LoggerError::formatter("{oops}", "unknown field 'oops'");
        assert!(matches!(err, LoggerError::FormatterError { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_severity("VERBOSE");
        assert_eq!(err.to_string(), "Invalid log level: 'VERBOSE'");

        let err = LoggerError::formatter("{oops}", "unknown field 'oops'");
        assert_eq!(
            err.to_string(),
            "Formatter error in '{oops}': unknown field 'oops'"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("creating log directory", "/var/log/svc", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("creating log directory"));
        assert!(err.to_string().contains("/var/log/svc"));
        assert!(err.to_string().contains("access denied"));
    }
}
