//! Core logging types and traits

pub mod defaults;
pub mod directory;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod log_record;
pub mod logger;
pub mod registry;
pub mod severity;
pub mod sink;

pub use defaults::{
    default_file_path, default_log_dir, DEFAULT_FORMAT, DEFAULT_LOG_ROOT, REQUEST_FORMAT,
};
pub use directory::{get_handler_for_severity, handler_exists_for_severity, LevelQuery};
pub use error::{LoggerError, Result};
pub use formatter::{Formatter, DEFAULT_DATE_FORMAT};
pub use handler::{Handler, HandlerInfo, HandlerTarget};
pub use log_record::LogRecord;
pub use logger::Logger;
pub use registry::{get_logger, LoggerRegistry};
pub use severity::Severity;
pub use sink::Sink;
