//! # Advanced Logging
//!
//! A per-severity logging facade: each log level of a named logger can be
//! routed to its own file or stream, with its own line format.
//!
//! ## Features
//!
//! - **One handler per severity**: re-configuring a level closes and replaces
//!   its previous handler
//! - **Sensible defaults**: `/var/log/{name}/{level}.log` and
//!   `[{asctime} - {levelname} - {name}]: {message}`
//! - **Validated up front**: unknown level names and bad templates are rejected
//!   before the logger is touched
//! - **Request ids**: scoped identifiers rendered through `{request_id}`

pub mod config;
pub mod core;
pub mod facade;
pub mod macros;
pub mod request;
pub mod sinks;

pub mod prelude {
    pub use crate::config::{FileMap, FormatMap, LoggingConfig, SeverityMap};
    pub use crate::core::{
        get_handler_for_severity, get_logger, handler_exists_for_severity, Formatter, Handler,
        HandlerInfo, HandlerTarget, LogRecord, Logger, LoggerError, LoggerRegistry, Result,
        Severity, DEFAULT_FORMAT, REQUEST_FORMAT,
    };
    pub use crate::facade::LoggingFacade;
    pub use crate::request::RequestScope;
    pub use crate::sinks::{FileSink, MemorySink, StreamKind, StreamSink};
}

pub use config::{FileMap, FormatMap, LoggingConfig, SeverityMap};
pub use crate::core::{
    default_file_path, default_log_dir, get_handler_for_severity, get_logger,
    handler_exists_for_severity, Formatter, Handler, HandlerInfo, HandlerTarget, LevelQuery,
    LogRecord, Logger, LoggerError, LoggerRegistry, Result, Severity, Sink, DEFAULT_DATE_FORMAT,
    DEFAULT_FORMAT, DEFAULT_LOG_ROOT, REQUEST_FORMAT,
};
pub use facade::LoggingFacade;
pub use request::RequestScope;
pub use sinks::{FileSink, MemorySink, StreamKind, StreamSink};
