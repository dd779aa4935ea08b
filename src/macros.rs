//! `format!`-style shorthands over [`Logger::log`](crate::Logger::log).
//!
//! The first argument is anything that derefs to a [`Logger`](crate::Logger),
//! typically `facade.logger()`:
//!
//! ```no_run
//! use advanced_logging::prelude::*;
//! use advanced_logging::{error, info};
//!
//! # fn main() -> advanced_logging::Result<()> {
//! let facade = LoggingFacade::new("billing");
//! facade.configure_file_logging_default()?;
//!
//! let invoice = 1042;
//! info!(facade.logger(), "invoice {} issued", invoice);
//! error!(facade.logger(), "invoice {} rejected by gateway", invoice);
//! # Ok(())
//! # }
//! ```

/// Log at a severity chosen at runtime, e.g. one read from a [`FileMap`](crate::FileMap) key.
///
/// ```
/// # use advanced_logging::prelude::*;
/// use advanced_logging::log;
///
/// let logger = get_logger("jobs");
/// let severity: Severity = "WARNING".parse().unwrap();
/// log!(logger, severity, "job {} took {}s", "reindex", 42);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Formatter, Handler, Logger, Severity};
    use crate::sinks::MemorySink;

    fn captured() -> (Logger, MemorySink) {
        let logger = Logger::new("macros");
        let sink = MemorySink::new();
        logger.install_handler(
            Handler::custom(Severity::Debug, Box::new(sink.clone()))
                .with_formatter(Formatter::new("{levelname} {message}").unwrap()),
        );
        (logger, sink)
    }

    #[test]
    fn test_log_macro_with_runtime_severity() {
        let (logger, sink) = captured();
        for name in ["INFO", "ERROR"] {
            let severity: Severity = name.parse().unwrap();
            log!(logger, severity, "routed via {}", name);
        }
        assert_eq!(sink.lines(), vec!["INFO routed via INFO", "ERROR routed via ERROR"]);
    }

    #[test]
    fn test_macro_output_is_sanitized() {
        let (logger, sink) = captured();
        let user = "eve\nCRITICAL forged";
        info!(logger, "login by {}", user);
        assert_eq!(sink.lines(), vec!["INFO login by eve\\nCRITICAL forged"]);
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = captured();
        debug!(logger, "cache miss for {}", "user:7");
        info!(logger, "{} rows loaded", 100);
        warning!(logger, "disk at {}%", 91);
        error!(logger, "upstream returned {}", 503);
        critical!(logger, "{} unreachable", "/var/log");

        assert_eq!(
            sink.lines(),
            vec![
                "DEBUG cache miss for user:7",
                "INFO 100 rows loaded",
                "WARNING disk at 91%",
                "ERROR upstream returned 503",
                "CRITICAL /var/log unreachable",
            ]
        );
    }
}
