//! Per-logger configuration facade
//!
//! [`LoggingFacade`] is bound to one named logger and exposes the operations
//! that attach file or stream handlers per severity, each with its own format.
//! Every operation validates its whole input (severity keys, format templates)
//! and opens every file before it changes the logger, so a failed call leaves
//! the logger as it was.
//!
//! # Example
//!
//! ```no_run
//! use advanced_logging::prelude::*;
//!
//! # fn main() -> advanced_logging::Result<()> {
//! let facade = LoggingFacade::new("svc");
//! facade.configure_multi_file(&FileMap::new().with(Severity::Error, "/tmp/x/err.log"))?;
//! facade.logger().error("disk full");
//! # Ok(())
//! # }
//! ```

use crate::config::{FileMap, FormatMap, LoggingConfig};
use crate::core::{
    default_file_path, registry, Formatter, Handler, Logger, LoggerError, LoggerRegistry, Result,
    Severity, DEFAULT_LOG_ROOT, REQUEST_FORMAT,
};
use crate::sinks::StreamKind;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoggingFacade {
    logger_name: String,
    logger: Arc<Logger>,
    log_root: PathBuf,
    stream: StreamKind,
    colored_streams: bool,
}

impl LoggingFacade {
    /// Facade for the logger called `logger_name` in the process-wide registry
    pub fn new(logger_name: &str) -> Self {
        Self::with_registry(registry::global(), logger_name)
    }

    /// Facade for the logger called `logger_name` in `registry`
    pub fn with_registry(registry: &LoggerRegistry, logger_name: &str) -> Self {
        Self {
            logger_name: logger_name.to_string(),
            logger: registry.get_or_create(logger_name),
            log_root: PathBuf::from(DEFAULT_LOG_ROOT),
            stream: StreamKind::default(),
            colored_streams: false,
        }
    }

    /// Root of the default directory layout (`{root}/{logger_name}/{level}.log`)
    #[must_use]
    pub fn with_log_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.log_root = root.into();
        self
    }

    /// Stream used by stream handlers this facade creates (stderr by default)
    #[must_use]
    pub fn with_stream(mut self, stream: StreamKind) -> Self {
        self.stream = stream;
        self
    }

    /// Colorize the level name in stream handlers this facade creates
    #[must_use]
    pub fn with_colored_streams(mut self, colored: bool) -> Self {
        self.colored_streams = colored;
        self
    }

    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    pub fn log_root(&self) -> &Path {
        &self.log_root
    }

    pub fn default_file_path(&self, severity: Severity) -> PathBuf {
        default_file_path(&self.log_root, &self.logger_name, severity)
    }

    /// Attach a file handler at every severity, each writing to its default path.
    ///
    /// A handler already bound to one of the severities is closed and replaced.
    pub fn configure_file_logging_default(&self) -> Result<()> {
        let handlers = Severity::ALL
            .into_iter()
            .map(|severity| self.open_file_handler(severity, &self.default_file_path(severity)))
            .collect::<Result<Vec<_>>>()?;
        self.logger.replace_handlers(handlers)
    }

    /// Attach a file handler at every severity: listed severities write to their
    /// configured path, the others to their own default path.
    pub fn configure_file_logging(&self, config: &FileMap) -> Result<()> {
        let handlers = Severity::ALL
            .into_iter()
            .map(|severity| {
                let path = self.resolve_path(severity, config.get(severity).map(PathBuf::as_path));
                self.open_file_handler(severity, &path)
            })
            .collect::<Result<Vec<_>>>()?;
        self.logger.replace_handlers(handlers)
    }

    /// Use one format everywhere.
    ///
    /// With no handlers attached, a single stream handler at the lowest
    /// threshold is created. Otherwise every existing handler adopts the format
    /// and keeps its threshold. `None` or an empty template selects the default.
    pub fn configure_single_format(&self, format: Option<&str>) -> Result<()> {
        let formatter = Formatter::or_default(format)?;

        if self.logger.handler_count() == 0 {
            self.logger
                .install_handler(self.stream_handler(Severity::Debug, formatter));
        } else {
            self.logger
                .for_each_handler_mut(|handler| handler.set_formatter(formatter.clone()));
        }
        Ok(())
    }

    /// [`configure_single_format`](Self::configure_single_format) with the
    /// request-aware format
    pub fn configure_request_format(&self) -> Result<()> {
        self.configure_single_format(Some(REQUEST_FORMAT))
    }

    /// Set a format per severity, creating a stream handler for any listed
    /// severity that has none. Unlisted severities are left alone.
    pub fn configure_multi_format(&self, config: &FormatMap) -> Result<()> {
        let formatters = config
            .iter()
            .map(|(severity, template)| {
                Formatter::or_default(Some(template.as_str())).map(|f| (severity, f))
            })
            .collect::<Result<Vec<_>>>()?;

        for (severity, formatter) in formatters {
            let reformatted = self
                .logger
                .with_handler_mut(severity, |handler| handler.set_formatter(formatter.clone()));
            if reformatted.is_none() {
                self.logger
                    .install_handler(self.stream_handler(severity, formatter));
            }
        }
        Ok(())
    }

    /// Point `severity` at one file, replacing its current handler.
    ///
    /// `None` or an empty path selects the default path for that severity.
    pub fn configure_single_file(&self, path: Option<&Path>, severity: Severity) -> Result<()> {
        let path = self.resolve_path(severity, path);
        let handler = self.open_file_handler(severity, &path)?;
        self.logger.replace_handlers([handler])
    }

    /// [`configure_single_file`](Self::configure_single_file) for every entry.
    /// Unlisted severities are left alone.
    pub fn configure_multi_file(&self, config: &FileMap) -> Result<()> {
        let handlers = config
            .iter()
            .map(|(severity, path)| {
                let path = self.resolve_path(severity, Some(path.as_path()));
                self.open_file_handler(severity, &path)
            })
            .collect::<Result<Vec<_>>>()?;
        self.logger.replace_handlers(handlers)
    }

    /// Apply an untyped configuration: files first, then formats.
    ///
    /// All keys and templates are checked before anything is changed.
    pub fn apply(&self, config: &LoggingConfig) -> Result<()> {
        let (files, formats) = config.validate()?;
        for (_, template) in formats.iter() {
            Formatter::or_default(Some(template.as_str()))?;
        }

        let facade = match &config.log_root {
            Some(root) => self.clone().with_log_root(root),
            None => self.clone(),
        };
        facade.configure_multi_file(&files)?;
        facade.configure_multi_format(&formats)
    }

    fn resolve_path(&self, severity: Severity, path: Option<&Path>) -> PathBuf {
        match path {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => self.default_file_path(severity),
        }
    }

    fn open_file_handler(&self, severity: Severity, path: &Path) -> Result<Handler> {
        ensure_parent_dir(path)?;
        Handler::file(severity, path)
    }

    fn stream_handler(&self, severity: Severity, formatter: Formatter) -> Handler {
        Handler::stream(severity, self.stream)
            .with_formatter(formatter.with_colors(self.colored_streams))
    }
}

/// Create the directory containing `path`, and its parents, if missing
fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .map_err(|e| LoggerError::io_operation("creating log directory", dir, e)),
        _ => Ok(()),
    }
}
