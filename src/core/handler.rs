//! Handlers: a severity threshold, a formatter and a sink

use super::error::Result;
use super::formatter::Formatter;
use super::log_record::LogRecord;
use super::severity::Severity;
use super::sink::Sink;
use crate::sinks::{FileSink, StreamKind, StreamSink};
use std::fmt;
use std::path::{Path, PathBuf};

/// Destination of a handler, kept for lookups and diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerTarget {
    File(PathBuf),
    Stream(StreamKind),
    /// A caller-supplied sink, identified by its name
    Custom(String),
}

impl HandlerTarget {
    pub fn path(&self) -> Option<&Path> {
        match self {
            HandlerTarget::File(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, HandlerTarget::Stream(_))
    }
}

impl fmt::Display for HandlerTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerTarget::File(path) => write!(f, "file:{}", path.display()),
            HandlerTarget::Stream(stream) => write!(f, "stream:{}", stream.as_str()),
            HandlerTarget::Custom(name) => write!(f, "custom:{}", name),
        }
    }
}

/// Read-only snapshot of a handler returned by lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerInfo {
    pub threshold: Severity,
    pub target: HandlerTarget,
    pub format: String,
}

pub struct Handler {
    threshold: Severity,
    target: HandlerTarget,
    formatter: Formatter,
    sink: Option<Box<dyn Sink>>,
}

impl Handler {
    /// File handler appending to `path`. The directory must exist.
    pub fn file(threshold: Severity, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let sink = FileSink::open(&path)?;
        Ok(Self::with_sink(threshold, HandlerTarget::File(path), Box::new(sink)))
    }

    pub fn stream(threshold: Severity, stream: StreamKind) -> Self {
        Self::with_sink(
            threshold,
            HandlerTarget::Stream(stream),
            Box::new(StreamSink::new(stream)),
        )
    }

    /// Handler writing into an arbitrary sink
    pub fn custom(threshold: Severity, sink: Box<dyn Sink>) -> Self {
        let target = HandlerTarget::Custom(sink.name().to_string());
        Self::with_sink(threshold, target, sink)
    }

    fn with_sink(threshold: Severity, target: HandlerTarget, sink: Box<dyn Sink>) -> Self {
        Self {
            threshold,
            target,
            formatter: Formatter::default(),
            sink: Some(sink),
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn set_formatter(&mut self, formatter: Formatter) {
        self.formatter = formatter;
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn target(&self) -> &HandlerTarget {
        &self.target
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn is_closed(&self) -> bool {
        self.sink.is_none()
    }

    /// Whether a record of `severity` would be written
    #[inline]
    pub fn accepts(&self, severity: Severity) -> bool {
        !self.is_closed() && severity >= self.threshold
    }

    /// Render and write `record` if it passes the threshold
    pub fn handle(&mut self, record: &LogRecord) -> Result<()> {
        if !self.accepts(record.severity) {
            return Ok(());
        }
        if let Some(sink) = self.sink.as_mut() {
            sink.write_line(&self.formatter.format(record))?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(sink) = self.sink.as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Flush and release the sink. A closed handler discards records.
    pub fn close(&mut self) -> Result<()> {
        match self.sink.take() {
            Some(mut sink) => sink.flush(),
            None => Ok(()),
        }
    }

    pub fn info(&self) -> HandlerInfo {
        HandlerInfo {
            threshold: self.threshold,
            target: self.target.clone(),
            format: self.formatter.template().to_string(),
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("threshold", &self.threshold)
            .field("target", &self.target)
            .field("format", &self.formatter.template())
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    #[test]
    fn test_threshold_filters_records() {
        let sink = MemorySink::new();
        let mut handler = Handler::custom(Severity::Warning, Box::new(sink.clone()))
            .with_formatter(Formatter::new("{levelname}:{message}").unwrap());

        handler.handle(&LogRecord::new(Severity::Info, "svc", "skipped")).unwrap();
        handler.handle(&LogRecord::new(Severity::Warning, "svc", "kept")).unwrap();
        handler.handle(&LogRecord::new(Severity::Critical, "svc", "also kept")).unwrap();

        assert_eq!(sink.lines(), vec!["WARNING:kept", "CRITICAL:also kept"]);
    }

    #[test]
    fn test_closed_handler_discards() {
        let sink = MemorySink::new();
        let mut handler = Handler::custom(Severity::Debug, Box::new(sink.clone()));
        handler.close().unwrap();

        assert!(handler.is_closed());
        assert!(!handler.accepts(Severity::Critical));
        handler.handle(&LogRecord::new(Severity::Error, "svc", "dropped")).unwrap();
        assert!(sink.is_empty());
        // closing twice is harmless
        handler.close().unwrap();
    }

    #[test]
    fn test_info_snapshot() {
        let handler = Handler::stream(Severity::Error, StreamKind::Stderr);
        let info = handler.info();
        assert_eq!(info.threshold, Severity::Error);
        assert_eq!(info.target, HandlerTarget::Stream(StreamKind::Stderr));
        assert_eq!(info.format, crate::core::defaults::DEFAULT_FORMAT);
        assert_eq!(info.target.to_string(), "stream:stderr");
    }

    #[test]
    fn test_file_handler_writes_formatted_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("error.log");
        let mut handler = Handler::file(Severity::Error, &path)
            .unwrap()
            .with_formatter(Formatter::new("{name} {message}").unwrap());

        handler.handle(&LogRecord::new(Severity::Error, "svc", "boom")).unwrap();
        handler.close().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "svc boom\n");
        assert_eq!(handler.target().path(), Some(path.as_path()));
    }
}
