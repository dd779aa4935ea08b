//! Stream sink implementation

use crate::core::{Result, Sink};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Standard stream a [`StreamSink`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Stdout,
    #[default]
    Stderr,
}

impl StreamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamKind::Stdout => "stdout",
            StreamKind::Stderr => "stderr",
        }
    }
}

pub struct StreamSink {
    stream: StreamKind,
}

impl StreamSink {
    pub fn new(stream: StreamKind) -> Self {
        Self { stream }
    }

    pub fn stdout() -> Self {
        Self::new(StreamKind::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(StreamKind::Stderr)
    }

    pub fn stream(&self) -> StreamKind {
        self.stream
    }
}

impl Default for StreamSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Sink for StreamSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        match self.stream {
            StreamKind::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
            StreamKind::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            StreamKind::Stdout => std::io::stdout().flush()?,
            StreamKind::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        self.stream.as_str()
    }
}
