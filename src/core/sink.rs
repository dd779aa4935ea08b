//! Sink trait for log output destinations

use super::error::Result;

/// Where a handler's rendered lines end up.
pub trait Sink: Send + Sync {
    /// Write one rendered line; the sink adds the line terminator.
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
