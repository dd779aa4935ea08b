//! Named logger owning at most one handler per severity

use super::{
    error::Result,
    handler::{Handler, HandlerInfo},
    log_record::LogRecord,
    severity::Severity,
};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// A named logger.
///
/// Handlers are keyed by their threshold, so a logger can never hold two
/// handlers bound to the same severity. Installing a handler into an occupied
/// slot hands the previous one back to the caller (see [`Logger::install_handler`])
/// or closes it (see [`Logger::replace_handlers`]).
///
/// Handler-list mutation is meant for start-up configuration. Logging through a
/// shared `Arc<Logger>` from many threads afterwards is safe.
pub struct Logger {
    name: String,
    min_level: RwLock<Severity>,
    handlers: RwLock<BTreeMap<Severity, Handler>>,
    failed_writes: AtomicU64,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: RwLock::new(Severity::Debug),
            handlers: RwLock::new(BTreeMap::new()),
            failed_writes: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_min_level(&self, level: Severity) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> Severity {
        *self.min_level.read()
    }

    /// Put `handler` in the slot for its threshold, returning the handler it displaced
    pub fn install_handler(&self, handler: Handler) -> Option<Handler> {
        self.handlers.write().insert(handler.threshold(), handler)
    }

    /// Install every handler in one step, closing any handler they displace.
    ///
    /// All handlers are installed even if closing a displaced one fails; the
    /// first close error is returned afterwards.
    pub fn replace_handlers(&self, handlers: impl IntoIterator<Item = Handler>) -> Result<()> {
        let mut displaced = Vec::new();
        {
            let mut slots = self.handlers.write();
            for handler in handlers {
                if let Some(old) = slots.insert(handler.threshold(), handler) {
                    displaced.push(old);
                }
            }
        }

        let mut first_error = None;
        for mut old in displaced {
            if let Err(e) = old.close() {
                eprintln!(
                    "[LOGGER WARNING] Failed to close replaced {} handler ({}): {}",
                    old.threshold(),
                    old.target(),
                    e
                );
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Detach the handler bound to `severity` without closing it
    pub fn remove_handler(&self, severity: Severity) -> Option<Handler> {
        self.handlers.write().remove(&severity)
    }

    pub fn has_handler(&self, severity: Severity) -> bool {
        self.handlers.read().contains_key(&severity)
    }

    pub fn handler_info(&self, severity: Severity) -> Option<HandlerInfo> {
        self.handlers.read().get(&severity).map(Handler::info)
    }

    /// Snapshots of all handlers, lowest threshold first
    pub fn handlers(&self) -> Vec<HandlerInfo> {
        self.handlers.read().values().map(Handler::info).collect()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Run `f` on the handler bound to `severity`, if any
    pub fn with_handler_mut<R>(
        &self,
        severity: Severity,
        f: impl FnOnce(&mut Handler) -> R,
    ) -> Option<R> {
        self.handlers.write().get_mut(&severity).map(f)
    }

    /// Run `f` on every handler, lowest threshold first
    pub fn for_each_handler_mut(&self, mut f: impl FnMut(&mut Handler)) {
        for handler in self.handlers.write().values_mut() {
            f(handler);
        }
    }

    pub fn log(&self, severity: Severity, message: impl AsRef<str>) {
        if severity < self.min_level() {
            return;
        }

        let record = LogRecord::new(severity, self.name.as_str(), message.as_ref());
        let mut handlers = self.handlers.write();
        if Self::dispatch(&mut handlers, &record) {
            self.failed_writes.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Offer `record` to every handler with per-handler panic isolation.
    ///
    /// Returns true if any handler failed.
    fn dispatch(handlers: &mut BTreeMap<Severity, Handler>, record: &LogRecord) -> bool {
        let mut has_error = false;

        for (severity, handler) in handlers.iter_mut() {
            if !handler.accepts(record.severity) {
                continue;
            }

            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler.handle(record)
            }));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] {} handler failed: {}", severity, e);
                    has_error = true;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] {} handler panicked: {}. \
                         Other handlers continue to function.",
                        severity, panic_msg
                    );
                    has_error = true;
                }
            }
        }

        has_error
    }

    /// Number of records that at least one handler failed to write
    pub fn failed_write_count(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    pub fn flush(&self) -> Result<()> {
        let mut handlers = self.handlers.write();
        for handler in handlers.values_mut() {
            handler.flush()?;
        }
        Ok(())
    }

    /// Close and detach every handler
    pub fn close_all(&self) -> Result<()> {
        let handlers = std::mem::take(&mut *self.handlers.write());
        let mut first_error = None;
        for (_, mut handler) in handlers {
            if let Err(e) = handler.close() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(Severity::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Severity::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(Severity::Critical, message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("min_level", &self.min_level())
            .field("handlers", &self.handlers())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let failed = self.failed_writes.load(Ordering::Relaxed);
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger '{}' shutting down with {} failed writes",
                self.name, failed
            );
        }
    }
}
