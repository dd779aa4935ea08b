//! Lookup of a logger's handler by severity name, ordinal or value

use super::handler::HandlerInfo;
use super::logger::Logger;
use super::severity::Severity;

/// A severity as callers tend to have it at hand.
///
/// Names are matched case-insensitively here, unlike configuration keys:
/// a lookup that does not resolve simply finds nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelQuery {
    Severity(Severity),
    Name(String),
    Ordinal(u32),
}

impl LevelQuery {
    pub fn resolve(&self) -> Option<Severity> {
        match self {
            LevelQuery::Severity(severity) => Some(*severity),
            LevelQuery::Name(name) => name.to_uppercase().parse().ok(),
            LevelQuery::Ordinal(ordinal) => Severity::from_ordinal(*ordinal),
        }
    }
}

impl From<Severity> for LevelQuery {
    fn from(severity: Severity) -> Self {
        LevelQuery::Severity(severity)
    }
}

impl From<&str> for LevelQuery {
    fn from(name: &str) -> Self {
        LevelQuery::Name(name.to_string())
    }
}

impl From<String> for LevelQuery {
    fn from(name: String) -> Self {
        LevelQuery::Name(name)
    }
}

impl From<u32> for LevelQuery {
    fn from(ordinal: u32) -> Self {
        LevelQuery::Ordinal(ordinal)
    }
}

/// Whether `logger` has a handler bound to exactly this severity
pub fn handler_exists_for_severity(logger: &Logger, level: impl Into<LevelQuery>) -> bool {
    level
        .into()
        .resolve()
        .is_some_and(|severity| logger.has_handler(severity))
}

/// Snapshot of the handler bound to exactly this severity
pub fn get_handler_for_severity(
    logger: &Logger,
    level: impl Into<LevelQuery>,
) -> Option<HandlerInfo> {
    level
        .into()
        .resolve()
        .and_then(|severity| logger.handler_info(severity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handler::Handler;
    use crate::sinks::StreamKind;

    fn logger_with_warning_handler() -> Logger {
        let logger = Logger::new("svc");
        logger.install_handler(Handler::stream(Severity::Warning, StreamKind::Stderr));
        logger
    }

    #[test]
    fn test_lookup_by_every_form() {
        let logger = logger_with_warning_handler();
        assert!(handler_exists_for_severity(&logger, Severity::Warning));
        assert!(handler_exists_for_severity(&logger, "WARNING"));
        assert!(handler_exists_for_severity(&logger, "warning"));
        assert!(handler_exists_for_severity(&logger, 30u32));
        assert!(!handler_exists_for_severity(&logger, Severity::Error));
    }

    #[test]
    fn test_unresolvable_levels_find_nothing() {
        let logger = logger_with_warning_handler();
        assert!(!handler_exists_for_severity(&logger, "VERBOSE"));
        assert!(!handler_exists_for_severity(&logger, 31u32));
        assert!(get_handler_for_severity(&logger, "nope").is_none());
    }

    #[test]
    fn test_get_returns_matching_handler() {
        let logger = logger_with_warning_handler();
        let info = get_handler_for_severity(&logger, "WARNING").unwrap();
        assert_eq!(info.threshold, Severity::Warning);
        assert!(info.target.is_stream());
        assert!(get_handler_for_severity(&logger, Severity::Debug).is_none());
    }
}
