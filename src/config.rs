//! Per-severity configuration maps
//!
//! [`SeverityMap`] is the typed form every facade operation takes: its keys are
//! [`Severity`] values, so an unknown level name is rejected when the map is
//! built, before any logger is touched.
//!
//! [`LoggingConfig`] is the serializable form, e.g. loaded from JSON:
//!
//! ```
//! use advanced_logging::LoggingConfig;
//!
//! let config = LoggingConfig::from_json_str(r#"{
//!     "log_root": "/tmp/logs",
//!     "files": { "ERROR": "/tmp/logs/err.log", "INFO": "" },
//!     "formats": { "ERROR": "{levelname} {message}" }
//! }"#).unwrap();
//! let (files, formats) = config.validate().unwrap();
//! assert_eq!(files.len(), 2);
//! assert_eq!(formats.len(), 1);
//! ```

use crate::core::{LoggerError, Result, Severity};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Mapping from severity to a value (a path or a format string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityMap<V> {
    entries: BTreeMap<Severity, V>,
}

impl<V> SeverityMap<V> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Build from `(name, value)` pairs; fails on the first unknown name
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries = BTreeMap::new();
        for (name, value) in pairs {
            let severity: Severity = name.as_ref().parse()?;
            entries.insert(severity, value);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn with(mut self, severity: Severity, value: impl Into<V>) -> Self {
        self.entries.insert(severity, value.into());
        self
    }

    pub fn insert(&mut self, severity: Severity, value: V) -> Option<V> {
        self.entries.insert(severity, value)
    }

    pub fn get(&self, severity: Severity) -> Option<&V> {
        self.entries.get(&severity)
    }

    pub fn contains(&self, severity: Severity) -> bool {
        self.entries.contains_key(&severity)
    }

    /// Entries, lowest severity first
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &V)> {
        self.entries.iter().map(|(s, v)| (*s, v))
    }

    /// Severities not present in the map, lowest first
    pub fn missing(&self) -> impl Iterator<Item = Severity> + '_ {
        Severity::ALL
            .into_iter()
            .filter(move |s| !self.entries.contains_key(s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for SeverityMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(Severity, V)> for SeverityMap<V> {
    fn from_iter<I: IntoIterator<Item = (Severity, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<V> TryFrom<HashMap<String, V>> for SeverityMap<V> {
    type Error = LoggerError;

    fn try_from(map: HashMap<String, V>) -> Result<Self> {
        Self::from_pairs(map)
    }
}

/// File-path map. An empty path means "use the default path".
pub type FileMap = SeverityMap<PathBuf>;

/// Format-template map. An empty template means "use the default format".
pub type FormatMap = SeverityMap<String>;

/// Untyped logging configuration as it appears in a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Overrides the `/var/log` root used for default paths
    pub log_root: Option<PathBuf>,
    /// Severity name to file path
    pub files: HashMap<String, PathBuf>,
    /// Severity name to format template
    pub formats: HashMap<String, String>,
}

impl LoggingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every key of both maps, converting them to typed maps
    pub fn validate(&self) -> Result<(FileMap, FormatMap)> {
        let files = SeverityMap::from_pairs(self.files.iter().map(|(k, v)| (k, v.clone())))?;
        let formats = SeverityMap::from_pairs(self.formats.iter().map(|(k, v)| (k, v.clone())))?;
        Ok((files, formats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_accepts_known_names() {
        let map = SeverityMap::from_pairs([("ERROR", "e.log"), ("DEBUG", "d.log")]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(Severity::Error), Some(&"e.log"));
        let keys: Vec<Severity> = map.iter().map(|(s, _)| s).collect();
        assert_eq!(keys, vec![Severity::Debug, Severity::Error]);
    }

    #[test]
    fn test_from_pairs_rejects_unknown_names() {
        let err = SeverityMap::from_pairs([("ERROR", 1), ("FATAL", 2)]).unwrap_err();
        match err {
            LoggerError::InvalidSeverity { name } => assert_eq!(name, "FATAL"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(SeverityMap::from_pairs([("error", 1)]).is_err());
    }

    #[test]
    fn test_missing_lists_unlisted_severities() {
        let map: FileMap = SeverityMap::new().with(Severity::Info, "i.log");
        let missing: Vec<Severity> = map.missing().collect();
        assert_eq!(
            missing,
            vec![Severity::Debug, Severity::Warning, Severity::Error, Severity::Critical]
        );
    }

    #[test]
    fn test_try_from_hash_map() {
        let mut raw = HashMap::new();
        raw.insert("CRITICAL".to_string(), "{message}".to_string());
        let map = FormatMap::try_from(raw).unwrap();
        assert!(map.contains(Severity::Critical));
    }

    #[test]
    fn test_config_validation_reports_bad_key() {
        let config = LoggingConfig::from_json_str(r#"{ "formats": { "TRACE": "{message}" } }"#)
            .unwrap();
        assert!(matches!(
            config.validate(),
            Err(LoggerError::InvalidSeverity { .. })
        ));
    }

    #[test]
    fn test_config_rejects_unknown_sections() {
        let result = LoggingConfig::from_json_str(r#"{ "handlers": {} }"#);
        assert!(matches!(result, Err(LoggerError::ConfigParse(_))));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = LoggingConfig::from_json_str("{}").unwrap();
        let (files, formats) = config.validate().unwrap();
        assert!(files.is_empty());
        assert!(formats.is_empty());
        assert!(config.log_root.is_none());
    }
}
