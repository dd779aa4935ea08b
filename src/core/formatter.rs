//! Line formatter for log records
//!
//! A [`Formatter`] is built from a template string such as
//! `"[{asctime} - {levelname} - {name}]: {message}"`. The template is parsed once
//! at construction, so an invalid template is reported when a handler is
//! configured rather than when the first record is written.
//!
//! Supported fields:
//!
//! | Field          | Rendered as                                  |
//! |----------------|----------------------------------------------|
//! | `{asctime}`    | record timestamp using the date format       |
//! | `{levelname}`  | `DEBUG`, `INFO`, `WARNING`, `ERROR`, `CRITICAL` |
//! | `{levelno}`    | numeric ordinal (`10` .. `50`)               |
//! | `{name}`       | logger name                                  |
//! | `{message}`    | sanitized message                            |
//! | `{thread}`     | thread name, or thread id when unnamed       |
//! | `{request_id}` | current request id, or `-` outside a request |
//!
//! `{{` and `}}` produce literal braces. Timestamps render in local time.

use super::defaults::DEFAULT_FORMAT;
use super::error::{LoggerError, Result};
use super::log_record::LogRecord;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;

/// Date format used for `{asctime}` unless overridden.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Asctime,
    Levelname,
    Levelno,
    Name,
    Message,
    Thread,
    RequestId,
}

impl Field {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "asctime" => Some(Field::Asctime),
            "levelname" => Some(Field::Levelname),
            "levelno" => Some(Field::Levelno),
            "name" => Some(Field::Name),
            "message" => Some(Field::Message),
            "thread" => Some(Field::Thread),
            "request_id" => Some(Field::RequestId),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

#[derive(Debug, Clone)]
pub struct Formatter {
    template: String,
    segments: Vec<Segment>,
    date_format: String,
    colorize: bool,
}

impl Formatter {
    /// Parse a template. Unknown fields and unbalanced braces are rejected.
    pub fn new(template: &str) -> Result<Self> {
        Ok(Self {
            template: template.to_string(),
            segments: parse_template(template)?,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            colorize: false,
        })
    }

    /// Parse `template`, or fall back to [`DEFAULT_FORMAT`] when it is empty
    pub fn or_default(template: Option<&str>) -> Result<Self> {
        match template {
            Some(t) if !t.is_empty() => Self::new(t),
            _ => Ok(Self::default()),
        }
    }

    /// Set the strftime-compatible format used for `{asctime}`.
    ///
    /// Unknown or incomplete specifiers such as `%Q` are rejected here, so
    /// rendering never has to deal with them.
    pub fn with_date_format(mut self, date_format: &str) -> Result<Self> {
        if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::formatter(
                date_format,
                "invalid strftime date format",
            ));
        }
        self.date_format = date_format.to_string();
        Ok(self)
    }

    /// Colorize `{levelname}` by severity (console feature only)
    #[must_use]
    pub fn with_colors(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Render a record as a single line, without the trailing newline
    pub fn format(&self, record: &LogRecord) -> String {
        let mut out = String::with_capacity(self.template.len() + record.message.len() + 32);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(Field::Asctime) => {
                    // Writing to a String only fails on a bad date format,
                    // which with_date_format rejects
                    let _ = write!(out, "{}", record.timestamp.format(&self.date_format));
                }
                Segment::Field(Field::Levelname) => self.push_level(&mut out, record),
                Segment::Field(Field::Levelno) => {
                    out.push_str(&record.severity.ordinal().to_string())
                }
                Segment::Field(Field::Name) => out.push_str(&record.logger_name),
                Segment::Field(Field::Message) => out.push_str(&record.message),
                Segment::Field(Field::Thread) => out.push_str(record.thread_label()),
                Segment::Field(Field::RequestId) => {
                    out.push_str(record.request_id.as_deref().unwrap_or("-"))
                }
            }
        }
        out
    }

    #[cfg(feature = "console")]
    fn push_level(&self, out: &mut String, record: &LogRecord) {
        use colored::Colorize;
        if self.colorize {
            out.push_str(
                &record
                    .severity
                    .to_str()
                    .color(record.severity.color_code())
                    .to_string(),
            );
        } else {
            out.push_str(record.severity.to_str());
        }
    }

    #[cfg(not(feature = "console"))]
    fn push_level(&self, out: &mut String, record: &LogRecord) {
        out.push_str(record.severity.to_str());
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT).expect("default format template is valid")
    }
}

fn parse_template(template: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => name.push(ch),
                        None => {
                            return Err(LoggerError::formatter(template, "unclosed '{'"));
                        }
                    }
                }
                let field = Field::parse(name.trim()).ok_or_else(|| {
                    LoggerError::formatter(template, format!("unknown field '{}'", name))
                })?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(field));
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err(LoggerError::formatter(template, "unmatched '}'")),
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}
