//! Log record handed to encoders

use super::field::Field;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::panic::Location;

/// One log event, borrowed from the logging call that produced it
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub level: LogLevel,
    /// Name of the logger the record was written through
    pub name: &'a str,
    pub message: &'a str,
    pub timestamp: DateTime<Utc>,
    /// Call site, present only when caller capture is on
    pub caller: Option<&'static Location<'static>>,
    /// Baked-in context first, then call-site fields
    pub fields: &'a [Field],
}

impl<'a> Record<'a> {
    pub fn new(level: LogLevel, name: &'a str, message: &'a str, fields: &'a [Field]) -> Self {
        Self {
            level,
            name,
            message,
            timestamp: Utc::now(),
            caller: None,
            fields,
        }
    }

    pub fn with_caller(mut self, caller: &'static Location<'static>) -> Self {
        self.caller = Some(caller);
        self
    }

    /// `file:line` of the call site, if captured
    pub fn caller_string(&self) -> Option<String> {
        self.caller
            .map(|location| format!("{}:{}", short_path(location.file()), location.line()))
    }
}

/// Keep the last two path segments, `src/main.rs` rather than the full path
fn short_path(file: &str) -> &str {
    let mut separators = file.rmatch_indices(|c: char| c == '/' || c == '\\');
    match (separators.next(), separators.next()) {
        (Some(_), Some((idx, _))) => &file[idx + 1..],
        _ => file,
    }
}

/// Escape characters that would let a message forge extra log lines
pub fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path() {
        assert_eq!(short_path("/home/app/src/main.rs"), "src/main.rs");
        assert_eq!(short_path("src/main.rs"), "src/main.rs");
        assert_eq!(short_path("main.rs"), "main.rs");
    }

    #[test]
    fn test_caller_string() {
        let record = Record::new(LogLevel::Info, "app", "hi", &[]);
        assert!(record.caller_string().is_none());

        let record = record.with_caller(Location::caller());
        let caller = record.caller_string().unwrap();
        assert!(caller.contains("record.rs:"));
    }

    #[test]
    fn test_sanitize_message() {
        assert_eq!(sanitize_message("a\nb\tc\rd"), "a\\nb\\tc\\rd");
    }
}
