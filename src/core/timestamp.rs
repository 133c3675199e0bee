//! Timestamp rendering for encoders

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How an encoder writes the record time
///
/// Serialized in kebab-case (`"iso8601"`, `"unix-millis"`, ...); a custom
/// strftime pattern is written as `{"custom": "%d/%b/%Y"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,
    /// `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,
    /// `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,
    /// Wall-clock time only, `10:30:45.123`; meant for a developer's terminal
    Time,
    /// Seconds since the epoch
    Unix,
    /// Milliseconds since the epoch
    UnixMillis,
    /// Microseconds since the epoch
    UnixMicros,
    /// Any strftime pattern
    Custom(String),
}

impl TimestampFormat {
    /// Render `datetime`; fails only for a custom pattern chrono cannot format
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let rendered = match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Time => datetime.format("%H:%M:%S%.3f").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::with_capacity(32);
                write!(out, "{}", datetime.format(pattern)).map_err(|_| {
                    LoggerError::formatter(
                        "timestamp",
                        format!("cannot format time with pattern '{}'", pattern),
                    )
                })?;
                out
            }
        };
        Ok(rendered)
    }

    /// JSON rendering: numbers for the epoch formats, strings otherwise
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> Result<serde_json::Value> {
        Ok(match self {
            TimestampFormat::Unix => datetime.timestamp().into(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().into(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().into(),
            _ => serde_json::Value::String(self.format(datetime)?),
        })
    }

    /// Reject custom patterns containing specifiers chrono does not know
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(pattern) = self {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "timestampFormat",
                    format!("'{}' is not a valid strftime pattern", pattern),
                ));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TimestampFormat::Unix | TimestampFormat::UnixMillis | TimestampFormat::UnixMicros
        )
    }
}
