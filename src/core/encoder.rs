//! Encoder trait: turns a record into the bytes written to the output

use super::{error::Result, record::Record, timestamp::TimestampFormat};
use serde::{Deserialize, Serialize};

pub trait Encoder: Send + Sync {
    /// Encode one record, including the trailing newline
    fn encode(&self, record: &Record<'_>) -> Result<Vec<u8>>;
    fn name(&self) -> &str;
}

/// Keys and time format shared by the bundled encoders
///
/// An empty key leaves that element out of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncoderConfig {
    pub time_key: String,
    pub level_key: String,
    pub name_key: String,
    pub message_key: String,
    pub caller_key: String,
    pub timestamp_format: TimestampFormat,
}

impl EncoderConfig {
    /// Settings for machine-read production logs
    pub fn production() -> Self {
        Self {
            time_key: "time".to_string(),
            level_key: "level".to_string(),
            name_key: "name".to_string(),
            message_key: "msg".to_string(),
            caller_key: "caller".to_string(),
            timestamp_format: TimestampFormat::Iso8601,
        }
    }

    /// Settings for a developer's terminal: same keys, shorter timestamps
    pub fn development() -> Self {
        Self {
            timestamp_format: TimestampFormat::Time,
            ..Self::production()
        }
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_differs_only_in_time() {
        let prod = EncoderConfig::production();
        let dev = EncoderConfig::development();
        assert_eq!(prod.message_key, dev.message_key);
        assert_eq!(dev.timestamp_format, TimestampFormat::Time);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let cfg: EncoderConfig = serde_json::from_str(r#"{"messageKey":"message"}"#).unwrap();
        assert_eq!(cfg.message_key, "message");
        assert_eq!(cfg.time_key, "time");
    }
}
