//! LTSV encoder, the default line encoding
//!
//! Each record is one line of `label:value` pairs separated by tabs:
//!
//! ```text
//! time:2025-01-08T10:30:45.123Z	level:INF	name:http	msg:request done	status:200
//! ```

use super::text_key;
use crate::core::{Encoder, EncoderConfig, Record, Result};

pub struct LtsvEncoder {
    config: EncoderConfig,
}

impl LtsvEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    fn push_pair(line: &mut String, key: &str, value: &str) {
        if key.is_empty() {
            return;
        }
        if !line.is_empty() {
            line.push('\t');
        }
        line.push_str(&escape_label(key));
        line.push(':');
        line.push_str(&escape_value(value));
    }
}

impl Default for LtsvEncoder {
    fn default() -> Self {
        Self::new(EncoderConfig::production())
    }
}

impl Encoder for LtsvEncoder {
    fn encode(&self, record: &Record<'_>) -> Result<Vec<u8>> {
        let cfg = &self.config;
        let mut line = String::with_capacity(128);

        Self::push_pair(
            &mut line,
            &cfg.time_key,
            &cfg.timestamp_format.format(&record.timestamp)?,
        );
        Self::push_pair(&mut line, &cfg.level_key, record.level.to_str());
        if !record.name.is_empty() {
            Self::push_pair(&mut line, &cfg.name_key, record.name);
        }
        if let Some(caller) = record.caller_string() {
            Self::push_pair(&mut line, &cfg.caller_key, &caller);
        }
        Self::push_pair(&mut line, &cfg.message_key, record.message);

        for field in record.fields {
            Self::push_pair(&mut line, text_key(&field.key), &field.value.to_string());
        }

        line.push('\n');
        Ok(line.into_bytes())
    }

    fn name(&self) -> &str {
        "ltsv"
    }
}

/// Labels may not contain the separators
fn escape_label(label: &str) -> String {
    label
        .chars()
        .map(|c| if c == ':' || c.is_whitespace() { '_' } else { c })
        .collect()
}

fn escape_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, LogLevel};

    #[test]
    fn test_ltsv_line() {
        let fields = [Field::new("status", 200), Field::new("", "bare")];
        let record = Record::new(LogLevel::Info, "http", "request done", &fields);
        let line = String::from_utf8(LtsvEncoder::default().encode(&record).unwrap()).unwrap();

        assert!(line.ends_with('\n'));
        let pairs: Vec<&str> = line.trim_end().split('\t').collect();
        assert!(pairs[0].starts_with("time:"));
        assert_eq!(
            &pairs[1..],
            &["level:INF", "name:http", "msg:request done", "status:200", "_:bare"]
        );
    }

    #[test]
    fn test_ltsv_escapes_injection() {
        let record = Record::new(LogLevel::Error, "", "line one\nline two\tx", &[]);
        let line = String::from_utf8(LtsvEncoder::default().encode(&record).unwrap()).unwrap();

        assert_eq!(line.lines().count(), 1);
        assert!(line.contains("msg:line one\\nline two\\tx"));
        assert!(!line.contains("name:"));
    }

    #[test]
    fn test_ltsv_empty_key_omits_element() {
        let config = EncoderConfig {
            time_key: String::new(),
            ..EncoderConfig::production()
        };
        let record = Record::new(LogLevel::Debug, "db", "q", &[]);
        let line = String::from_utf8(LtsvEncoder::new(config).encode(&record).unwrap()).unwrap();
        assert_eq!(line, "level:DBG\tname:db\tmsg:q\n");
    }
}
