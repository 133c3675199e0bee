//! Human-readable terminal encoder, optionally colorized
//!
//! ```text
//! [10:30:45.123] [INF] http - request done status=200
//! ```

use super::text_key;
use crate::core::{sanitize_message, Encoder, EncoderConfig, Record, Result};
#[cfg(feature = "console")]
use colored::Colorize;

pub struct TermEncoder {
    config: EncoderConfig,
    use_colors: bool,
}

impl TermEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            use_colors: false,
        }
    }

    /// Colors the level tag; plain output when built without the `console` feature
    pub fn colored(config: EncoderConfig) -> Self {
        Self {
            config,
            use_colors: true,
        }
    }

    fn level_tag(&self, record: &Record<'_>) -> String {
        let tag = record.level.to_str();
        #[cfg(feature = "console")]
        if self.use_colors {
            return tag.color(record.level.color_code()).to_string();
        }
        tag.to_string()
    }
}

impl Encoder for TermEncoder {
    fn encode(&self, record: &Record<'_>) -> Result<Vec<u8>> {
        let mut line = String::with_capacity(128);

        if !self.config.time_key.is_empty() {
            line.push('[');
            line.push_str(&self.config.timestamp_format.format(&record.timestamp)?);
            line.push_str("] ");
        }
        line.push('[');
        line.push_str(&self.level_tag(record));
        line.push_str("] ");
        if !record.name.is_empty() {
            line.push_str(record.name);
            line.push(' ');
        }
        if let Some(caller) = record.caller_string() {
            line.push('(');
            line.push_str(&caller);
            line.push_str(") ");
        }
        line.push_str("- ");
        line.push_str(&sanitize_message(record.message));

        for field in record.fields {
            line.push(' ');
            line.push_str(text_key(&field.key));
            line.push('=');
            line.push_str(&sanitize_message(&field.value.to_string()));
        }

        line.push('\n');
        Ok(line.into_bytes())
    }

    fn name(&self) -> &str {
        if self.use_colors {
            "term-color"
        } else {
            "term"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, LogLevel};

    #[test]
    fn test_term_line() {
        let fields = [Field::new("user_id", 123), Field::new("action", "login")];
        let record = Record::new(LogLevel::Info, "auth", "User logged in", &fields);
        let line =
            String::from_utf8(TermEncoder::new(EncoderConfig::development()).encode(&record).unwrap())
                .unwrap();

        assert!(line.starts_with('['));
        assert!(line.contains("[INF] auth - User logged in user_id=123 action=login"));
    }

    #[test]
    fn test_term_caller() {
        let record = Record::new(LogLevel::Debug, "db", "query", &[])
            .with_caller(std::panic::Location::caller());
        let line =
            String::from_utf8(TermEncoder::new(EncoderConfig::production()).encode(&record).unwrap())
                .unwrap();
        assert!(line.contains("[DBG] db (encoders/term.rs:"));
    }

    #[test]
    fn test_colored_keeps_text() {
        let record = Record::new(LogLevel::Error, "x", "boom", &[]);
        let encoder = TermEncoder::colored(EncoderConfig::production());
        let line = String::from_utf8(encoder.encode(&record).unwrap()).unwrap();
        assert!(line.contains("ERR"));
        assert!(line.contains("x - boom"));
        assert_eq!(encoder.name(), "term-color");
    }
}
