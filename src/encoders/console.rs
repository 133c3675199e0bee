//! Tab-separated console encoder
//!
//! Columns are time, level, name, caller and message; the fields follow as a
//! single JSON object:
//!
//! ```text
//! 2025-01-08T10:30:45.123Z	INF	http	request done	{"status":200}
//! ```

use crate::core::{sanitize_message, Encoder, EncoderConfig, Record, Result};
use serde_json::{Map, Value};

pub struct ConsoleEncoder {
    config: EncoderConfig,
}

impl ConsoleEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }
}

impl Encoder for ConsoleEncoder {
    fn encode(&self, record: &Record<'_>) -> Result<Vec<u8>> {
        let cfg = &self.config;
        let mut columns: Vec<String> = Vec::with_capacity(6);

        if !cfg.time_key.is_empty() {
            columns.push(cfg.timestamp_format.format(&record.timestamp)?);
        }
        if !cfg.level_key.is_empty() {
            columns.push(record.level.to_str().to_string());
        }
        if !cfg.name_key.is_empty() && !record.name.is_empty() {
            columns.push(record.name.to_string());
        }
        if let Some(caller) = record.caller_string() {
            columns.push(caller);
        }
        columns.push(sanitize_message(record.message));

        if !record.fields.is_empty() {
            let fields: Map<String, Value> = record
                .fields
                .iter()
                .map(|field| (field.key.clone(), field.value.to_json_value()))
                .collect();
            columns.push(serde_json::to_string(&fields)?);
        }

        let mut line = columns.join("\t");
        line.push('\n');
        Ok(line.into_bytes())
    }

    fn name(&self) -> &str {
        "console"
    }
}
