//! JSON encoder for structured logging
//!
//! Writes each record as a single-line JSON object (JSONL), which log
//! aggregation tools like ELK or Loki ingest directly.

use crate::core::{Encoder, EncoderConfig, Record, Result};
use serde_json::{Map, Value};

pub struct JsonEncoder {
    config: EncoderConfig,
}

impl JsonEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    fn insert(object: &mut Map<String, Value>, key: &str, value: Value) {
        if !key.is_empty() {
            object.insert(key.to_string(), value);
        }
    }
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new(EncoderConfig::production())
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, record: &Record<'_>) -> Result<Vec<u8>> {
        let cfg = &self.config;
        let mut object = Map::new();

        Self::insert(
            &mut object,
            &cfg.time_key,
            cfg.timestamp_format.to_json_value(&record.timestamp)?,
        );
        Self::insert(&mut object, &cfg.level_key, record.level.to_str().into());
        if !record.name.is_empty() {
            Self::insert(&mut object, &cfg.name_key, record.name.into());
        }
        if let Some(caller) = record.caller_string() {
            Self::insert(&mut object, &cfg.caller_key, caller.into());
        }
        Self::insert(&mut object, &cfg.message_key, record.message.into());

        // Fields may shadow the reserved keys; the later value wins
        for field in record.fields {
            object.insert(field.key.clone(), field.value.to_json_value());
        }

        let mut bytes = serde_json::to_vec(&Value::Object(object))?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn name(&self) -> &str {
        "json"
    }
}
