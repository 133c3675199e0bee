//! Serializable configuration for a whole factory
//!
//! Useful when logging is configured from an environment variable or a file.
//! All keys are optional:
//!
//! ```json
//! {
//!   "level": "INF",
//!   "levels": "http=DBG,-sql",
//!   "encoding": "json",
//!   "encoderConfig": { "messageKey": "message" },
//!   "development": false,
//!   "addCaller": true
//! }
//! ```

use super::{encoder::EncoderConfig, error::Result, log_level::LogLevel};
use serde::{Deserialize, Serialize};

/// Environment variable read by [`Config::from_env`]
pub const CONFIG_ENV_VAR: &str = "LOG_CONFIG";

/// The default value describes a production logger: INF, LTSV, no caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Default level, before any `*` entry in `levels`
    #[serde(rename = "level")]
    pub default_level: LogLevel,

    /// Level string applied after the default level
    pub levels: String,

    /// `json`, `ltsv`, `term`, `term-color` or `console`. Empty picks
    /// `term-color` in development and `ltsv` otherwise.
    pub encoding: String,

    /// Overrides the development/production encoder settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoder_config: Option<EncoderConfig>,

    /// Development defaults: colored terminal output and caller capture
    pub development: bool,

    /// Explicit caller capture; falls back to `development` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_caller: Option<bool>,
}

impl Config {
    /// Development preset
    pub fn development() -> Self {
        Self {
            default_level: LogLevel::Debug,
            development: true,
            ..Self::default()
        }
    }

    /// Interpret an environment value: JSON when it starts with `{`,
    /// otherwise a bare level string.
    pub fn from_env_value(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.starts_with('{') {
            Ok(serde_json::from_str(trimmed)?)
        } else {
            Ok(Self {
                levels: trimmed.to_string(),
                ..Self::default()
            })
        }
    }

    /// Read [`CONFIG_ENV_VAR`]; `Ok(None)` when it is unset or empty
    pub fn from_env() -> Result<Option<Self>> {
        Self::from_env_var(CONFIG_ENV_VAR)
    }

    pub fn from_env_var(name: &str) -> Result<Option<Self>> {
        match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => Self::from_env_value(&value).map(Some),
            _ => Ok(None),
        }
    }
}
