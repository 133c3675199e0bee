//! Process-wide default factory
//!
//! Meant for the outermost layer of an application (`main`, test setup).
//! Library code should take a `&Factory` so callers decide which registry it
//! logs through.
//!
//! ```
//! use rust_log_factory::global;
//!
//! let log = global::new_logger("startup");
//! global::apply_level_string("*=INF").unwrap();
//! assert!(log.is_info_enabled());
//! ```

use crate::core::{Config, Encoder, Factory, LogLevel, Logger, OutputRestorer, Result};
use crate::outputs::Output;
use once_cell::sync::Lazy;

static DEFAULT_FACTORY: Lazy<Factory> = Lazy::new(Factory::new);

/// The default factory itself
pub fn factory() -> &'static Factory {
    &DEFAULT_FACTORY
}

pub fn new_logger(name: &str) -> Logger {
    DEFAULT_FACTORY.new_logger(name)
}

pub fn set_level(name: &str, level: LogLevel) {
    DEFAULT_FACTORY.set_level(name, level);
}

pub fn set_default_level(level: LogLevel) {
    DEFAULT_FACTORY.set_default_level(level);
}

pub fn set_encoder<E: Encoder + 'static>(encoder: E) {
    DEFAULT_FACTORY.set_encoder(encoder);
}

pub fn set_output(output: impl Into<Output>) -> OutputRestorer {
    DEFAULT_FACTORY.set_output(output)
}

pub fn set_caller_capture(enabled: bool) {
    DEFAULT_FACTORY.set_caller_capture(enabled);
}

pub fn apply_level_string(spec: &str) -> Result<()> {
    DEFAULT_FACTORY.apply_level_string(spec)
}

pub fn apply_structured_config(config: &Config) -> Result<()> {
    DEFAULT_FACTORY.apply_structured_config(config)
}

/// Configure the default factory from `LOG_CONFIG`, if it is set.
///
/// Returns whether a configuration was found.
pub fn configure_from_env() -> Result<bool> {
    match Config::from_env()? {
        Some(config) => {
            DEFAULT_FACTORY.apply_structured_config(&config)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
