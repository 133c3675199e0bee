//! Core logger types and traits

pub mod atomic_logger;
pub mod config;
pub mod encoder;
pub mod error;
pub mod factory;
pub mod field;
pub mod level_enabler;
pub mod level_string;
pub mod log_level;
pub mod logger;
pub mod logger_core;
pub mod metrics;
pub mod record;
pub mod timestamp;

pub use atomic_logger::AtomicLogger;
pub use config::{Config, CONFIG_ENV_VAR};
pub use encoder::{Encoder, EncoderConfig};
pub use error::{LoggerError, Result};
pub use factory::{Factory, OutputRestorer};
pub use field::{normalize_args, Arg, Field, FieldValue};
pub use level_enabler::{AtomicLevel, LevelEnabler};
pub use level_string::{level_for_abbr, LevelSetting, LevelSpec, ResolvedLevels};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use logger_core::LoggerCore;
pub use metrics::FactoryMetrics;
pub use record::{sanitize_message, Record};
pub use timestamp::TimestampFormat;
