//! # Rust Log Factory
//!
//! Named loggers that can be reconfigured while they are in use.
//!
//! ## Features
//!
//! - **Hot reconfiguration**: level, encoder, output and caller capture can
//!   change at any time; loggers already handed out follow the change
//! - **Per-name levels**: overrides per logger name on top of a shared default
//! - **Level strings**: bulk updates such as `*=INF,http,-sql`
//! - **Structured fields**: key/value context baked into derived loggers
//! - **Lock-free logging path**: reconfiguration never blocks a logging call
//!
//! ```
//! use rust_log_factory::prelude::*;
//! use rust_log_factory::args;
//!
//! let factory = Factory::new();
//! let memory = MemoryWriter::new();
//! factory.set_output(memory.clone());
//!
//! let log = factory.new_logger("http");
//! factory.apply_level_string("*=INF,-http").unwrap();
//! log.info("dropped, http is off", &[]);
//!
//! factory.set_level("http", LogLevel::Debug);
//! log.debug("written", &args!["path", "/health"]);
//! assert_eq!(memory.lines().len(), 1);
//! ```

pub mod core;
pub mod encoders;
pub mod global;
pub mod macros;
pub mod outputs;

pub mod prelude {
    pub use crate::core::{
        Arg, Config, Encoder, EncoderConfig, Factory, FactoryMetrics, Field, FieldValue, LogLevel,
        Logger, LoggerError, OutputRestorer, Record, Result, TimestampFormat,
    };
    pub use crate::encoders::Encoding;
    pub use crate::outputs::{MemoryWriter, Output};
}

pub use crate::core::{
    level_for_abbr, Arg, Config, Encoder, EncoderConfig, Factory, FactoryMetrics, Field,
    FieldValue, LevelSpec, LogLevel, Logger, LoggerError, OutputRestorer, Record, Result,
    TimestampFormat,
};
pub use encoders::{ConsoleEncoder, Encoding, JsonEncoder, LtsvEncoder, TermEncoder};
pub use outputs::{MemoryWriter, Output};
