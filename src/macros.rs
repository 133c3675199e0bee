//! Macros for building argument lists and formatted messages.
//!
//! # Examples
//!
//! ```
//! use rust_log_factory::prelude::*;
//! use rust_log_factory::{args, fields, info};
//!
//! let factory = Factory::new();
//! let logger = factory.new_logger("server");
//!
//! // Alternating keys and values
//! logger.info("Server started", &args!["port", 8080]);
//!
//! // Explicit key => value pairs
//! logger.info("Request", &fields!["path" => "/", "status" => 200]);
//!
//! // Formatted message, optionally followed by fields
//! let port = 8080;
//! info!(logger, "listening on {}", port);
//! info!(logger, "listening on {}", port; "tls" => true);
//! ```

/// Build a `Vec<Arg>` from bare values and fields.
///
/// ```
/// use rust_log_factory::{args, Arg, Field};
///
/// let list = args!["user", 42, Field::new("ok", true)];
/// assert_eq!(list.len(), 3);
/// assert!(matches!(list[2], Arg::Field(_)));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}

/// Build a `Vec<Arg>` of fields from `key => value` pairs.
///
/// ```
/// use rust_log_factory::{fields, Arg, Field};
///
/// let list = fields!["user" => 42];
/// assert_eq!(list, vec![Arg::Field(Field::new("user", 42))]);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::Field($crate::Field::new($key, $value))),+]
    };
}

/// Log a formatted message at a given level.
///
/// Fields may follow the format arguments after a `;`.
///
/// ```
/// # use rust_log_factory::prelude::*;
/// # let factory = Factory::new();
/// # let logger = factory.new_logger("app");
/// use rust_log_factory::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(logger, LogLevel::Error, "Error code: {}", 500; "retry" => false);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* ; $($key:expr => $value:expr),+ $(,)?) => {
        $logger.log($level, &::std::format!($fmt $(, $arg)*), &$crate::fields![$($key => $value),+])
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, &::std::format!($($arg)+), &[])
    };
}

/// Log a formatted debug-level message.
///
/// ```
/// # use rust_log_factory::prelude::*;
/// # let factory = Factory::new();
/// # let logger = factory.new_logger("app");
/// use rust_log_factory::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a formatted info-level message.
///
/// ```
/// # use rust_log_factory::prelude::*;
/// # let factory = Factory::new();
/// # let logger = factory.new_logger("app");
/// use rust_log_factory::info;
/// info!(logger, "Server listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a formatted error-level message.
///
/// ```
/// # use rust_log_factory::prelude::*;
/// # let factory = Factory::new();
/// # let logger = factory.new_logger("app");
/// use rust_log_factory::error;
/// error!(logger, "Connection failed: {}", "timeout"; "attempt" => 3);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
