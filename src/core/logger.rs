//! Named logger handed out to application code

use super::{
    atomic_logger::AtomicLogger,
    field::{normalize_args, Arg, Field},
    log_level::LogLevel,
};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// A named logger obtained from a [`Factory`](crate::Factory).
///
/// The logger holds the factory's slot for its name, not a frozen copy of the
/// configuration, so level, encoder, output and caller changes made on the
/// factory apply to loggers already handed out. Cloning is cheap.
///
/// Arguments to the logging methods are alternating keys and values, ready
/// [`Field`]s, or a single bare value (logged under an empty key):
///
/// ```
/// use rust_log_factory::{args, Factory, LogLevel, MemoryWriter};
///
/// let factory = Factory::new();
/// let memory = MemoryWriter::new();
/// factory.set_output(memory.clone());
/// factory.set_default_level(LogLevel::Info);
///
/// let log = factory.new_logger("http").with(&args!["request_id", "abc"]);
/// log.info("request done", &args!["status", 200]);
///
/// assert!(memory.contents().contains("request_id:abc\tstatus:200"));
/// ```
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    handle: Arc<AtomicLogger>,
    context: Arc<[Field]>,
}

impl Logger {
    pub(crate) fn new(name: Arc<str>, handle: Arc<AtomicLogger>) -> Self {
        Self {
            name,
            handle,
            context: Arc::from(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields added to every record written through this logger
    pub fn context(&self) -> &[Field] {
        &self.context
    }

    /// Current effective level
    pub fn level(&self) -> LogLevel {
        self.handle.load().level()
    }

    /// A child logger carrying extra context; `self` is left unchanged.
    ///
    /// ```
    /// # use rust_log_factory::{args, Factory};
    /// let factory = Factory::new();
    /// let log = factory.new_logger("jobs");
    /// let job_log = log.with(&args!["job_id", 7]);
    /// assert_eq!(job_log.context().len(), 1);
    /// assert!(log.context().is_empty());
    /// ```
    #[must_use]
    pub fn with(&self, args: &[Arg]) -> Logger {
        let added = normalize_args(args);
        if added.is_empty() {
            return self.clone();
        }

        let mut context = Vec::with_capacity(self.context.len() + added.len());
        context.extend_from_slice(&self.context);
        context.extend(added);

        Logger {
            name: Arc::clone(&self.name),
            handle: Arc::clone(&self.handle),
            context: Arc::from(context),
        }
    }

    /// Log at `severity`; the factory's current core decides whether it is written
    #[track_caller]
    pub fn log(&self, severity: LogLevel, message: &str, args: &[Arg]) {
        let core = self.handle.load();
        if !core.enabled(severity) {
            return;
        }
        let fields = self.merge(args);
        core.write(severity, message, &fields, Location::caller());
    }

    /// Alias for [`debug`](Self::debug)
    #[deprecated(since = "0.1.0", note = "use debug")]
    #[track_caller]
    pub fn trace(&self, message: &str, args: &[Arg]) {
        self.log(LogLevel::Debug, message, args);
    }

    #[track_caller]
    pub fn debug(&self, message: &str, args: &[Arg]) {
        self.log(LogLevel::Debug, message, args);
    }

    #[track_caller]
    pub fn info(&self, message: &str, args: &[Arg]) {
        self.log(LogLevel::Info, message, args);
    }

    /// Logs at INF; WARN is an alias of INFO
    #[deprecated(since = "0.1.0", note = "use info")]
    #[track_caller]
    pub fn warn(&self, message: &str, args: &[Arg]) {
        self.log(LogLevel::Info, message, args);
    }

    #[track_caller]
    pub fn error(&self, message: &str, args: &[Arg]) {
        self.log(LogLevel::Error, message, args);
    }

    /// Logs at ERR, then panics with `message`, whether or not the record
    /// was enabled.
    #[deprecated(since = "0.1.0", note = "use error")]
    #[track_caller]
    pub fn fatal(&self, message: &str, args: &[Arg]) -> ! {
        self.log(LogLevel::Error, message, args);
        panic!("{}", message);
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.handle.load().enabled(LogLevel::Debug)
    }

    pub fn is_info_enabled(&self) -> bool {
        self.handle.load().enabled(LogLevel::Info)
    }

    /// Same as [`is_debug_enabled`](Self::is_debug_enabled)
    #[deprecated(since = "0.1.0", note = "use is_debug_enabled")]
    pub fn is_trace_enabled(&self) -> bool {
        self.is_debug_enabled()
    }

    /// Same as [`is_info_enabled`](Self::is_info_enabled)
    #[deprecated(since = "0.1.0", note = "use is_info_enabled")]
    pub fn is_warn_enabled(&self) -> bool {
        self.is_info_enabled()
    }

    /// Context first, then the normalized call-site arguments
    fn merge(&self, args: &[Arg]) -> Vec<Field> {
        let call_site = normalize_args(args);
        if self.context.is_empty() {
            return call_site;
        }
        let mut fields = Vec::with_capacity(self.context.len() + call_site.len());
        fields.extend_from_slice(&self.context);
        fields.extend(call_site);
        fields
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("context", &self.context)
            .finish()
    }
}
