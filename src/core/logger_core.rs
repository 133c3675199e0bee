//! The concrete logger built by a factory for one name
//!
//! A `LoggerCore` is immutable: it snapshots the encoder, output and caller
//! setting at build time. Reconfiguration builds a new core and publishes it
//! through the name's [`AtomicLogger`](super::AtomicLogger).

use super::{
    encoder::Encoder, field::Field, level_enabler::LevelEnabler, log_level::LogLevel,
    metrics::FactoryMetrics, record::Record,
};
use crate::outputs::Output;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

pub struct LoggerCore {
    name: Arc<str>,
    enabler: LevelEnabler,
    encoder: Arc<dyn Encoder>,
    output: Output,
    add_caller: bool,
    metrics: Arc<FactoryMetrics>,
}

impl LoggerCore {
    pub fn new(
        name: Arc<str>,
        enabler: LevelEnabler,
        encoder: Arc<dyn Encoder>,
        output: Output,
        add_caller: bool,
        metrics: Arc<FactoryMetrics>,
    ) -> Self {
        Self {
            name,
            enabler,
            encoder,
            output,
            add_caller,
            metrics,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective level; follows the factory default unless overridden
    #[inline]
    pub fn level(&self) -> LogLevel {
        self.enabler.level()
    }

    #[inline]
    pub fn enabled(&self, severity: LogLevel) -> bool {
        self.enabler.enabled(severity)
    }

    pub fn tracks_default(&self) -> bool {
        self.enabler.tracks_default()
    }

    pub fn encoder_name(&self) -> &str {
        self.encoder.name()
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn add_caller(&self) -> bool {
        self.add_caller
    }

    /// Encode and write one record if `severity` is enabled.
    ///
    /// Failures never reach the caller: they are counted and reported on stderr.
    pub fn write(
        &self,
        severity: LogLevel,
        message: &str,
        fields: &[Field],
        caller: &'static Location<'static>,
    ) {
        if !self.enabled(severity) {
            return;
        }

        let mut record = Record::new(severity, &self.name, message, fields);
        if self.add_caller {
            record = record.with_caller(caller);
        }

        let bytes = match self.encoder.encode(&record) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.report_drop(format_args!(
                    "Encoder '{}' failed for logger '{}': {}",
                    self.encoder.name(),
                    self.name,
                    e
                ));
                return;
            }
        };

        match self.output.write_record(&bytes) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => self.report_drop(format_args!(
                "Output '{}' failed for logger '{}': {}",
                self.output.name(),
                self.name,
                e
            )),
        }
    }

    /// Count the drop; alert on the first one and every thousandth after
    fn report_drop(&self, reason: fmt::Arguments<'_>) {
        let dropped = self.metrics.record_dropped();
        if dropped == 0 || (dropped + 1) % 1000 == 0 {
            eprintln!(
                "[LOGGER ERROR] {} ({} records dropped so far)",
                reason,
                dropped + 1
            );
        }
    }
}

impl fmt::Debug for LoggerCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerCore")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("encoder", &self.encoder.name())
            .field("output", &self.output)
            .field("add_caller", &self.add_caller)
            .finish()
    }
}
