//! Logger factory: the registry of named loggers and their shared settings
//!
//! Every name gets exactly one [`AtomicLogger`] slot. Changing a shared setting
//! (level, encoder, output, caller capture) rebuilds the [`LoggerCore`] of
//! every registered name and publishes it into that name's slot, so loggers
//! that were handed out earlier pick the change up on their next call.
//!
//! Reads (logging calls) never take the factory lock. Writes are serialized
//! by one mutex; a rebuild swaps slots one at a time, so a concurrent reader
//! may see one name already updated and another not yet.

use super::{
    atomic_logger::AtomicLogger,
    config::Config,
    encoder::{Encoder, EncoderConfig},
    error::{LoggerError, Result},
    level_enabler::{AtomicLevel, LevelEnabler},
    level_string::{LevelSpec, ResolvedLevels},
    log_level::LogLevel,
    logger::Logger,
    logger_core::LoggerCore,
    metrics::FactoryMetrics,
};
use crate::encoders::{Encoding, LtsvEncoder};
use crate::outputs::Output;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Spawns named loggers and reconfigures all of them at runtime.
///
/// A new factory has every logger turned off (default level `OFF`), writes
/// LTSV to stdout and does not capture callers. Cloning a factory yields
/// another handle to the same registry.
///
/// # Example
///
/// ```
/// use rust_log_factory::{Factory, MemoryWriter};
///
/// let factory = Factory::new();
/// let memory = MemoryWriter::new();
/// factory.set_output(memory.clone());
///
/// let log = factory.new_logger("sql");
/// log.info("not written, everything is off", &[]);
///
/// factory.apply_level_string("*=INF").unwrap();
/// log.info("written", &[]);
///
/// assert_eq!(memory.lines().len(), 1);
/// ```
#[derive(Clone)]
pub struct Factory {
    shared: Arc<Shared>,
}

struct Shared {
    default_level: Arc<AtomicLevel>,
    metrics: Arc<FactoryMetrics>,
    fallback_encoder: Arc<dyn Encoder>,
    fallback_output: Output,
    state: Mutex<State>,
}

struct State {
    encoder: Option<Arc<dyn Encoder>>,
    output: Option<Output>,
    add_caller: bool,
    /// Per-name overrides; may name loggers that do not exist yet
    levels: HashMap<String, LogLevel>,
    loggers: HashMap<String, Entry>,
}

struct Entry {
    name: Arc<str>,
    handle: Arc<AtomicLogger>,
}

impl Factory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                default_level: Arc::new(AtomicLevel::new(LogLevel::Off)),
                metrics: Arc::new(FactoryMetrics::new()),
                fallback_encoder: Arc::new(LtsvEncoder::new(EncoderConfig::production())),
                fallback_output: Output::stdout(),
                state: Mutex::new(State {
                    encoder: None,
                    output: None,
                    add_caller: false,
                    levels: HashMap::new(),
                    loggers: HashMap::new(),
                }),
            }),
        }
    }

    /// The logger for `name`, registering it on first use.
    ///
    /// Every logger returned for the same name shares one slot.
    pub fn new_logger(&self, name: &str) -> Logger {
        let mut state = self.shared.state.lock();
        let entry = self.shared.get_or_create(&mut state, name);
        Logger::new(Arc::clone(&entry.name), Arc::clone(&entry.handle))
    }

    /// Override the level of one name, now or whenever it is created
    pub fn set_level(&self, name: &str, level: LogLevel) {
        let mut state = self.shared.state.lock();
        state.levels.insert(name.to_string(), level);
        self.shared.refresh(&state);
    }

    /// Level used by every name without an override
    pub fn set_default_level(&self, level: LogLevel) {
        let state = self.shared.state.lock();
        self.shared.default_level.set(level);
        self.shared.refresh(&state);
    }

    pub fn set_encoder<E: Encoder + 'static>(&self, encoder: E) {
        self.set_shared_encoder(Arc::new(encoder));
    }

    /// Like [`set_encoder`](Self::set_encoder) for an encoder that is already shared
    pub fn set_shared_encoder(&self, encoder: Arc<dyn Encoder>) {
        let mut state = self.shared.state.lock();
        state.encoder = Some(encoder);
        self.shared.refresh(&state);
    }

    /// Send every logger's output to `output`.
    ///
    /// The returned restorer puts back the output that was active just before
    /// this call, regardless of what else changed in between.
    pub fn set_output(&self, output: impl Into<Output>) -> OutputRestorer {
        let prior = self.shared.replace_output(Some(output.into()));
        OutputRestorer {
            shared: Arc::clone(&self.shared),
            prior,
        }
    }

    /// Add the `file:line` of the logging call to every record
    pub fn set_caller_capture(&self, enabled: bool) {
        let mut state = self.shared.state.lock();
        state.add_caller = enabled;
        self.shared.refresh(&state);
    }

    /// Reconfigure levels from a level string such as `*=INF,http,-sql`.
    ///
    /// `*` sets the default. Every existing override not named in the string
    /// is cleared, so those loggers track the default again. Deprecated and
    /// unknown abbreviations do not stop the rest from being applied; their
    /// notes come back together as [`LoggerError::LevelString`].
    pub fn apply_level_string(&self, spec: &str) -> Result<()> {
        let resolved = LevelSpec::parse(spec).resolve();
        let mut state = self.shared.state.lock();
        let notes = self.shared.apply_levels(&mut state, resolved);
        self.shared.refresh(&state);
        into_result(notes)
    }

    /// Apply a whole [`Config`] as one change.
    ///
    /// An unknown encoding or an invalid custom timestamp pattern fails
    /// before anything is changed. Level-string notes are returned after the
    /// rest of the configuration is applied.
    pub fn apply_structured_config(&self, config: &Config) -> Result<()> {
        let encoding = Encoding::resolve(&config.encoding, config.development)?;
        let encoder_config = config.encoder_config.clone().unwrap_or_else(|| {
            if config.development {
                EncoderConfig::development()
            } else {
                EncoderConfig::production()
            }
        });
        encoder_config.timestamp_format.validate()?;
        let encoder = encoding.build(encoder_config);
        let add_caller = config.add_caller.unwrap_or(config.development);
        let resolved = LevelSpec::parse(&config.levels).resolve();

        let mut state = self.shared.state.lock();
        self.shared.default_level.set(config.default_level);
        let notes = self.shared.apply_levels(&mut state, resolved);
        state.encoder = Some(encoder);
        state.add_caller = add_caller;
        self.shared.refresh(&state);
        into_result(notes)
    }

    pub fn default_level(&self) -> LogLevel {
        self.shared.default_level.get()
    }

    /// Level in force for `name`: its override, or the default
    pub fn effective_level(&self, name: &str) -> LogLevel {
        let state = self.shared.state.lock();
        state
            .levels
            .get(name)
            .copied()
            .unwrap_or_else(|| self.shared.default_level.get())
    }

    /// Override set for `name`, if any
    pub fn level_override(&self, name: &str) -> Option<LogLevel> {
        self.shared.state.lock().levels.get(name).copied()
    }

    /// Registered logger names, sorted
    pub fn logger_names(&self) -> Vec<String> {
        let state = self.shared.state.lock();
        let mut names: Vec<String> = state.loggers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn caller_capture(&self) -> bool {
        self.shared.state.lock().add_caller
    }

    /// Name of the encoder currently in use
    pub fn encoder_name(&self) -> String {
        let state = self.shared.state.lock();
        self.shared.encoder(&state).name().to_string()
    }

    /// Output currently in use
    pub fn output(&self) -> Output {
        let state = self.shared.state.lock();
        self.shared.output(&state)
    }

    pub fn metrics(&self) -> &FactoryMetrics {
        &self.shared.metrics
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Factory")
            .field("default_level", &self.shared.default_level.get())
            .field("encoder", &self.shared.encoder(&state).name())
            .field("output", &self.shared.output(&state))
            .field("add_caller", &state.add_caller)
            .field("levels", &state.levels)
            .field("loggers", &state.loggers.len())
            .finish()
    }
}

impl Shared {
    fn encoder(&self, state: &State) -> Arc<dyn Encoder> {
        state
            .encoder
            .clone()
            .unwrap_or_else(|| Arc::clone(&self.fallback_encoder))
    }

    fn output(&self, state: &State) -> Output {
        state
            .output
            .clone()
            .unwrap_or_else(|| self.fallback_output.clone())
    }

    fn enabler(&self, state: &State, name: &str) -> LevelEnabler {
        match state.levels.get(name) {
            Some(level) => LevelEnabler::Fixed(*level),
            None => LevelEnabler::Default(Arc::clone(&self.default_level)),
        }
    }

    fn build(&self, state: &State, name: &Arc<str>) -> LoggerCore {
        LoggerCore::new(
            Arc::clone(name),
            self.enabler(state, name),
            self.encoder(state),
            self.output(state),
            state.add_caller,
            Arc::clone(&self.metrics),
        )
    }

    fn get_or_create<'s>(&self, state: &'s mut State, name: &str) -> &'s Entry {
        if !state.loggers.contains_key(name) {
            let name: Arc<str> = Arc::from(name);
            // the slot is filled before anyone can read it
            let handle = Arc::new(AtomicLogger::new(self.build(state, &name)));
            state
                .loggers
                .insert(name.to_string(), Entry { name, handle });
        }
        &state.loggers[name]
    }

    /// Rebuild pass: publish a fresh core for every registered name
    fn refresh(&self, state: &State) {
        for entry in state.loggers.values() {
            entry.handle.set(self.build(state, &entry.name));
        }
        self.metrics.record_rebuild();
    }

    /// Apply resolved levels without rebuilding; returns the notes
    fn apply_levels(&self, state: &mut State, resolved: ResolvedLevels) -> Vec<String> {
        if let Some(level) = resolved.default {
            self.default_level.set(level);
        }
        state
            .levels
            .retain(|name, _| resolved.loggers.contains_key(name));
        state.levels.extend(resolved.loggers);
        resolved.notes
    }

    fn replace_output(&self, output: Option<Output>) -> Option<Output> {
        let mut state = self.state.lock();
        let prior = std::mem::replace(&mut state.output, output);
        self.refresh(&state);
        prior
    }
}

fn into_result(notes: Vec<String>) -> Result<()> {
    if notes.is_empty() {
        Ok(())
    } else {
        Err(LoggerError::level_string(notes))
    }
}

/// Returned by [`Factory::set_output`]; puts the previous output back
pub struct OutputRestorer {
    shared: Arc<Shared>,
    prior: Option<Output>,
}

impl OutputRestorer {
    /// Reinstate the output captured when the restorer was made.
    /// Calling it again re-applies the same output.
    pub fn restore(&self) {
        self.shared.replace_output(self.prior.clone());
    }
}

impl fmt::Debug for OutputRestorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputRestorer")
            .field("prior", &self.prior)
            .finish()
    }
}
