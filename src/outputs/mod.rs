//! Output sinks
//!
//! An [`Output`] is anything bytes can be written to, shared by every logger
//! of a factory. Writes from concurrent loggers are serialized per output.

pub mod memory;

pub use memory::MemoryWriter;

use crate::core::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

/// A cloneable handle to a shared byte sink
#[derive(Clone)]
pub struct Output {
    name: Arc<str>,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Output {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("custom", writer)
    }

    pub fn named<W: Write + Send + 'static>(name: &str, writer: W) -> Self {
        Self {
            name: Arc::from(name),
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::named("stdout", io::stdout())
    }

    pub fn stderr() -> Self {
        Self::named("stderr", io::stderr())
    }

    /// Append to a file, creating it if needed
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log output",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;
        Ok(Self::named("file", file))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write one encoded record in a single call
    pub fn write_record(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(bytes)?;
        writer.flush()
    }

    /// Whether two handles point at the same sink
    pub fn same_as(&self, other: &Output) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output").field("name", &self.name).finish()
    }
}

impl From<MemoryWriter> for Output {
    fn from(memory: MemoryWriter) -> Self {
        Output::named("memory", memory)
    }
}
