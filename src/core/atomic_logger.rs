//! Atomically swappable slot holding the current core for one logger name

use super::logger_core::LoggerCore;
use arc_swap::{ArcSwap, Guard};
use std::fmt;
use std::sync::Arc;

/// Readers never block and always see a complete [`LoggerCore`]; a slot is
/// created already holding one, so there is no empty state.
///
/// Writers are not coordinated here; the owning factory serializes them.
pub struct AtomicLogger {
    current: ArcSwap<LoggerCore>,
}

impl AtomicLogger {
    pub fn new(core: LoggerCore) -> Self {
        Self {
            current: ArcSwap::from_pointee(core),
        }
    }

    /// Borrow the current core for the duration of one call
    #[inline]
    pub fn load(&self) -> Guard<Arc<LoggerCore>> {
        self.current.load()
    }

    /// Take an owned reference to the current core
    pub fn get(&self) -> Arc<LoggerCore> {
        self.current.load_full()
    }

    /// Publish a new core, replacing the old one for every later reader
    pub fn set(&self, core: LoggerCore) {
        self.current.store(Arc::new(core));
    }
}

impl fmt::Debug for AtomicLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicLogger").field(&*self.load()).finish()
    }
}
