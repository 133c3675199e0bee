//! Level enablers: a fixed per-name override or the live shared default

use super::log_level::LogLevel;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// A level that can be read and replaced without locking
pub struct AtomicLevel(AtomicU8);

impl AtomicLevel {
    pub const fn new(level: LogLevel) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    #[inline]
    pub fn get(&self) -> LogLevel {
        LogLevel::from_u8(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, level: LogLevel) {
        self.0.store(level as u8, Ordering::Release);
    }
}

impl Default for AtomicLevel {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl fmt::Debug for AtomicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicLevel").field(&self.get()).finish()
    }
}

/// Answers "is this severity enabled" for one logger
#[derive(Debug, Clone)]
pub enum LevelEnabler {
    /// A per-name override
    Fixed(LogLevel),
    /// Tracks the factory default; changes to it are seen immediately
    Default(Arc<AtomicLevel>),
}

impl LevelEnabler {
    /// Effective threshold right now
    #[inline]
    pub fn level(&self) -> LogLevel {
        match self {
            LevelEnabler::Fixed(level) => *level,
            LevelEnabler::Default(shared) => shared.get(),
        }
    }

    #[inline]
    pub fn enabled(&self, severity: LogLevel) -> bool {
        self.level().enables(severity)
    }

    /// Whether this enabler follows the shared default
    pub fn tracks_default(&self) -> bool {
        matches!(self, LevelEnabler::Default(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_level_set_get() {
        let level = AtomicLevel::new(LogLevel::Off);
        assert_eq!(level.get(), LogLevel::Off);
        level.set(LogLevel::Debug);
        assert_eq!(level.get(), LogLevel::Debug);
    }

    #[test]
    fn test_default_enabler_is_live() {
        let shared = Arc::new(AtomicLevel::new(LogLevel::Off));
        let enabler = LevelEnabler::Default(Arc::clone(&shared));
        assert!(!enabler.enabled(LogLevel::Error));

        shared.set(LogLevel::Info);
        assert!(enabler.enabled(LogLevel::Info));
        assert!(!enabler.enabled(LogLevel::Debug));
        assert!(enabler.tracks_default());
    }

    #[test]
    fn test_fixed_enabler_ignores_default() {
        let enabler = LevelEnabler::Fixed(LogLevel::Error);
        assert!(enabler.enabled(LogLevel::Error));
        assert!(!enabler.enabled(LogLevel::Info));
        assert!(!enabler.tracks_default());
    }
}
