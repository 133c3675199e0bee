//! Counters for a factory's loggers
//!
//! Tracks records that reached their output, records lost to encoder or
//! writer failures, and how many times the loggers were rebuilt.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics shared by every logger of one [`Factory`](crate::Factory)
///
/// # Example
///
/// ```
/// use rust_log_factory::FactoryMetrics;
///
/// let metrics = FactoryMetrics::new();
/// metrics.record_written();
/// metrics.record_dropped();
///
/// assert_eq!(metrics.records_written(), 1);
/// assert_eq!(metrics.records_dropped(), 1);
/// ```
#[derive(Debug)]
pub struct FactoryMetrics {
    /// Records encoded and written to the output
    records_written: AtomicU64,

    /// Records lost because encoding or writing failed
    records_dropped: AtomicU64,

    /// Rebuild passes run by the factory
    rebuild_passes: AtomicU64,
}

impl FactoryMetrics {
    pub const fn new() -> Self {
        Self {
            records_written: AtomicU64::new(0),
            records_dropped: AtomicU64::new(0),
            rebuild_passes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_dropped(&self) -> u64 {
        self.records_dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rebuild_passes(&self) -> u64 {
        self.rebuild_passes.load(Ordering::Relaxed)
    }

    /// Returns the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.records_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the previous count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.records_dropped.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn record_rebuild(&self) -> u64 {
        self.rebuild_passes.fetch_add(1, Ordering::Relaxed)
    }

    /// Drop rate as a percentage (0.0 - 100.0), 0.0 before anything was logged
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.records_dropped() as f64;
        let total = self.records_written() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.records_written.store(0, Ordering::Relaxed);
        self.records_dropped.store(0, Ordering::Relaxed);
        self.rebuild_passes.store(0, Ordering::Relaxed);
    }
}

impl Default for FactoryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FactoryMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            records_written: AtomicU64::new(self.records_written()),
            records_dropped: AtomicU64::new(self.records_dropped()),
            rebuild_passes: AtomicU64::new(self.rebuild_passes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = FactoryMetrics::new();
        assert_eq!(metrics.records_written(), 0);
        assert_eq!(metrics.records_dropped(), 0);
        assert_eq!(metrics.rebuild_passes(), 0);
    }

    #[test]
    fn test_record_returns_previous() {
        let metrics = FactoryMetrics::new();
        assert_eq!(metrics.record_dropped(), 0);
        assert_eq!(metrics.record_dropped(), 1);
        assert_eq!(metrics.records_dropped(), 2);
    }

    #[test]
    fn test_drop_rate() {
        let metrics = FactoryMetrics::new();
        assert_eq!(metrics.drop_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_written();
        }
        for _ in 0..10 {
            metrics.record_dropped();
        }
        let rate = metrics.drop_rate();
        assert!((9.9..=10.1).contains(&rate), "Drop rate was {}", rate);
    }

    #[test]
    fn test_reset_and_snapshot() {
        let metrics = FactoryMetrics::new();
        metrics.record_written();
        metrics.record_rebuild();

        let snapshot = metrics.clone();
        metrics.reset();

        assert_eq!(metrics.records_written(), 0);
        assert_eq!(metrics.rebuild_passes(), 0);
        assert_eq!(snapshot.records_written(), 1);
        assert_eq!(snapshot.rebuild_passes(), 1);
    }
}
