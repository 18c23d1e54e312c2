//! Gateway metrics tracking.
//!
//! Counters for device round trips and user-visible outcomes, each update
//! mirrored as a `tracing` event.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker shared by the adb client and the services.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    adb_commands_total: Arc<AtomicU64>,
    adb_errors_total: Arc<AtomicU64>,
    cache_hits_total: Arc<AtomicU64>,
    cache_misses_total: Arc<AtomicU64>,
    chats_launched_total: Arc<AtomicU64>,
    not_found_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            adb_commands_total: Arc::new(AtomicU64::new(0)),
            adb_errors_total: Arc::new(AtomicU64::new(0)),
            cache_hits_total: Arc::new(AtomicU64::new(0)),
            cache_misses_total: Arc::new(AtomicU64::new(0)),
            chats_launched_total: Arc::new(AtomicU64::new(0)),
            not_found_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track one adb invocation.
    pub fn track_adb_command(&self, command: &str, duration_ms: u128, success: bool) {
        self.adb_commands_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.adb_errors_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            command = %command,
            duration_ms = duration_ms,
            success = success,
            "adb command completed"
        );
    }

    /// Track a cache access.
    pub fn track_cache_access(&self, cache_type: &str, hit: bool) {
        if hit {
            self.cache_hits_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(cache_type = %cache_type, "Cache hit");
        } else {
            self.cache_misses_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(cache_type = %cache_type, "Cache miss");
        }
    }

    /// Track a chat handed to the messaging app.
    pub fn track_chat_launched(&self, package: &str) {
        self.chats_launched_total.fetch_add(1, Ordering::Relaxed);
        tracing::info!(package = %package, "Chat launched");
    }

    /// Track a benign "not found" outcome shown to the user.
    pub fn track_not_found(&self, what: &str) {
        self.not_found_total.fetch_add(1, Ordering::Relaxed);
        tracing::info!(what = %what, "Nothing found");
    }

    pub fn adb_commands_total(&self) -> u64 {
        self.adb_commands_total.load(Ordering::Relaxed)
    }

    pub fn adb_errors_total(&self) -> u64 {
        self.adb_errors_total.load(Ordering::Relaxed)
    }

    pub fn cache_hits_total(&self) -> u64 {
        self.cache_hits_total.load(Ordering::Relaxed)
    }

    pub fn cache_misses_total(&self) -> u64 {
        self.cache_misses_total.load(Ordering::Relaxed)
    }

    pub fn chats_launched_total(&self) -> u64 {
        self.chats_launched_total.load(Ordering::Relaxed)
    }

    pub fn not_found_total(&self) -> u64 {
        self.not_found_total.load(Ordering::Relaxed)
    }

    /// Get the cache hit rate (0.0 to 1.0).
    pub fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits_total() as f64;
        let total = (self.cache_hits_total() + self.cache_misses_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }

    /// Get the adb error rate (0.0 to 1.0).
    pub fn adb_error_rate(&self) -> f64 {
        let errors = self.adb_errors_total() as f64;
        let total = self.adb_commands_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            errors / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             adb Commands: {}\n\
             adb Errors: {} ({:.2}% error rate)\n\
             Cache Hits: {}\n\
             Cache Misses: {}\n\
             Chats Launched: {}\n\
             Not Found: {}",
            self.adb_commands_total(),
            self.adb_errors_total(),
            self.adb_error_rate() * 100.0,
            self.cache_hits_total(),
            self.cache_misses_total(),
            self.chats_launched_total(),
            self.not_found_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}
