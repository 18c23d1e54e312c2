//! Observability module for monitoring and metrics.
//!
//! Counters live here; log output is configured by the binary through
//! `tracing-subscriber`.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
