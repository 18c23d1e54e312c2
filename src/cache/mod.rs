//! Caching utilities.
//!
//! A generic time-based cache, used to avoid re-enumerating installed apps
//! on every chat.

pub mod timed_cache;

pub use timed_cache::TimedCache;
