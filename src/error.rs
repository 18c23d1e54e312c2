//! Error types for the Contact Gateway MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Note that "not found" outcomes (no phone number, no messaging app, contact not in
//! the current list) are not errors; they are modelled as outcome values by the
//! service layer.

use thiserror::Error;

/// Errors that can occur when talking to the device through a collaborator.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The adb executable could not be started
    #[error("adb not available: {0}")]
    AdbUnavailable(String),

    /// adb ran but reported a failure
    #[error("adb command failed (exit {status}): {message}")]
    CommandFailed { status: i32, message: String },

    /// adb did not finish within the configured timeout
    #[error("adb command timed out after {0} seconds")]
    Timeout(u64),

    /// Output from the device could not be interpreted
    #[error("Unexpected device output: {0}")]
    Parse(String),

    /// IO error while spawning or reading the child process
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic collaborator error with context
    #[error("Gateway error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with GatewayError
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
