//! Configuration management for the Contact Gateway MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honoured if present; `dotenvy` never writes to stdout, which MCP
//! uses for communication.

use crate::error::{ConfigError, ConfigResult};
use std::collections::BTreeMap;
use std::env;

/// Built-in package → label table for apps whose label cannot be read over adb.
const BUILTIN_APP_LABELS: &[(&str, &str)] = &[
    ("com.whatsapp", "WhatsApp"),
    ("com.whatsapp.w4b", "WhatsApp Business"),
];

/// Configuration for the Contact Gateway MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the adb executable (default: "adb", resolved through PATH)
    pub adb_path: String,

    /// Serial of the device to target; `None` lets adb pick the only device
    pub adb_serial: Option<String>,

    /// Per-command adb timeout in seconds (default: 10)
    pub adb_timeout_secs: u64,

    /// Country code prepended to numbers dialled with a trunk prefix (default: "31")
    pub default_country_code: String,

    /// User-visible label of the messaging app (default: "WhatsApp")
    pub messaging_app_label: String,

    /// Stable package identifier of the messaging app, preferred over the label
    pub messaging_app_package: Option<String>,

    /// Package → label table used by the adb app registry
    pub app_labels: BTreeMap<String, String>,

    /// How long a resolved messaging app stays cached, in seconds (default: 0, off)
    pub app_cache_ttl_secs: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `ADB_PATH`: adb executable (default: "adb")
    /// - `ADB_SERIAL`: device serial passed as `adb -s`
    /// - `ADB_TIMEOUT_SECONDS`: per-command timeout (default: 10, must be > 0)
    /// - `DEFAULT_COUNTRY_CODE`: digits only (default: "31")
    /// - `MESSAGING_APP_LABEL`: launcher label to look for (default: "WhatsApp")
    /// - `MESSAGING_APP_PACKAGE`: package id to look for first
    /// - `APP_LABELS`: `pkg=Label,pkg=Label`, merged over the built-in table
    /// - `APP_CACHE_TTL_SECONDS`: resolver cache TTL (default: 0, checked on every chat)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let adb_path = Self::non_empty_var("ADB_PATH").unwrap_or(defaults.adb_path);
        let adb_serial = Self::non_empty_var("ADB_SERIAL");

        let adb_timeout_secs = Self::parse_env_u64("ADB_TIMEOUT_SECONDS", defaults.adb_timeout_secs)?;
        if adb_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADB_TIMEOUT_SECONDS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let default_country_code = Self::non_empty_var("DEFAULT_COUNTRY_CODE")
            .unwrap_or(defaults.default_country_code);
        if !default_country_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                var: "DEFAULT_COUNTRY_CODE".to_string(),
                reason: format!("Must contain only digits, got: {}", default_country_code),
            });
        }

        let messaging_app_label =
            Self::non_empty_var("MESSAGING_APP_LABEL").unwrap_or(defaults.messaging_app_label);
        let messaging_app_package = Self::non_empty_var("MESSAGING_APP_PACKAGE");

        let mut app_labels = defaults.app_labels;
        if let Some(raw) = Self::non_empty_var("APP_LABELS") {
            app_labels.extend(Self::parse_app_labels(&raw)?);
        }

        let app_cache_ttl_secs =
            Self::parse_env_u64("APP_CACHE_TTL_SECONDS", defaults.app_cache_ttl_secs)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            adb_path,
            adb_serial,
            adb_timeout_secs,
            default_country_code,
            messaging_app_label,
            messaging_app_package,
            app_labels,
            app_cache_ttl_secs,
            log_level,
        })
    }

    /// Read an environment variable, treating blank values as unset.
    fn non_empty_var(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse `pkg=Label,pkg=Label` into a package → label table.
    fn parse_app_labels(raw: &str) -> ConfigResult<BTreeMap<String, String>> {
        let mut labels = BTreeMap::new();

        for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (package, label) = pair
                .split_once('=')
                .map(|(p, l)| (p.trim(), l.trim()))
                .filter(|(p, l)| !p.is_empty() && !l.is_empty())
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: "APP_LABELS".to_string(),
                    reason: format!("Expected package=Label, got: {}", pair),
                })?;
            labels.insert(package.to_string(), label.to_string());
        }

        Ok(labels)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            adb_path: "adb".to_string(),
            adb_serial: None,
            adb_timeout_secs: 10,
            default_country_code: "31".to_string(),
            messaging_app_label: "WhatsApp".to_string(),
            messaging_app_package: None,
            app_labels: BUILTIN_APP_LABELS
                .iter()
                .map(|(p, l)| (p.to_string(), l.to_string()))
                .collect(),
            app_cache_ttl_secs: 0,
            log_level: "error".to_string(),
        }
    }
}
