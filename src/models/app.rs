//! Launcher-capable application model.

use serde::{Deserialize, Serialize};

/// An installed application that has a main launcher entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstalledApp {
    /// User-visible label (may be localized or renamed by the vendor)
    pub label: String,

    /// Stable installation identifier
    pub package: String,
}

impl InstalledApp {
    pub fn new(label: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            package: package.into(),
        }
    }
}
