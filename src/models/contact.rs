//! Contact row model produced by the contact directory.

use crate::domain::{lookup_uri, ContactId, ValidationError};
use serde::{Deserialize, Serialize};

/// One row of the contact list.
///
/// Rows are immutable and only live for one render of the list; a new
/// filter produces a fresh set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSummary {
    /// Directory identifier, used to look up phone numbers
    pub id: ContactId,

    /// Stable key, used together with `id` to build the detail-view URI
    pub lookup_key: String,

    /// Name shown in the list and matched by the search filter
    pub display_name: String,
}

impl ContactSummary {
    pub fn new(id: ContactId, lookup_key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id,
            lookup_key: lookup_key.into(),
            display_name: display_name.into(),
        }
    }

    /// Stable URI of this contact's detail view.
    pub fn lookup_uri(&self) -> Result<String, ValidationError> {
        lookup_uri(&self.id, &self.lookup_key)
    }
}
