//! ContactId value object and contact lookup URIs.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Base of the contacts provider lookup URIs.
const CONTACT_LOOKUP_BASE: &str = "content://com.android.contacts/contacts/lookup";

/// A type-safe wrapper for contact IDs.
///
/// This ensures that contact IDs are validated at construction time
/// and cannot be empty. Surrounding whitespace is trimmed.
///
/// # Example
///
/// ```
/// use contact_gateway_mcp::domain::ContactId;
///
/// let id = ContactId::new("42").unwrap();
/// assert_eq!(id.as_str(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    /// Create a new ContactId, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if trimmed.len() == id.len() {
            Ok(Self(id))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Build the stable lookup URI that opens a contact's detail view.
///
/// The lookup key survives contact aggregation changes, the id is a hint
/// for a fast path. The key is percent-encoded as a single path segment.
///
/// # Example
///
/// ```
/// use contact_gateway_mcp::domain::{lookup_uri, ContactId};
///
/// let id = ContactId::new("42").unwrap();
/// assert_eq!(
///     lookup_uri(&id, "0r42-ABC").unwrap(),
///     "content://com.android.contacts/contacts/lookup/0r42-ABC/42"
/// );
/// ```
pub fn lookup_uri(id: &ContactId, lookup_key: &str) -> Result<String, ValidationError> {
    if lookup_key.trim().is_empty() {
        return Err(ValidationError::EmptyLookupKey);
    }
    Ok(format!(
        "{}/{}/{}",
        CONTACT_LOOKUP_BASE,
        urlencoding::encode(lookup_key),
        urlencoding::encode(id.as_str())
    ))
}

// Serde support - serialize as string
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
