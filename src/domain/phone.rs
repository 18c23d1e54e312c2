//! Phone number entries as stored by the contact directory.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Category of a phone number.
///
/// Codes mirror the Android contacts provider `Phone.TYPE` column. Codes the
/// gateway has no name for are kept as [`PhoneType::Unknown`] so nothing is
/// lost when round-tripping.
///
/// # Example
///
/// ```
/// use contact_gateway_mcp::domain::PhoneType;
///
/// assert_eq!(PhoneType::from_code(2), PhoneType::Mobile);
/// assert!(PhoneType::parse_column("2").is_mobile());
/// assert_eq!(PhoneType::parse_column("NULL"), PhoneType::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneType {
    Custom,
    Home,
    Mobile,
    Work,
    FaxWork,
    FaxHome,
    Pager,
    Other,
    Unknown(i32),
}

impl PhoneType {
    /// Map a provider type code to a category.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Custom,
            1 => Self::Home,
            2 => Self::Mobile,
            3 => Self::Work,
            4 => Self::FaxWork,
            5 => Self::FaxHome,
            6 => Self::Pager,
            7 => Self::Other,
            other => Self::Unknown(other),
        }
    }

    /// Parse a raw column value. `NULL` or garbage is treated as [`PhoneType::Other`].
    pub fn parse_column(raw: &str) -> Self {
        raw.trim()
            .parse::<i32>()
            .map(Self::from_code)
            .unwrap_or(Self::Other)
    }

    /// Parse a human-readable name ("mobile", "work", ...) or a numeric code.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "custom" => Self::Custom,
            "home" => Self::Home,
            "mobile" | "cell" => Self::Mobile,
            "work" => Self::Work,
            "fax_work" | "work_fax" => Self::FaxWork,
            "fax_home" | "home_fax" => Self::FaxHome,
            "pager" => Self::Pager,
            "other" | "" => Self::Other,
            other => other
                .parse::<i32>()
                .map(Self::from_code)
                .unwrap_or(Self::Other),
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Mobile)
    }
}

impl Default for PhoneType {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom => write!(f, "custom"),
            Self::Home => write!(f, "home"),
            Self::Mobile => write!(f, "mobile"),
            Self::Work => write!(f, "work"),
            Self::FaxWork => write!(f, "fax_work"),
            Self::FaxHome => write!(f, "fax_home"),
            Self::Pager => write!(f, "pager"),
            Self::Other => write!(f, "other"),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

// Serde support - serialize as the display name
impl Serialize for PhoneType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - accept names or numeric codes
impl<'de> Deserialize<'de> for PhoneType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(i32),
            Name(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Code(code) => PhoneType::from_code(code),
            Raw::Name(name) => PhoneType::from_name(&name),
        })
    }
}

/// One phone number of a contact, exactly as the directory stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    /// Raw number, formatting included
    pub number: String,

    /// Category of the number
    #[serde(rename = "type", default)]
    pub phone_type: PhoneType,
}

impl PhoneEntry {
    pub fn new(number: impl Into<String>, phone_type: PhoneType) -> Self {
        Self {
            number: number.into(),
            phone_type,
        }
    }

    pub fn mobile(number: impl Into<String>) -> Self {
        Self::new(number, PhoneType::Mobile)
    }
}
