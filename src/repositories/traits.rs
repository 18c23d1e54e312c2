use crate::domain::{ContactId, PhoneEntry};
use crate::error::GatewayResult;
use crate::models::{ContactSummary, InstalledApp};
use async_trait::async_trait;

/// The device contact directory.
///
/// Provides abstraction over contact listing and phone lookup,
/// enabling different implementations (adb, mock).
#[async_trait]
pub trait ContactDirectory: Send + Sync {
    /// List contacts sorted ascending by display name.
    ///
    /// A non-empty constraint keeps only contacts whose display name
    /// contains it, ignoring case. `None` or `""` lists everything.
    async fn query_contacts(&self, constraint: Option<&str>) -> GatewayResult<Vec<ContactSummary>>;

    /// All phone numbers stored for one contact, in no particular order.
    async fn phones_for_contact(&self, id: &ContactId) -> GatewayResult<Vec<PhoneEntry>>;
}

/// Registry of installed applications.
#[async_trait]
pub trait AppRegistry: Send + Sync {
    /// Every application with a main launcher entry, in registry order.
    async fn launcher_apps(&self) -> GatewayResult<Vec<InstalledApp>>;
}

/// Starts activities on the device.
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Hand a deep link to one specific package. Fire-and-forget.
    async fn launch_deep_link(&self, package: &str, uri: &str) -> GatewayResult<()>;

    /// Open the platform contact detail view for a lookup URI.
    async fn open_contact_details(&self, lookup_uri: &str) -> GatewayResult<()>;
}
