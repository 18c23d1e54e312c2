//! Gateway service layer.
//!
//! The two user actions of the contact list: open a chat with a contact,
//! or open the contact's detail view.

use crate::config::Config;
use crate::domain::{
    messaging_link, normalize_for_messaging_link, select_best_number, ContactId, PhoneEntry,
};
use crate::error::GatewayResult;
use crate::models::ContactSummary;
use crate::observability::MetricsTracker;
use crate::repositories::{AppRegistry, ContactDirectory, Launcher};
use crate::services::app_resolver::MessagingAppResolver;
use crate::services::contact_list::ContactListSession;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Notification shown when a contact has no phone number.
pub const NO_NUMBER_FOUND: &str = "No number found!";

/// Settings the gateway needs from configuration.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub default_country_code: String,
    pub messaging_app_label: String,
    pub messaging_app_package: Option<String>,
    pub app_cache_ttl_secs: u64,
}

impl From<&Config> for GatewaySettings {
    fn from(config: &Config) -> Self {
        Self {
            default_country_code: config.default_country_code.clone(),
            messaging_app_label: config.messaging_app_label.clone(),
            messaging_app_package: config.messaging_app_package.clone(),
            app_cache_ttl_secs: config.app_cache_ttl_secs,
        }
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// The number a chat would be opened with, and the link for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTarget {
    /// Number as stored in the directory
    pub number: String,
    /// Digits after normalization
    pub digits: String,
    /// Click-to-chat deep link
    pub link: String,
}

impl ChatTarget {
    /// Select the best number among `entries` and build its link.
    pub fn from_entries(entries: Vec<PhoneEntry>, default_country_code: &str) -> Option<Self> {
        let number = select_best_number(entries)?;
        let digits = normalize_for_messaging_link(&number, default_country_code);
        let link = messaging_link(&digits);
        Some(Self {
            number,
            digits,
            link,
        })
    }
}

/// Result of the "open chat" action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChatOutcome {
    /// The deep link was handed to the messaging app
    Launched {
        package: String,
        target: ChatTarget,
    },
    /// The contact has no phone numbers
    NoNumberFound,
    /// No installed app matched
    NoMessagingApp { app_label: String },
}

impl ChatOutcome {
    /// Short notification to show the user, if any.
    pub fn notification(&self) -> Option<String> {
        match self {
            Self::Launched { .. } => None,
            Self::NoNumberFound => Some(NO_NUMBER_FOUND.to_string()),
            Self::NoMessagingApp { app_label } => Some(format!("No {} found!", app_label)),
        }
    }
}

/// Result of the "open contact details" action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailsOutcome {
    Opened { uri: String },
    /// The contact is not in the displayed list; nothing happens
    NotFound,
}

/// Gateway service trait for the contact list actions.
#[async_trait]
pub trait GatewayService: Send + Sync {
    /// Filter the displayed list. `None` or `""` shows every contact.
    async fn list_contacts(&self, query: Option<String>) -> GatewayResult<Vec<ContactSummary>>;

    /// Open a chat with the contact's best number in the messaging app.
    async fn open_chat(&self, contact_id: &ContactId) -> GatewayResult<ChatOutcome>;

    /// Open the platform detail view of a displayed contact.
    async fn open_contact_details(&self, contact_id: &ContactId) -> GatewayResult<DetailsOutcome>;

    /// The chat target for a set of numbers, without touching the device.
    fn preview_chat(&self, entries: Vec<PhoneEntry>) -> Option<ChatTarget>;
}

/// Default implementation of GatewayService.
pub struct GatewayServiceImpl {
    directory: Arc<dyn ContactDirectory>,
    launcher: Arc<dyn Launcher>,
    resolver: MessagingAppResolver,
    session: ContactListSession,
    settings: GatewaySettings,
    metrics: MetricsTracker,
}

impl GatewayServiceImpl {
    /// Create a new gateway service with its own list session.
    pub fn new(
        directory: Arc<dyn ContactDirectory>,
        registry: Arc<dyn AppRegistry>,
        launcher: Arc<dyn Launcher>,
        settings: GatewaySettings,
        metrics: MetricsTracker,
    ) -> Self {
        Self {
            session: ContactListSession::new(directory.clone()),
            resolver: MessagingAppResolver::new(
                registry,
                settings.app_cache_ttl_secs,
                metrics.clone(),
            ),
            directory,
            launcher,
            settings,
            metrics,
        }
    }

    async fn resolve_package(&self) -> GatewayResult<Option<String>> {
        self.resolver
            .resolve(
                self.settings.messaging_app_package.as_deref(),
                &self.settings.messaging_app_label,
            )
            .await
    }

    fn no_messaging_app(&self) -> ChatOutcome {
        self.metrics.track_not_found("messaging_app");
        warn!(label = %self.settings.messaging_app_label, "Messaging app not installed");
        ChatOutcome::NoMessagingApp {
            app_label: self.settings.messaging_app_label.clone(),
        }
    }
}

#[async_trait]
impl GatewayService for GatewayServiceImpl {
    async fn list_contacts(&self, query: Option<String>) -> GatewayResult<Vec<ContactSummary>> {
        self.session.filter(query.as_deref()).await
    }

    async fn open_chat(&self, contact_id: &ContactId) -> GatewayResult<ChatOutcome> {
        let phones = self.directory.phones_for_contact(contact_id).await?;

        let target = match ChatTarget::from_entries(phones, &self.settings.default_country_code) {
            Some(target) => target,
            None => {
                self.metrics.track_not_found("number");
                return Ok(ChatOutcome::NoNumberFound);
            }
        };

        let package = match self.resolve_package().await? {
            Some(package) => package,
            None => return Ok(self.no_messaging_app()),
        };

        let package = match self.launcher.launch_deep_link(&package, &target.link).await {
            Ok(()) => package,
            Err(e) => {
                // The package may come from the cache and be uninstalled since
                warn!(package = %package, "Launch failed, checking installed apps again: {}", e);
                self.resolver.invalidate();
                let package = match self.resolve_package().await? {
                    Some(package) => package,
                    None => return Ok(self.no_messaging_app()),
                };
                self.launcher.launch_deep_link(&package, &target.link).await?;
                package
            }
        };
        self.metrics.track_chat_launched(&package);

        Ok(ChatOutcome::Launched { package, target })
    }

    async fn open_contact_details(&self, contact_id: &ContactId) -> GatewayResult<DetailsOutcome> {
        let uri = match self.session.find(contact_id).await.map(|c| c.lookup_uri()) {
            Some(Ok(uri)) => uri,
            Some(Err(e)) => {
                info!(contact_id = %contact_id, "No detail view: {}", e);
                return Ok(DetailsOutcome::NotFound);
            }
            None => {
                info!(contact_id = %contact_id, "Contact not in the displayed list");
                return Ok(DetailsOutcome::NotFound);
            }
        };

        self.launcher.open_contact_details(&uri).await?;
        Ok(DetailsOutcome::Opened { uri })
    }

    fn preview_chat(&self, entries: Vec<PhoneEntry>) -> Option<ChatTarget> {
        ChatTarget::from_entries(entries, &self.settings.default_country_code)
    }
}
