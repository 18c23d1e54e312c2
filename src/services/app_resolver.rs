//! Finding the installed messaging app.

use crate::cache::TimedCache;
use crate::error::GatewayResult;
use crate::models::InstalledApp;
use crate::observability::MetricsTracker;
use crate::repositories::AppRegistry;
use std::sync::Arc;
use tracing::debug;

/// What to look for among launcher apps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppTarget {
    /// Stable installation identifier
    Package(String),
    /// User-visible label, matched exactly
    Label(String),
}

/// First app whose label equals `label` exactly (case-sensitive).
pub fn find_by_label<'a>(apps: &'a [InstalledApp], label: &str) -> Option<&'a InstalledApp> {
    apps.iter().find(|app| app.label == label)
}

/// First app with the given package identifier.
pub fn find_by_package<'a>(apps: &'a [InstalledApp], package: &str) -> Option<&'a InstalledApp> {
    apps.iter().find(|app| app.package == package)
}

/// Resolves the messaging app's package against the app registry.
///
/// Only successful lookups are cached, so installing the app is noticed
/// on the next chat rather than after the TTL. A TTL of zero checks the
/// registry every time.
pub struct MessagingAppResolver {
    registry: Arc<dyn AppRegistry>,
    cache: TimedCache<AppTarget, String>,
    metrics: MetricsTracker,
}

impl MessagingAppResolver {
    pub fn new(registry: Arc<dyn AppRegistry>, cache_ttl_secs: u64, metrics: MetricsTracker) -> Self {
        Self {
            registry,
            cache: TimedCache::new(cache_ttl_secs),
            metrics,
        }
    }

    /// Package of the first launcher app labelled exactly `app_display_name`.
    ///
    /// Labels can be localized or renamed; prefer [`Self::resolve`] with a
    /// package identifier where one is known.
    pub async fn resolve_installed_messaging_app(
        &self,
        app_display_name: &str,
    ) -> GatewayResult<Option<String>> {
        self.lookup(&AppTarget::Label(app_display_name.to_string()))
            .await
    }

    /// Resolve by package identifier first, then by label.
    pub async fn resolve(&self, package: Option<&str>, label: &str) -> GatewayResult<Option<String>> {
        if let Some(package) = package {
            if let Some(found) = self.lookup(&AppTarget::Package(package.to_string())).await? {
                return Ok(Some(found));
            }
            debug!(package = %package, "Configured package not installed, trying label");
        }
        self.resolve_installed_messaging_app(label).await
    }

    /// Forget cached lookups.
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    async fn lookup(&self, target: &AppTarget) -> GatewayResult<Option<String>> {
        if let Some(package) = self.cache.get(target) {
            self.metrics.track_cache_access("messaging_app", true);
            return Ok(Some(package));
        }
        self.metrics.track_cache_access("messaging_app", false);

        let apps = self.registry.launcher_apps().await?;
        let found = match target {
            AppTarget::Package(package) => find_by_package(&apps, package),
            AppTarget::Label(label) => find_by_label(&apps, label),
        }
        .map(|app| app.package.clone());

        debug!(target = ?target, found = ?found, apps = apps.len(), "Resolved messaging app");

        if let Some(package) = &found {
            self.cache.insert(target.clone(), package.clone());
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apps() -> Vec<InstalledApp> {
        vec![
            InstalledApp::new("Settings", "com.android.settings"),
            InstalledApp::new("WhatsApp", "com.whatsapp"),
            InstalledApp::new("WhatsApp", "com.whatsapp.clone"),
        ]
    }

    #[test]
    fn test_find_by_label_first_exact_match() {
        let apps = apps();
        assert_eq!(
            find_by_label(&apps, "WhatsApp").map(|a| a.package.as_str()),
            Some("com.whatsapp")
        );
        assert!(find_by_label(&apps, "whatsapp").is_none());
        assert!(find_by_label(&apps, "WhatsApp ").is_none());
    }

    #[test]
    fn test_find_by_package() {
        let apps = apps();
        assert_eq!(
            find_by_package(&apps, "com.whatsapp.clone").map(|a| a.label.as_str()),
            Some("WhatsApp")
        );
        assert!(find_by_package(&apps, "org.thoughtcrime.securesms").is_none());
    }
}
