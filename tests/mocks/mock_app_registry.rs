use async_trait::async_trait;
use contact_gateway_mcp::error::GatewayResult;
use contact_gateway_mcp::models::InstalledApp;
use contact_gateway_mcp::repositories::AppRegistry;
use std::sync::{Arc, Mutex};

/// Mock application registry for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAppRegistry {
    apps: Arc<Mutex<Vec<InstalledApp>>>,
    calls: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockAppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the given (label, package) apps, in that order.
    pub fn with_apps(apps: &[(&str, &str)]) -> Self {
        let registry = Self::new();
        for (label, package) in apps {
            registry.install(label, package);
        }
        registry
    }

    pub fn install(&self, label: &str, package: &str) {
        self.apps
            .lock()
            .unwrap()
            .push(InstalledApp::new(label, package));
    }

    pub fn uninstall_all(&self) {
        self.apps.lock().unwrap().clear();
    }

    /// How many times the registry was enumerated.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl AppRegistry for MockAppRegistry {
    async fn launcher_apps(&self) -> GatewayResult<Vec<InstalledApp>> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.apps.lock().unwrap().clone())
    }
}
