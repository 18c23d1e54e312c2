use async_trait::async_trait;
use contact_gateway_mcp::error::{GatewayError, GatewayResult};
use contact_gateway_mcp::repositories::Launcher;
use std::sync::{Arc, Mutex};

/// One recorded launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchRecord {
    DeepLink { package: String, uri: String },
    ContactDetails { uri: String },
}

/// Mock launcher that records what would have been started.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockLauncher {
    launches: Arc<Mutex<Vec<LaunchRecord>>>,
    attempts: Arc<Mutex<usize>>,
    fail: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful launches, in order.
    pub fn launches(&self) -> Vec<LaunchRecord> {
        self.launches.lock().unwrap().clone()
    }

    /// Make deep-link launches fail, as `am` does for an uninstalled package.
    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Deep-link launches attempted, including failed ones.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Launcher for MockLauncher {
    async fn launch_deep_link(&self, package: &str, uri: &str) -> GatewayResult<()> {
        *self.attempts.lock().unwrap() += 1;
        if *self.fail.lock().unwrap() {
            return Err(GatewayError::CommandFailed {
                status: 0,
                message: "Error: Activity not started, unable to resolve Intent".to_string(),
            });
        }

        self.launches.lock().unwrap().push(LaunchRecord::DeepLink {
            package: package.to_string(),
            uri: uri.to_string(),
        });
        Ok(())
    }

    async fn open_contact_details(&self, lookup_uri: &str) -> GatewayResult<()> {
        self.launches
            .lock()
            .unwrap()
            .push(LaunchRecord::ContactDetails {
                uri: lookup_uri.to_string(),
            });
        Ok(())
    }
}
