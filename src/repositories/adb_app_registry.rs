use crate::client::{parse_component_packages, shell_command, AdbShell};
use crate::error::GatewayResult;
use crate::models::InstalledApp;
use crate::repositories::traits::AppRegistry;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Launcher apps listed through the device package manager.
///
/// adb cannot read application labels, so labels come from a
/// package → label table. Packages without an entry are labelled with
/// their package name.
pub struct AdbAppRegistry {
    shell: Arc<dyn AdbShell>,
    labels: BTreeMap<String, String>,
}

impl AdbAppRegistry {
    pub fn new(shell: Arc<dyn AdbShell>, labels: BTreeMap<String, String>) -> Self {
        Self { shell, labels }
    }

    fn query_command() -> String {
        shell_command(&[
            "cmd",
            "package",
            "query-activities",
            "--components",
            "-a",
            "android.intent.action.MAIN",
            "-c",
            "android.intent.category.LAUNCHER",
        ])
    }

    fn label_for(&self, package: &str) -> String {
        self.labels
            .get(package)
            .cloned()
            .unwrap_or_else(|| package.to_string())
    }
}

#[async_trait]
impl AppRegistry for AdbAppRegistry {
    async fn launcher_apps(&self) -> GatewayResult<Vec<InstalledApp>> {
        let output = self.shell.shell(&Self::query_command()).await?;
        Ok(parse_component_packages(&output)
            .into_iter()
            .map(|package| InstalledApp::new(self.label_for(&package), package))
            .collect())
    }
}
