//! Contact Gateway MCP Server - Main entry point
//!
//! Serves the contact list of a connected Android device over the Model Context
//! Protocol on stdio.

use anyhow::Result;
use contact_gateway_mcp::repositories::{
    AdbAppRegistry, AdbContactDirectory, AdbLauncher, AppRegistry, ContactDirectory, Launcher,
};
use contact_gateway_mcp::{AdbClient, AdbShell, Config, GatewayMcpServer, GatewaySettings, MetricsTracker};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        adb = %config.adb_path,
        serial = ?config.adb_serial,
        app = %config.messaging_app_label,
        package = ?config.messaging_app_package,
        "Starting Contact Gateway MCP Server"
    );

    let metrics = MetricsTracker::new();

    // Initialize adb client
    let shell = Arc::new(AdbClient::new(&config).with_metrics(metrics.clone())) as Arc<dyn AdbShell>;

    // Initialize collaborators
    let directory = Arc::new(AdbContactDirectory::new(shell.clone())) as Arc<dyn ContactDirectory>;
    let registry =
        Arc::new(AdbAppRegistry::new(shell.clone(), config.app_labels.clone())) as Arc<dyn AppRegistry>;
    let launcher = Arc::new(AdbLauncher::new(shell)) as Arc<dyn Launcher>;

    let server = GatewayMcpServer::new(
        directory,
        registry,
        launcher,
        GatewaySettings::from(&config),
        metrics.clone(),
    );

    info!("Starting MCP server with stdio transport");
    contact_gateway_mcp::server::run_server(server).await?;

    info!("{}", metrics.summary());
    info!("Contact Gateway MCP Server shutdown complete");
    Ok(())
}
