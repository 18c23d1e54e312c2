//! MCP server implementation for the contact gateway.
//!
//! This module exposes the contact list and its actions to MCP clients.

pub mod handlers;

pub use handlers::GatewayMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the gateway MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when
/// the client disconnects.
pub async fn run_server(server: GatewayMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
