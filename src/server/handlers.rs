//! MCP tool handlers for the contact gateway.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.
//! One server instance is one session: it owns the displayed contact list.

use crate::domain::{ContactId, PhoneEntry, PhoneType};
use crate::observability::MetricsTracker;
use crate::repositories::{AppRegistry, ContactDirectory, Launcher};
use crate::services::{GatewayService, GatewayServiceImpl, GatewaySettings, NO_NUMBER_FOUND};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server exposing the contact list and its two actions.
#[derive(Clone)]
pub struct GatewayMcpServer {
    gateway: Arc<dyn GatewayService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for GatewayMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-gateway-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Browse the contacts of a connected Android device and open a chat with one of them in the messaging app, without giving that app access to the contact database.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct ListContactsParams {
    /// Case-insensitive text the display name must contain
    #[serde(default)]
    query: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    contact_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PhoneNumberParam {
    number: String,
    /// "mobile", "home", "work", "other", ... or a numeric type code
    #[serde(default, rename = "type")]
    phone_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PreviewChatLinkParams {
    numbers: Vec<PhoneNumberParam>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn invalid_params(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

// Tool router implementation
#[tool_router]
impl GatewayMcpServer {
    /// Create a new gateway server over the given collaborators.
    pub fn new(
        directory: Arc<dyn ContactDirectory>,
        registry: Arc<dyn AppRegistry>,
        launcher: Arc<dyn Launcher>,
        settings: GatewaySettings,
        metrics: MetricsTracker,
    ) -> Self {
        let gateway = Arc::new(GatewayServiceImpl::new(
            directory, registry, launcher, settings, metrics,
        )) as Arc<dyn GatewayService>;

        Self::with_service(gateway)
    }

    /// Create a server around an existing gateway service.
    pub fn with_service(gateway: Arc<dyn GatewayService>) -> Self {
        Self {
            gateway,
            tool_router: Self::tool_router(),
        }
    }

    /// List device contacts, optionally filtered by name.
    #[tool(
        description = "List the contacts on the device sorted by name. An optional query keeps only contacts whose name contains it (case-insensitive). The result replaces the currently displayed list."
    )]
    async fn list_contacts(
        &self,
        params: Parameters<ListContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let contacts = self
            .gateway
            .list_contacts(params.query.clone())
            .await
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "query": params.query.unwrap_or_default(),
            "result_count": contacts.len(),
            "contacts": contacts,
        }))
    }

    /// Open a chat with a contact in the messaging app.
    #[tool(
        description = "Open a one-to-one chat with a contact in the messaging app, using the contact's mobile number if it has one, otherwise its last other number."
    )]
    async fn open_chat(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let contact_id = ContactId::new(params.0.contact_id).map_err(invalid_params)?;

        tracing::info!("MCP Handler: open_chat called");
        tracing::debug!("Parameters: contact_id={}", contact_id);

        let outcome = self
            .gateway
            .open_chat(&contact_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to open chat: {:?}", e);
                to_mcp_error(e)
            })?;

        json_result(&serde_json::json!({
            "contact_id": contact_id,
            "outcome": outcome,
            "notification": outcome.notification(),
        }))
    }

    /// Open the contact's detail view on the device.
    #[tool(
        description = "Open the device's contact detail screen for a contact from the currently displayed list. Does nothing if the contact is not displayed."
    )]
    async fn open_contact_details(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let contact_id = ContactId::new(params.0.contact_id).map_err(invalid_params)?;

        let outcome = self
            .gateway
            .open_contact_details(&contact_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "contact_id": contact_id,
            "outcome": outcome,
        }))
    }

    /// Show which number and link a chat would use.
    #[tool(
        description = "Pick the number a chat would use from a list of typed phone numbers and show its normalized digits and click-to-chat link. Does not touch the device."
    )]
    async fn preview_chat_link(
        &self,
        params: Parameters<PreviewChatLinkParams>,
    ) -> Result<CallToolResult, McpError> {
        let entries: Vec<PhoneEntry> = params
            .0
            .numbers
            .into_iter()
            .map(|p| {
                let phone_type = p
                    .phone_type
                    .as_deref()
                    .map(PhoneType::from_name)
                    .unwrap_or_default();
                PhoneEntry::new(p.number, phone_type)
            })
            .collect();

        let response = match self.gateway.preview_chat(entries) {
            Some(target) => serde_json::json!({ "found": true, "target": target }),
            None => serde_json::json!({ "found": false, "notification": NO_NUMBER_FOUND }),
        };

        json_result(&response)
    }
}
