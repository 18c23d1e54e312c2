//! Application service layer.
//!
//! Services hold the gateway's behaviour and orchestrate the collaborators
//! behind the repository traits. They provide a clean boundary between the
//! MCP handlers and device access.

mod app_resolver;
mod contact_list;
mod gateway_service;

pub use app_resolver::{find_by_label, find_by_package, AppTarget, MessagingAppResolver};
pub use contact_list::ContactListSession;
pub use gateway_service::{
    ChatOutcome, ChatTarget, DetailsOutcome, GatewayService, GatewayServiceImpl, GatewaySettings,
    NO_NUMBER_FOUND,
};
