//! Contact Gateway - an MCP server that opens messaging chats with Android device contacts.
//!
//! The messaging app never sees the contact database: contacts are read over adb,
//! the best number for the chosen contact is picked and normalized here, and only
//! a click-to-chat deep link is handed to the app.
//!
//! # Architecture
//!
//! - **domain**: Contact ids, phone entries, best-number selection and normalization
//! - **models**: Contact list rows and installed apps
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: adb process wrapper and output parsers
//! - **repositories**: Contact directory, app registry and launcher collaborators
//! - **services**: Contact list session, messaging app resolution, chat actions
//! - **cache**: TTL cache for resolved apps
//! - **observability**: Counters for device round trips and outcomes
//! - **server**: MCP protocol server

pub mod cache;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;

pub use cache::TimedCache;
pub use client::{AdbClient, AdbShell, ShellOutput};
pub use config::Config;
pub use domain::{
    normalize_for_messaging_link, select_best_number, ContactId, PhoneEntry, PhoneType,
};
pub use error::{ConfigError, GatewayError, GatewayResult};
pub use models::{ContactSummary, InstalledApp};
pub use observability::MetricsTracker;
pub use server::GatewayMcpServer;
pub use services::{
    ChatOutcome, ChatTarget, ContactListSession, DetailsOutcome, GatewayService,
    GatewayServiceImpl, GatewaySettings, MessagingAppResolver,
};
