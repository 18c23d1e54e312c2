//! Data models exchanged with the device collaborators.
//!
//! This module contains the rows produced by the contact directory and the
//! application registry.

pub mod app;
pub mod contact;

pub use app::InstalledApp;
pub use contact::ContactSummary;
