//! Collaborators the gateway delegates to, and their adb-backed implementations.

mod adb_app_registry;
mod adb_contact_directory;
mod adb_launcher;
mod traits;

pub use adb_app_registry::AdbAppRegistry;
pub use adb_contact_directory::AdbContactDirectory;
pub use adb_launcher::AdbLauncher;
pub use traits::{AppRegistry, ContactDirectory, Launcher};
