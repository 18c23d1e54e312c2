//! In-memory collaborators for integration tests.

mod mock_app_registry;
mod mock_contact_directory;
mod mock_launcher;

#[allow(unused_imports)]
pub use mock_app_registry::MockAppRegistry;
#[allow(unused_imports)]
pub use mock_contact_directory::MockContactDirectory;
#[allow(unused_imports)]
pub use mock_launcher::{LaunchRecord, MockLauncher};
