//! The contact list shown in one session.

use crate::domain::ContactId;
use crate::error::GatewayResult;
use crate::models::ContactSummary;
use crate::repositories::ContactDirectory;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct ListState {
    constraint: Option<String>,
    contacts: Vec<ContactSummary>,
}

/// Result set currently displayed to one session.
///
/// Each filter replaces the whole set; when filters race, the last one to
/// finish wins.
pub struct ContactListSession {
    directory: Arc<dyn ContactDirectory>,
    state: RwLock<ListState>,
}

impl ContactListSession {
    pub fn new(directory: Arc<dyn ContactDirectory>) -> Self {
        Self {
            directory,
            state: RwLock::new(ListState::default()),
        }
    }

    /// Re-query the directory and replace the displayed set.
    ///
    /// An empty query clears the filter.
    pub async fn filter(&self, query: Option<&str>) -> GatewayResult<Vec<ContactSummary>> {
        let constraint = query.filter(|q| !q.is_empty()).map(str::to_string);
        let contacts = self.directory.query_contacts(constraint.as_deref()).await?;

        debug!(constraint = ?constraint, count = contacts.len(), "Contact list replaced");

        let mut state = self.state.write().await;
        state.constraint = constraint;
        state.contacts = contacts.clone();
        Ok(contacts)
    }

    /// The displayed set.
    pub async fn current(&self) -> Vec<ContactSummary> {
        self.state.read().await.contacts.clone()
    }

    /// The constraint the displayed set was produced with.
    pub async fn constraint(&self) -> Option<String> {
        self.state.read().await.constraint.clone()
    }

    /// A displayed contact by id.
    pub async fn find(&self, id: &ContactId) -> Option<ContactSummary> {
        self.state
            .read()
            .await
            .contacts
            .iter()
            .find(|c| &c.id == id)
            .cloned()
    }

    /// A displayed contact by list position.
    pub async fn at(&self, position: usize) -> Option<ContactSummary> {
        self.state.read().await.contacts.get(position).cloned()
    }
}
