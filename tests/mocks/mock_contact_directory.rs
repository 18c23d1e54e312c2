use async_trait::async_trait;
use contact_gateway_mcp::domain::{ContactId, PhoneEntry};
use contact_gateway_mcp::error::{GatewayError, GatewayResult};
use contact_gateway_mcp::models::ContactSummary;
use contact_gateway_mcp::repositories::ContactDirectory;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact directory for testing.
///
/// Keeps contacts and their phone numbers in memory, applies the same
/// filter and ordering rules as the device provider, and tracks method
/// calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactDirectory {
    contacts: Arc<Mutex<Vec<ContactSummary>>>,
    phones: Arc<Mutex<HashMap<ContactId, Vec<PhoneEntry>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactDirectory {
    /// Create a new empty MockContactDirectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact with its phone numbers.
    pub fn add_contact(&self, id: &str, display_name: &str, phones: Vec<PhoneEntry>) -> ContactId {
        let id = ContactId::new(id).unwrap();
        self.contacts.lock().unwrap().push(ContactSummary::new(
            id.clone(),
            format!("lookup-{}", id),
            display_name,
        ));
        self.phones.lock().unwrap().insert(id.clone(), phones);
        id
    }

    /// Make every call fail, as if the device went away.
    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> GatewayResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if *self.fail.lock().unwrap() {
            return Err(GatewayError::CommandFailed {
                status: 1,
                message: "error: no devices/emulators found".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContactDirectory for MockContactDirectory {
    async fn query_contacts(&self, constraint: Option<&str>) -> GatewayResult<Vec<ContactSummary>> {
        self.track_call("query_contacts")?;

        let constraint = constraint.unwrap_or("").to_lowercase();
        let mut result: Vec<ContactSummary> = self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.display_name.to_lowercase().contains(&constraint))
            .cloned()
            .collect();
        result.sort_by(|a, b| a.display_name.cmp(&b.display_name));

        Ok(result)
    }

    async fn phones_for_contact(&self, id: &ContactId) -> GatewayResult<Vec<PhoneEntry>> {
        self.track_call("phones_for_contact")?;

        Ok(self
            .phones
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_default())
    }
}
