use crate::client::{parse_content_rows, shell_command, AdbShell, ContentRow};
use crate::domain::{ContactId, PhoneEntry, PhoneType};
use crate::error::{GatewayError, GatewayResult};
use crate::models::ContactSummary;
use crate::repositories::traits::ContactDirectory;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

const CONTACTS_URI: &str = "content://com.android.contacts/contacts";
const PHONES_URI: &str = "content://com.android.contacts/data/phones";

const CONTACT_COLUMNS: &[&str] = &["_id", "lookup", "display_name"];
// data1 is Phone.NUMBER, data2 is Phone.TYPE
const PHONE_COLUMNS: &[&str] = &["data1", "data2"];

/// Contact directory read through `content query` on the device.
pub struct AdbContactDirectory {
    shell: Arc<dyn AdbShell>,
}

impl AdbContactDirectory {
    pub fn new(shell: Arc<dyn AdbShell>) -> Self {
        Self { shell }
    }

    fn contacts_command(constraint: Option<&str>) -> String {
        let mut args = vec![
            "content",
            "query",
            "--uri",
            CONTACTS_URI,
            "--projection",
            "_id:lookup:display_name",
        ];

        let selection = constraint
            .filter(|c| !c.is_empty())
            .map(name_like_selection);
        if let Some(selection) = selection.as_deref() {
            args.push("--where");
            args.push(selection);
        }

        args.push("--sort");
        args.push("display_name ASC");
        shell_command(&args)
    }

    /// `None` for ids the provider never hands out; only numeric ids reach SQL.
    fn phones_command(id: &ContactId) -> Option<String> {
        if !id.as_str().chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let selection = format!("contact_id={}", id);
        Some(shell_command(&[
            "content",
            "query",
            "--uri",
            PHONES_URI,
            "--projection",
            "data1:data2",
            "--where",
            &selection,
        ]))
    }

    fn contact_from_row(row: &ContentRow) -> GatewayResult<ContactSummary> {
        let id = row
            .get("_id")
            .and_then(|id| ContactId::new(id).ok())
            .ok_or_else(|| GatewayError::Parse("contact row without _id".to_string()))?;
        Ok(ContactSummary::new(
            id,
            row.get("lookup").unwrap_or_default(),
            row.get("display_name").unwrap_or_default(),
        ))
    }
}

/// Case-insensitive substring selection on the display name.
///
/// LIKE wildcards in the constraint are escaped so they match literally.
fn name_like_selection(constraint: &str) -> String {
    let mut pattern = String::with_capacity(constraint.len() + 2);
    for c in constraint.to_lowercase().chars() {
        match c {
            '\\' | '%' | '_' => {
                pattern.push('\\');
                pattern.push(c);
            }
            '\'' => pattern.push_str("''"),
            _ => pattern.push(c),
        }
    }
    format!("LOWER(display_name) LIKE '%{}%' ESCAPE '\\'", pattern)
}

#[async_trait]
impl ContactDirectory for AdbContactDirectory {
    async fn query_contacts(&self, constraint: Option<&str>) -> GatewayResult<Vec<ContactSummary>> {
        let output = self.shell.shell(&Self::contacts_command(constraint)).await?;
        parse_content_rows(&output, CONTACT_COLUMNS)?
            .iter()
            .map(Self::contact_from_row)
            .collect()
    }

    async fn phones_for_contact(&self, id: &ContactId) -> GatewayResult<Vec<PhoneEntry>> {
        let command = match Self::phones_command(id) {
            Some(command) => command,
            None => {
                debug!(contact_id = %id, "Not a provider id, no such contact");
                return Ok(Vec::new());
            }
        };

        let output = self.shell.shell(&command).await?;
        Ok(parse_content_rows(&output, PHONE_COLUMNS)?
            .iter()
            .filter_map(|row| {
                let number = row.get("data1")?;
                let phone_type = row.get("data2").map(PhoneType::parse_column).unwrap_or_default();
                Some(PhoneEntry::new(number, phone_type))
            })
            .collect())
    }
}
