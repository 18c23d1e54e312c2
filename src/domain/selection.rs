//! Choosing which of a contact's numbers to message.

use super::phone::PhoneEntry;

/// Pick the number to open a chat with.
///
/// Entries are scanned once. A mobile number always wins over any other
/// type; among several candidates of the same class, the last one scanned
/// wins. Returns `None` when there are no entries at all.
///
/// # Example
///
/// ```
/// use contact_gateway_mcp::domain::{select_best_number, PhoneEntry, PhoneType};
///
/// let entries = vec![
///     PhoneEntry::new("010-1234567", PhoneType::Home),
///     PhoneEntry::mobile("06-12345678"),
///     PhoneEntry::new("020-7654321", PhoneType::Work),
/// ];
/// assert_eq!(select_best_number(entries).as_deref(), Some("06-12345678"));
/// ```
pub fn select_best_number<I>(entries: I) -> Option<String>
where
    I: IntoIterator<Item = PhoneEntry>,
{
    let mut last_found = None;
    let mut mobile = None;

    for entry in entries {
        if entry.phone_type.is_mobile() {
            mobile = Some(entry.number);
        } else {
            last_found = Some(entry.number);
        }
    }

    mobile.or(last_found)
}
