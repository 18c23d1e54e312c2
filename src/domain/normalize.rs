//! Turning a stored phone number into a messaging deep link.

/// Country code used when a number carries a trunk prefix instead of an
/// international one.
pub const DEFAULT_COUNTRY_CODE: &str = "31";

/// Base of the click-to-chat deep link.
pub const MESSAGING_LINK_BASE: &str = "https://api.whatsapp.com/send?phone=";

/// Normalize a raw directory number into the digit string a click-to-chat
/// link expects.
///
/// Steps, in order:
/// 1. drop every `-` and ` `;
/// 2. replace every `+` with `00`;
/// 3. a leading `00` is stripped and the rest used as is;
/// 4. otherwise the first character is treated as a trunk prefix, dropped,
///    and `default_country_code` is put in front.
///
/// Nothing is validated. Odd input gives odd output, never a panic.
///
/// # Example
///
/// ```
/// use contact_gateway_mcp::domain::normalize_for_messaging_link;
///
/// assert_eq!(normalize_for_messaging_link("06-12345678", "31"), "31612345678");
/// assert_eq!(normalize_for_messaging_link("+31 6 1234 5678", "31"), "31612345678");
/// ```
pub fn normalize_for_messaging_link(number: &str, default_country_code: &str) -> String {
    let compact: String = number.chars().filter(|c| *c != '-' && *c != ' ').collect();
    let compact = compact.replace('+', "00");

    match compact.strip_prefix("00") {
        Some(international) => international.to_string(),
        None => {
            let mut chars = compact.chars();
            chars.next();
            format!("{}{}", default_country_code, chars.as_str())
        }
    }
}

/// Build the click-to-chat link for already normalized digits.
pub fn messaging_link(digits: &str) -> String {
    format!("{}{}", MESSAGING_LINK_BASE, digits)
}
