//! Domain value objects and the pure decision logic of the gateway.
//!
//! Everything in here is free of I/O: contact identifiers, phone entries,
//! the best-number selection rule and the number normalization used to
//! build messaging deep links.

pub mod contact_id;
pub mod errors;
pub mod normalize;
pub mod phone;
pub mod selection;

pub use contact_id::{lookup_uri, ContactId};
pub use errors::ValidationError;
pub use normalize::{messaging_link, normalize_for_messaging_link, DEFAULT_COUNTRY_CODE};
pub use phone::{PhoneEntry, PhoneType};
pub use selection::select_best_number;
