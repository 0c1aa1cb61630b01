//! Data model types decoded from the provider's responses.
//!
//! - `identifier` — id/name/symbol/slug records from the identifier map.
//! - `listing` — market listings with their USD quote.
//! - `status` — the `status` envelope every response carries.
pub mod identifier;
pub mod listing;
pub mod status;

pub use identifier::IdentifierRecord;
pub use listing::{ListingRecord, Quote};
pub use status::ApiStatus;

use serde::{Deserialize, Deserializer};

/// Deserialize a number the provider may send as `null`, mapping `null` to zero.
pub(crate) fn nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}
