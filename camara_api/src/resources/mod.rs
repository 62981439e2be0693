//! One method set per resource collection.
//!
//! Every module exposes the [`Endpoint`](crate::query::Endpoint) of each of
//! its operations as a constant, so callers can inspect the accepted options.

use crate::{query::OptionValue, validate::validate_id, Error};

pub mod bills;
pub mod blocs;
pub mod events;
pub mod fronts;
pub mod legislators;
pub mod legislatures;
pub mod organs;
pub mod parties;
pub mod votes;

pub use self::bills::Bills;
pub use self::blocs::Blocs;
pub use self::events::Events;
pub use self::fronts::Fronts;
pub use self::legislators::Legislators;
pub use self::legislatures::Legislatures;
pub use self::organs::Organs;
pub use self::parties::Parties;
pub use self::votes::Votes;

/// Validates a numeric primary id and renders it as a path segment.
fn item_id(id: impl Into<OptionValue>) -> Result<String, Error> {
    Ok(validate_id(&id.into())?.to_string())
}
