mod client;
mod errors;
pub mod pagination;
pub mod query;
pub mod resources;
pub mod transport;
pub mod types;
pub mod validate;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::{Error, ResultExt};
pub use self::query::{build_url, OptionValue, Options, SortOrder};
pub use self::transport::{HttpTransport, RawResponse, Transport, REQUEST_TIMEOUT};
