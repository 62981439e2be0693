mod builder;
pub use self::builder::build_url;

mod common;
pub use self::common::{OptionValue, Options, SortOrder};

mod endpoint;
pub use self::endpoint::{Endpoint, NextLinks};

mod schema;
pub use self::schema::{OptionKind, OptionSchema};
