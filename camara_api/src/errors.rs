//! Error types for the API client.

/// Errors that can occur when building requests or talking to the API.
///
/// Nothing is retried internally. `UpstreamServer`, `MalformedResponse` and
/// `InvalidLink` are never recoverable; `BadRequest` and `NotFound` can be
/// folded into an empty result with [`ResultExt`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A date, time or identifier supplied by the caller is malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// An option key is not accepted by the operation.
    #[error("`{key}` is not a valid option")]
    UnknownOption { key: String },
    /// An option value has the wrong shape for its declared kind.
    #[error("`{key}` should be {expected}, but is {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    /// The server sent pagination metadata that cannot be followed.
    #[error("Invalid pagination link: {0}")]
    InvalidLink(String),
    /// The response body is not a valid `{ dados, links }` envelope.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// The API answered HTTP 400.
    #[error("Bad request (HTTP 400): {url}")]
    BadRequest { url: String },
    /// The API answered HTTP 404.
    #[error("Not found (HTTP 404): {url}")]
    NotFound { url: String },
    /// The API answered HTTP 500.
    #[error("Internal error on the Câmara dos Deputados server (HTTP 500): {url}")]
    UpstreamServer { url: String },
    /// The API returned any other non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The transport failed before a status was received (network error, timeout).
    #[error("Request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// A request URL could not be constructed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// True for the upstream 400/404 answers, which mean "no such data".
    pub fn is_missing(&self) -> bool {
        matches!(self, Error::BadRequest { .. } | Error::NotFound { .. })
    }

    /// True for errors that indicate a broken upstream rather than a bad call.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::UpstreamServer { .. } | Error::MalformedResponse(_) | Error::InvalidLink(_)
        )
    }
}

/// Opt-in "treat 400/404 as empty" policy for callers that want it.
pub trait ResultExt<T> {
    /// Replaces a missing-data error with `T::default()` (an empty list).
    fn or_empty(self) -> Result<T, Error>
    where
        T: Default;

    /// Replaces a missing-data error with `None`.
    fn optional(self) -> Result<Option<T>, Error>;
}

impl<T> ResultExt<T> for Result<T, Error> {
    fn or_empty(self) -> Result<T, Error>
    where
        T: Default,
    {
        match self {
            Err(e) if e.is_missing() => Ok(T::default()),
            other => other,
        }
    }

    fn optional(self) -> Result<Option<T>, Error> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_missing() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
