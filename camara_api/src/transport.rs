//! The network boundary: a GET-only [`Transport`] trait and its reqwest implementation.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::Error;

/// Request timeout for the default transport.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("camara_api/", env!("CARGO_PKG_VERSION"));

/// Status and body of one HTTP response.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Performs a GET and hands back the raw status and body.
///
/// Implementations report network-level failures (connection refused,
/// timeouts, cancelled requests) as [`Error::Transport`]; status codes are
/// interpreted by the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<RawResponse, Error>;
}

/// Default [`Transport`] over a shared `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with the default 30-second timeout.
    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(Box::new(e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, Error> {
        let resp = self
            .client
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::Transport(Box::new(e)))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::Transport(Box::new(e)))?;

        Ok(RawResponse { status, body })
    }
}
