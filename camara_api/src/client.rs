//! Client for the Câmara dos Deputados open-data API.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    pagination::{aggregate, fetch_page},
    query::{build_url, Endpoint, Options},
    resources::{Bills, Blocs, Events, Fronts, Legislators, Legislatures, Organs, Parties, Votes},
    transport::{HttpTransport, Transport},
    Error,
};

/// Production base URL of the API.
pub const DEFAULT_BASE_URL: &str = "https://dadosabertos.camara.leg.br/api/v2";

/// Entry point to every resource collection.
///
/// Holds no state between calls other than the base URL and the transport;
/// cloning is cheap and clones share the transport.
#[derive(Clone)]
pub struct Client {
    base_api_url: Url,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client pointing at the production API over [`HttpTransport`].
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_transport(base_url, Arc::new(HttpTransport::new()?))
    }

    /// Creates a client over any [`Transport`].
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Result<Self, Error> {
        let base_api_url =
            Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_api_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!("{} cannot be a base URL", base_url)));
        }
        Ok(Self {
            base_api_url,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_api_url
    }

    pub fn blocs(&self) -> Blocs<'_> {
        Blocs::new(self)
    }

    pub fn legislators(&self) -> Legislators<'_> {
        Legislators::new(self)
    }

    pub fn events(&self) -> Events<'_> {
        Events::new(self)
    }

    pub fn fronts(&self) -> Fronts<'_> {
        Fronts::new(self)
    }

    pub fn legislatures(&self) -> Legislatures<'_> {
        Legislatures::new(self)
    }

    pub fn organs(&self) -> Organs<'_> {
        Organs::new(self)
    }

    pub fn parties(&self) -> Parties<'_> {
        Parties::new(self)
    }

    pub fn bills(&self) -> Bills<'_> {
        Bills::new(self)
    }

    pub fn votes(&self) -> Votes<'_> {
        Votes::new(self)
    }

    fn request_url(
        &self,
        endpoint: &Endpoint,
        id: Option<&str>,
        options: Option<&Options>,
    ) -> Result<Url, Error> {
        let url = endpoint.url(&self.base_api_url, id)?;
        build_url(&url, options, &endpoint.options)
    }

    /// Fetches a single page and returns its payload as is.
    pub(crate) async fn get_one<T>(
        &self,
        endpoint: &Endpoint,
        id: Option<&str>,
        options: Option<&Options>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.request_url(endpoint, id, options)?;
        let page = fetch_page::<T>(self.transport.as_ref(), &url).await?;
        Ok(page.data)
    }

    /// Fetches the first page and every page reachable through `next` links.
    pub(crate) async fn get_all<T>(
        &self,
        endpoint: &Endpoint,
        id: Option<&str>,
        options: Option<&Options>,
    ) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.request_url(endpoint, id, options)?;
        let first = fetch_page::<Vec<T>>(self.transport.as_ref(), &url).await?;
        let mut items = first.data;
        let rest =
            aggregate::<T>(&first.links, self.transport.as_ref(), endpoint.next_links).await?;
        items.extend(rest);
        Ok(items)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url.as_str())
            .finish_non_exhaustive()
    }
}
