//! Parliamentary fronts: `/frentes` and its sub-resources.

use super::item_id;
use crate::{
    query::{Endpoint, NextLinks, OptionKind, OptionSchema, OptionValue, Options},
    types::{Front, FrontDetail, FrontMember},
    Client, Error,
};

const COLLECTION: &str = "frentes";

/// Sent without `itens`: the listing rejects the page size it advertises in
/// its own `next` links, which are rewritten before being followed.
pub const LIST: Endpoint = Endpoint::new(COLLECTION)
    .options(OptionSchema::new(&[("idLegislatura", OptionKind::IntegerList)]))
    .next_links(NextLinks::WithoutPageSize);

pub const GET: Endpoint = Endpoint::new(COLLECTION);
pub const MEMBERS: Endpoint = Endpoint::new(COLLECTION).sub("membros");

/// Operations on parliamentary fronts. Obtained from [`Client::fronts`].
pub struct Fronts<'a> {
    client: &'a Client,
}

impl<'a> Fronts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: Option<&Options>) -> Result<Vec<Front>, Error> {
        self.client.get_all(&LIST, None, options).await
    }

    pub async fn get(&self, id: impl Into<OptionValue>) -> Result<FrontDetail, Error> {
        let id = item_id(id)?;
        self.client.get_one(&GET, Some(&id), None).await
    }

    pub async fn members(&self, id: impl Into<OptionValue>) -> Result<Vec<FrontMember>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&MEMBERS, Some(&id), None).await
    }
}
