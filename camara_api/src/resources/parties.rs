//! Parties: `/partidos` and its sub-resources.

use super::item_id;
use crate::{
    query::{Endpoint, OptionKind, OptionSchema, OptionValue, Options},
    types::{Legislator, Party, PartyDetail, PartyLeader},
    Client, Error,
};

const COLLECTION: &str = "partidos";

pub const LIST: Endpoint = Endpoint::new(COLLECTION)
    .page_size(100)
    .options(OptionSchema::new(&[
        ("sigla", OptionKind::StringList),
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
        ("idLegislatura", OptionKind::IntegerList),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

pub const GET: Endpoint = Endpoint::new(COLLECTION);
pub const LEADERS: Endpoint = Endpoint::new(COLLECTION).sub("lideres").page_size(100);

pub const MEMBERS: Endpoint = Endpoint::new(COLLECTION)
    .sub("membros")
    .page_size(100)
    .options(OptionSchema::new(&[
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
        ("idLegislatura", OptionKind::IntegerList),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

/// Operations on parties. Obtained from [`Client::parties`].
pub struct Parties<'a> {
    client: &'a Client,
}

impl<'a> Parties<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: Option<&Options>) -> Result<Vec<Party>, Error> {
        self.client.get_all(&LIST, None, options).await
    }

    pub async fn get(&self, id: impl Into<OptionValue>) -> Result<PartyDetail, Error> {
        let id = item_id(id)?;
        self.client.get_one(&GET, Some(&id), None).await
    }

    pub async fn leaders(&self, id: impl Into<OptionValue>) -> Result<Vec<PartyLeader>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&LEADERS, Some(&id), None).await
    }

    pub async fn members(
        &self,
        id: impl Into<OptionValue>,
        options: Option<&Options>,
    ) -> Result<Vec<Legislator>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&MEMBERS, Some(&id), options).await
    }
}
