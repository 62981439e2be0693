//! Organs: `/orgaos` and its sub-resources.

use super::item_id;
use crate::{
    query::{Endpoint, OptionKind, OptionSchema, OptionValue, Options},
    types::{Event, OrganDetail, OrganMember, OrganSummary, Vote},
    Client, Error,
};

const COLLECTION: &str = "orgaos";

pub const LIST: Endpoint = Endpoint::new(COLLECTION)
    .page_size(100)
    .options(OptionSchema::new(&[
        ("id", OptionKind::IntegerList),
        ("sigla", OptionKind::StringList),
        ("codTipoOrgao", OptionKind::IntegerList),
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

pub const GET: Endpoint = Endpoint::new(COLLECTION);

pub const EVENTS: Endpoint = Endpoint::new(COLLECTION)
    .sub("eventos")
    .page_size(100)
    .options(OptionSchema::new(&[
        ("idTipoEvento", OptionKind::IntegerList),
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

pub const MEMBERS: Endpoint = Endpoint::new(COLLECTION)
    .sub("membros")
    .page_size(100)
    .options(OptionSchema::new(&[
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
    ]));

pub const VOTES: Endpoint = Endpoint::new(COLLECTION)
    .sub("votacoes")
    .page_size(200)
    .options(OptionSchema::new(&[
        ("idProposicao", OptionKind::IntegerList),
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

/// Operations on organs. Obtained from [`Client::organs`].
pub struct Organs<'a> {
    client: &'a Client,
}

impl<'a> Organs<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: Option<&Options>) -> Result<Vec<OrganSummary>, Error> {
        self.client.get_all(&LIST, None, options).await
    }

    pub async fn get(&self, id: impl Into<OptionValue>) -> Result<OrganDetail, Error> {
        let id = item_id(id)?;
        self.client.get_one(&GET, Some(&id), None).await
    }

    pub async fn events(
        &self,
        id: impl Into<OptionValue>,
        options: Option<&Options>,
    ) -> Result<Vec<Event>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&EVENTS, Some(&id), options).await
    }

    pub async fn members(
        &self,
        id: impl Into<OptionValue>,
        options: Option<&Options>,
    ) -> Result<Vec<OrganMember>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&MEMBERS, Some(&id), options).await
    }

    /// Lists the votes held in the organ, 200 per page.
    pub async fn votes(
        &self,
        id: impl Into<OptionValue>,
        options: Option<&Options>,
    ) -> Result<Vec<Vote>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&VOTES, Some(&id), options).await
    }
}
