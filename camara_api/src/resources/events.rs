//! Events: `/eventos` and its sub-resources.

use super::item_id;
use crate::{
    query::{Endpoint, OptionKind, OptionSchema, OptionValue, Options},
    types::{AgendaItem, Event, EventDetail, Legislator, OrganSummary, Vote},
    Client, Error,
};

const COLLECTION: &str = "eventos";

pub const LIST: Endpoint = Endpoint::new(COLLECTION)
    .page_size(100)
    .options(OptionSchema::new(&[
        ("id", OptionKind::IntegerList),
        ("codTipoEvento", OptionKind::IntegerList),
        ("codSituacao", OptionKind::IntegerList),
        ("codTipoOrgao", OptionKind::IntegerList),
        ("idOrgao", OptionKind::IntegerList),
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
        ("horaInicio", OptionKind::Time),
        ("horaFim", OptionKind::Time),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

pub const GET: Endpoint = Endpoint::new(COLLECTION);
pub const LEGISLATORS: Endpoint = Endpoint::new(COLLECTION).sub("deputados");
pub const ORGANS: Endpoint = Endpoint::new(COLLECTION).sub("orgaos");
pub const AGENDA: Endpoint = Endpoint::new(COLLECTION).sub("pauta");
pub const VOTES: Endpoint = Endpoint::new(COLLECTION).sub("votacoes");

/// Operations on events. Obtained from [`Client::events`].
pub struct Events<'a> {
    client: &'a Client,
}

impl<'a> Events<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists events. Without dates the API returns a window around today.
    pub async fn list(&self, options: Option<&Options>) -> Result<Vec<Event>, Error> {
        self.client.get_all(&LIST, None, options).await
    }

    pub async fn get(&self, id: impl Into<OptionValue>) -> Result<EventDetail, Error> {
        let id = item_id(id)?;
        self.client.get_one(&GET, Some(&id), None).await
    }

    /// Lists the legislators that attended the event.
    pub async fn legislators(&self, id: impl Into<OptionValue>) -> Result<Vec<Legislator>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&LEGISLATORS, Some(&id), None).await
    }

    /// Lists the organs that organized the event.
    pub async fn organs(&self, id: impl Into<OptionValue>) -> Result<Vec<OrganSummary>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&ORGANS, Some(&id), None).await
    }

    pub async fn agenda(&self, id: impl Into<OptionValue>) -> Result<Vec<AgendaItem>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&AGENDA, Some(&id), None).await
    }

    /// Lists the votes held during the event.
    pub async fn votes(&self, id: impl Into<OptionValue>) -> Result<Vec<Vote>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&VOTES, Some(&id), None).await
    }
}
