use super::item_id;
use crate::{
    query::{Endpoint, OptionKind, OptionSchema, OptionValue, Options},
    types::{BoardMember, Legislature, LegislatureLeader},
    Client, Error,
};

const COLLECTION: &str = "legislaturas";

pub const LIST: Endpoint = Endpoint::new(COLLECTION)
    .page_size(100)
    .options(OptionSchema::new(&[
        ("id", OptionKind::IntegerList),
        ("data", OptionKind::Date),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

pub const GET: Endpoint = Endpoint::new(COLLECTION);
pub const LEADERS: Endpoint = Endpoint::new(COLLECTION).sub("lideres").page_size(100);
pub const BOARD: Endpoint = Endpoint::new(COLLECTION)
    .sub("mesa")
    .options(OptionSchema::new(&[
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
    ]));

/// Operations on legislatures. Obtained from [`Client::legislatures`].
pub struct Legislatures<'a> {
    client: &'a Client,
}

impl<'a> Legislatures<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: Option<&Options>) -> Result<Vec<Legislature>, Error> {
        self.client.get_all(&LIST, None, options).await
    }

    pub async fn get(&self, id: impl Into<OptionValue>) -> Result<Legislature, Error> {
        let id = item_id(id)?;
        self.client.get_one(&GET, Some(&id), None).await
    }

    pub async fn leaders(&self, id: impl Into<OptionValue>) -> Result<Vec<LegislatureLeader>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&LEADERS, Some(&id), None).await
    }

    /// Lists the board members of the legislature, optionally for a date range.
    pub async fn board(
        &self,
        id: impl Into<OptionValue>,
        options: Option<&Options>,
    ) -> Result<Vec<BoardMember>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&BOARD, Some(&id), options).await
    }
}
