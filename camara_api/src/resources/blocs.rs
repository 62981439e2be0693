use super::item_id;
use crate::{
    query::{Endpoint, OptionKind, OptionSchema, OptionValue, Options},
    types::Bloc,
    Client, Error,
};

const COLLECTION: &str = "blocos";

pub const LIST: Endpoint = Endpoint::new(COLLECTION)
    .page_size(100)
    .options(OptionSchema::new(&[
        ("id", OptionKind::IntegerList),
        ("idLegislatura", OptionKind::IntegerList),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

pub const GET: Endpoint = Endpoint::new(COLLECTION);

/// Operations on party blocs. Obtained from [`Client::blocs`].
pub struct Blocs<'a> {
    client: &'a Client,
}

impl<'a> Blocs<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: Option<&Options>) -> Result<Vec<Bloc>, Error> {
        self.client.get_all(&LIST, None, options).await
    }

    pub async fn get(&self, id: impl Into<OptionValue>) -> Result<Bloc, Error> {
        let id = item_id(id)?;
        self.client.get_one(&GET, Some(&id), None).await
    }
}
