//! Bills: `/proposicoes` and its sub-resources.

use super::item_id;
use crate::{
    query::{Endpoint, OptionKind, OptionSchema, OptionValue, Options},
    types::{Bill, BillAuthor, BillDetail, BillStatus, BillTheme, RelatedBill, Vote},
    Client, Error,
};

const COLLECTION: &str = "proposicoes";

pub const LIST: Endpoint = Endpoint::new(COLLECTION)
    .page_size(100)
    .options(OptionSchema::new(&[
        ("id", OptionKind::IntegerList),
        ("siglaTipo", OptionKind::StringList),
        ("numero", OptionKind::IntegerList),
        ("ano", OptionKind::IntegerList),
        ("idDeputadoAutor", OptionKind::IntegerList),
        ("autor", OptionKind::String),
        ("siglaPartidoAutor", OptionKind::StringList),
        ("idPartidoAutor", OptionKind::Integer),
        ("siglaUfAutor", OptionKind::StringList),
        ("keywords", OptionKind::StringList),
        ("tramitacaoSenado", OptionKind::Boolean),
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
        ("dataApresentacaoInicio", OptionKind::Date),
        ("dataApresentacaoFim", OptionKind::Date),
        ("codSituacao", OptionKind::IntegerList),
        ("codTema", OptionKind::IntegerList),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

pub const GET: Endpoint = Endpoint::new(COLLECTION);
pub const AUTHORS: Endpoint = Endpoint::new(COLLECTION).sub("autores");
pub const RELATED: Endpoint = Endpoint::new(COLLECTION).sub("relacionadas");
pub const THEMES: Endpoint = Endpoint::new(COLLECTION).sub("temas");

pub const HISTORY: Endpoint = Endpoint::new(COLLECTION)
    .sub("tramitacoes")
    .options(OptionSchema::new(&[
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
    ]));

pub const VOTES: Endpoint = Endpoint::new(COLLECTION)
    .sub("votacoes")
    .options(OptionSchema::new(&[
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

/// Operations on bills. Obtained from [`Client::bills`].
pub struct Bills<'a> {
    client: &'a Client,
}

impl<'a> Bills<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists bills. Without options the API returns those presented or
    /// moved in the last 30 days.
    pub async fn list(&self, options: Option<&Options>) -> Result<Vec<Bill>, Error> {
        self.client.get_all(&LIST, None, options).await
    }

    pub async fn get(&self, id: impl Into<OptionValue>) -> Result<BillDetail, Error> {
        let id = item_id(id)?;
        self.client.get_one(&GET, Some(&id), None).await
    }

    pub async fn authors(&self, id: impl Into<OptionValue>) -> Result<Vec<BillAuthor>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&AUTHORS, Some(&id), None).await
    }

    pub async fn related(&self, id: impl Into<OptionValue>) -> Result<Vec<RelatedBill>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&RELATED, Some(&id), None).await
    }

    pub async fn themes(&self, id: impl Into<OptionValue>) -> Result<Vec<BillTheme>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&THEMES, Some(&id), None).await
    }

    /// Lists every step the bill has gone through.
    pub async fn history(
        &self,
        id: impl Into<OptionValue>,
        options: Option<&Options>,
    ) -> Result<Vec<BillStatus>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&HISTORY, Some(&id), options).await
    }

    pub async fn votes(
        &self,
        id: impl Into<OptionValue>,
        options: Option<&Options>,
    ) -> Result<Vec<Vote>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&VOTES, Some(&id), options).await
    }
}
