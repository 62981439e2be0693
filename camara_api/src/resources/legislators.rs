//! Legislators: `/deputados` and its sub-resources.

use super::item_id;
use crate::{
    query::{Endpoint, OptionKind, OptionSchema, OptionValue, Options},
    types::{
        Expense, Front, Legislator, LegislatorDetail, LegislatorEvent, LegislatorOrgan,
        Occupation, Profession, Speech,
    },
    Client, Error,
};

const COLLECTION: &str = "deputados";

pub const LIST: Endpoint = Endpoint::new(COLLECTION)
    .page_size(100)
    .options(OptionSchema::new(&[
        ("id", OptionKind::IntegerList),
        ("idLegislatura", OptionKind::IntegerList),
        ("nome", OptionKind::String),
        ("siglaPartido", OptionKind::StringList),
        ("siglaSexo", OptionKind::String),
        ("siglaUf", OptionKind::StringList),
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

pub const GET: Endpoint = Endpoint::new(COLLECTION);

pub const EXPENSES: Endpoint = Endpoint::new(COLLECTION)
    .sub("despesas")
    .page_size(100)
    .options(OptionSchema::new(&[
        ("ano", OptionKind::IntegerList),
        ("mes", OptionKind::IntegerList),
        ("idLegislatura", OptionKind::IntegerList),
        ("cnpjCpfFornecedor", OptionKind::String),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

pub const SPEECHES: Endpoint = Endpoint::new(COLLECTION)
    .sub("discursos")
    .page_size(100)
    .options(OptionSchema::new(&[
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
        ("idLegislatura", OptionKind::IntegerList),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

pub const EVENTS: Endpoint = Endpoint::new(COLLECTION)
    .sub("eventos")
    .page_size(100)
    .options(DATED_AND_SORTED);

pub const FRONTS: Endpoint = Endpoint::new(COLLECTION).sub("frentes");

pub const OCCUPATIONS: Endpoint = Endpoint::new(COLLECTION).sub("ocupacoes");

pub const ORGANS: Endpoint = Endpoint::new(COLLECTION)
    .sub("orgaos")
    .page_size(100)
    .options(DATED_AND_SORTED);

pub const PROFESSIONS: Endpoint = Endpoint::new(COLLECTION).sub("profissoes");

const DATED_AND_SORTED: OptionSchema = OptionSchema::new(&[
    ("dataInicio", OptionKind::Date),
    ("dataFim", OptionKind::Date),
    ("ordem", OptionKind::String),
    ("ordenarPor", OptionKind::String),
]);

/// Operations on legislators. Obtained from [`Client::legislators`].
pub struct Legislators<'a> {
    client: &'a Client,
}

impl<'a> Legislators<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists legislators. Without options the API returns those in office.
    pub async fn list(&self, options: Option<&Options>) -> Result<Vec<Legislator>, Error> {
        self.client.get_all(&LIST, None, options).await
    }

    pub async fn get(&self, id: impl Into<OptionValue>) -> Result<LegislatorDetail, Error> {
        let id = item_id(id)?;
        self.client.get_one(&GET, Some(&id), None).await
    }

    /// Lists reimbursed expenses. Without options the API covers the last six months.
    pub async fn expenses(
        &self,
        id: impl Into<OptionValue>,
        options: Option<&Options>,
    ) -> Result<Vec<Expense>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&EXPENSES, Some(&id), options).await
    }

    pub async fn speeches(
        &self,
        id: impl Into<OptionValue>,
        options: Option<&Options>,
    ) -> Result<Vec<Speech>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&SPEECHES, Some(&id), options).await
    }

    pub async fn events(
        &self,
        id: impl Into<OptionValue>,
        options: Option<&Options>,
    ) -> Result<Vec<LegislatorEvent>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&EVENTS, Some(&id), options).await
    }

    /// Lists the parliamentary fronts the legislator belongs to.
    pub async fn fronts(&self, id: impl Into<OptionValue>) -> Result<Vec<Front>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&FRONTS, Some(&id), None).await
    }

    pub async fn occupations(&self, id: impl Into<OptionValue>) -> Result<Vec<Occupation>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&OCCUPATIONS, Some(&id), None).await
    }

    /// Lists the organs the legislator has held a seat in.
    pub async fn organs(
        &self,
        id: impl Into<OptionValue>,
        options: Option<&Options>,
    ) -> Result<Vec<LegislatorOrgan>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&ORGANS, Some(&id), options).await
    }

    pub async fn professions(&self, id: impl Into<OptionValue>) -> Result<Vec<Profession>, Error> {
        let id = item_id(id)?;
        self.client.get_all(&PROFESSIONS, Some(&id), None).await
    }
}
