//! Roll-call votes: `/votacoes` and its sub-resources.

use crate::{
    query::{Endpoint, OptionKind, OptionSchema, Options},
    types::{Ballot, Orientation, Vote, VoteDetail},
    Client, Error,
};

const COLLECTION: &str = "votacoes";

pub const LIST: Endpoint = Endpoint::new(COLLECTION)
    .page_size(100)
    .options(OptionSchema::new(&[
        ("id", OptionKind::StringList),
        ("idProposicao", OptionKind::IntegerList),
        ("idEvento", OptionKind::IntegerList),
        ("idOrgao", OptionKind::IntegerList),
        ("dataInicio", OptionKind::Date),
        ("dataFim", OptionKind::Date),
        ("ordem", OptionKind::String),
        ("ordenarPor", OptionKind::String),
    ]));

pub const GET: Endpoint = Endpoint::new(COLLECTION);
pub const ORIENTATIONS: Endpoint = Endpoint::new(COLLECTION).sub("orientacoes");
pub const BALLOTS: Endpoint = Endpoint::new(COLLECTION).sub("votos");

/// Vote ids are opaque strings such as `2265603-43`.
fn vote_id(id: &str) -> Result<&str, Error> {
    let id = id.trim();
    if id.is_empty() {
        return Err(Error::InvalidInput("vote id must not be empty".to_string()));
    }
    Ok(id)
}

/// Operations on roll-call votes. Obtained from [`Client::votes`].
pub struct Votes<'a> {
    client: &'a Client,
}

impl<'a> Votes<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: Option<&Options>) -> Result<Vec<Vote>, Error> {
        self.client.get_all(&LIST, None, options).await
    }

    pub async fn get(&self, id: &str) -> Result<VoteDetail, Error> {
        let id = vote_id(id)?;
        self.client.get_one(&GET, Some(id), None).await
    }

    /// Lists the leadership orientations given for the vote.
    pub async fn orientations(&self, id: &str) -> Result<Vec<Orientation>, Error> {
        let id = vote_id(id)?;
        self.client.get_all(&ORIENTATIONS, Some(id), None).await
    }

    /// Lists how each legislator voted. Empty for symbolic votes.
    pub async fn ballots(&self, id: &str) -> Result<Vec<Ballot>, Error> {
        let id = vote_id(id)?;
        self.client.get_all(&BALLOTS, Some(id), None).await
    }
}
