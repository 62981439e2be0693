//! Party (`partidos`) types.

use serde::{Deserialize, Serialize};

use super::{de, Legislator};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: i64,
    pub sigla: String,
    pub nome: String,
    pub uri: String,
}

/// Full record returned by `/partidos/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartyDetail {
    #[serde(flatten)]
    pub party: Party,
    pub status: Option<PartyStatus>,
    pub numero_eleitoral: Option<i64>,
    pub url_logo: Option<String>,
    pub url_web_site: Option<String>,
    pub url_facebook: Option<String>,
}

/// Current standing of a party. Counts arrive as strings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartyStatus {
    pub data: Option<String>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub id_legislatura: Option<i64>,
    /// `Ativo` or `Inativo`.
    pub situacao: Option<String>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub total_posse: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub total_membros: Option<i64>,
    pub uri_membros: Option<String>,
    pub lider: Option<PartyLeaderSummary>,
}

/// The leader embedded in a party's status.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartyLeaderSummary {
    pub uri: Option<String>,
    pub nome: Option<String>,
    pub sigla_partido: Option<String>,
    pub uri_partido: Option<String>,
    pub uf: Option<String>,
    pub id_legislatura: Option<i64>,
    pub url_foto: Option<String>,
}

/// A leadership post in a party (`/partidos/{id}/lideres`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartyLeader {
    #[serde(flatten)]
    pub legislator: Legislator,
    pub titulo: Option<String>,
    pub cod_titulo: Option<i64>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}
