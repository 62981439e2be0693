//! Organ (`orgaos`) types: committees, the board, the plenary.

use serde::{Deserialize, Serialize};

/// Summary of an organ, as listed by `/orgaos` and embedded in events.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganSummary {
    pub id: i64,
    pub uri: String,
    pub sigla: Option<String>,
    pub nome: Option<String>,
    pub apelido: Option<String>,
    pub cod_tipo_orgao: Option<i64>,
    pub tipo_orgao: Option<String>,
    pub nome_publicacao: Option<String>,
    pub nome_resumido: Option<String>,
}

/// Full record returned by `/orgaos/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganDetail {
    #[serde(flatten)]
    pub organ: OrganSummary,
    pub data_inicio: Option<String>,
    pub data_instalacao: Option<String>,
    pub data_fim: Option<String>,
    pub data_fim_original: Option<String>,
    pub casa: Option<String>,
    pub sala: Option<String>,
    pub url_website: Option<String>,
}

/// A seat in an organ (`/orgaos/{id}/membros`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganMember {
    pub id: i64,
    pub uri: String,
    pub nome: String,
    pub sigla_partido: Option<String>,
    pub uri_partido: Option<String>,
    pub sigla_uf: Option<String>,
    pub id_legislatura: Option<i64>,
    pub url_foto: Option<String>,
    pub email: Option<String>,
    pub titulo: Option<String>,
    pub cod_titulo: Option<i64>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}
