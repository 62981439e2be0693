//! Parliamentary front (`frentes`) types.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Front {
    pub id: i64,
    pub uri: String,
    pub titulo: String,
    pub id_legislatura: Option<i64>,
}

/// Full record returned by `/frentes/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrontDetail {
    #[serde(flatten)]
    pub front: Front,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub keywords: Option<String>,
    pub id_situacao: Option<i64>,
    pub situacao: Option<String>,
    pub url_website: Option<String>,
    pub url_documento: Option<String>,
    pub coordenador: Option<FrontCoordinator>,
}

/// The coordinator of a front. Every field may be null.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrontCoordinator {
    pub id: Option<i64>,
    pub uri: Option<String>,
    pub nome: Option<String>,
    pub sigla_partido: Option<String>,
    pub uri_partido: Option<String>,
    pub sigla_uf: Option<String>,
    pub id_legislatura: Option<i64>,
    pub url_foto: Option<String>,
    pub email: Option<String>,
}

/// A member of a front (`/frentes/{id}/membros`). Every field may be null.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrontMember {
    pub id: Option<i64>,
    pub uri: Option<String>,
    pub nome: Option<String>,
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
