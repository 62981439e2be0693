//! Bill (`proposicoes`) types.

use serde::{Deserialize, Serialize};

use super::de;

/// Summary of a bill, as listed by `/proposicoes`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: i64,
    pub uri: String,
    /// Type abbreviation, e.g. `PL` or `PEC`.
    pub sigla_tipo: String,
    pub cod_tipo: Option<i64>,
    pub numero: i64,
    pub ano: i64,
    pub ementa: Option<String>,
}

/// A bill attached to another one (`/proposicoes/{id}/relacionadas`).
///
/// Unlike [`Bill`], the API sends `codTipo`, `numero` and `ano` as strings
/// here; they are normalized to numbers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedBill {
    pub id: i64,
    pub uri: String,
    pub sigla_tipo: Option<String>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub cod_tipo: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub numero: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub ano: Option<i64>,
    pub ementa: Option<String>,
}

/// Full record returned by `/proposicoes/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillDetail {
    #[serde(flatten)]
    pub bill: Bill,
    pub data_apresentacao: Option<String>,
    pub uri_orgao_numerador: Option<String>,
    pub status_proposicao: Option<BillStatus>,
    pub uri_autores: Option<String>,
    pub descricao_tipo: Option<String>,
    pub ementa_detalhada: Option<String>,
    pub keywords: Option<String>,
    pub uri_prop_principal: Option<String>,
    pub uri_prop_anterior: Option<String>,
    pub uri_prop_posterior: Option<String>,
    pub url_inteiro_teor: Option<String>,
    pub urn_final: Option<String>,
    pub texto: Option<String>,
    pub justificativa: Option<String>,
}

/// One step in a bill's progress. Also the element of `/proposicoes/{id}/tramitacoes`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillStatus {
    pub data_hora: Option<String>,
    pub sequencia: Option<i64>,
    pub sigla_orgao: Option<String>,
    pub uri_orgao: Option<String>,
    pub uri_ultimo_relator: Option<String>,
    pub regime: Option<String>,
    pub descricao_tramitacao: Option<String>,
    pub cod_tipo_tramitacao: Option<String>,
    pub descricao_situacao: Option<String>,
    pub cod_situacao: Option<i64>,
    pub despacho: Option<String>,
    pub url: Option<String>,
    pub ambito: Option<String>,
}

/// An author of a bill. `uri` points at a legislator, an organ, or nothing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillAuthor {
    pub uri: Option<String>,
    pub nome: String,
    pub cod_tipo: Option<i64>,
    pub tipo: Option<String>,
    pub ordem_assinatura: Option<i64>,
    pub proponente: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillTheme {
    pub cod_tema: i64,
    pub tema: String,
    pub relevancia: Option<i64>,
}
