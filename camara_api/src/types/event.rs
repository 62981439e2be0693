//! Event (`eventos`) types: sessions, hearings, meetings.

use serde::{Deserialize, Serialize};

use super::{Bill, Legislator, OrganSummary, RelatedBill};

/// Where inside the Chamber an event takes place.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub nome: Option<String>,
    pub predio: Option<String>,
    pub sala: Option<String>,
    pub andar: Option<String>,
}

/// The phase of an event during which something happened.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventPhase {
    pub titulo: Option<String>,
    pub data_hora_inicio: Option<String>,
    pub data_hora_fim: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub uri: String,
    pub data_hora_inicio: String,
    pub data_hora_fim: Option<String>,
    pub situacao: Option<String>,
    pub descricao_tipo: Option<String>,
    pub descricao: Option<String>,
    pub local_externo: Option<String>,
    #[serde(default)]
    pub orgaos: Vec<OrganSummary>,
    pub local_camara: Option<Venue>,
    pub url_registro: Option<String>,
}

/// Full record returned by `/eventos/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub uri_deputados: Option<String>,
    pub uri_convidados: Option<String>,
    pub fases: Option<serde_json::Value>,
    #[serde(default)]
    pub requerimentos: Vec<Requirement>,
    pub url_documento_pauta: Option<String>,
}

/// A motion that requested the event.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Requirement {
    pub titulo: String,
    pub uri: String,
}

/// One item of an event's agenda (`/eventos/{id}/pauta`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    pub ordem: i64,
    pub topico: Option<String>,
    pub regime: Option<String>,
    pub cod_regime: Option<i64>,
    pub titulo: Option<String>,
    #[serde(rename = "proposicao_")]
    pub proposicao: Option<Bill>,
    pub relator: Option<Legislator>,
    pub texto_parecer: Option<String>,
    #[serde(rename = "proposicaoRelacionada_")]
    pub proposicao_relacionada: Option<RelatedBill>,
    pub uri_votacao: Option<String>,
    pub situacao_item: Option<String>,
}
