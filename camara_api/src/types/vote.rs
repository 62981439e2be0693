//! Roll-call vote (`votacoes`) types.

use serde::{Deserialize, Serialize};

use super::Legislator;

/// Summary of a vote. Vote ids are strings such as `2265603-43`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: String,
    pub uri: String,
    pub data: Option<String>,
    pub data_hora_registro: Option<String>,
    pub sigla_orgao: Option<String>,
    pub uri_orgao: Option<String>,
    pub uri_evento: Option<String>,
    pub proposicao_objeto: Option<String>,
    pub uri_proposicao_objeto: Option<String>,
    pub descricao: Option<String>,
    /// 1 when approved, 0 when rejected, null when it does not apply.
    pub aprovacao: Option<i64>,
}

/// Full record returned by `/votacoes/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteDetail {
    #[serde(flatten)]
    pub vote: Vote,
    pub id_orgao: Option<i64>,
    pub id_evento: Option<i64>,
    pub desc_ultima_abertura_votacao: Option<String>,
    pub data_hora_ultima_abertura_votacao: Option<String>,
    pub ultima_apresentacao_proposicao: Option<BillPresentation>,
    #[serde(default)]
    pub efeitos_registrados: Vec<RecordedEffect>,
    #[serde(default)]
    pub objetos_possiveis: Vec<serde_json::Value>,
    #[serde(default)]
    pub proposicoes_afetadas: Vec<serde_json::Value>,
}

/// The last bill text presented before the vote.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillPresentation {
    pub data_hora_registro: Option<String>,
    pub descricao: Option<String>,
    pub uri_proposicao: Option<String>,
}

/// An effect the vote had on a bill.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordedEffect {
    pub data_hora_resultado: Option<String>,
    pub desc_resultado: Option<String>,
    pub titulo_proposicao: Option<String>,
    pub uri_proposicao: Option<String>,
}

/// How a party or bloc leadership advised its members to vote
/// (`/votacoes/{id}/orientacoes`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Orientation {
    pub orientacao_voto: Option<String>,
    pub cod_tipo_lideranca: Option<String>,
    pub sigla_partido_bloco: Option<String>,
    pub cod_partido_bloco: Option<i64>,
    pub uri_partido_bloco: Option<String>,
}

/// One legislator's ballot (`/votacoes/{id}/votos`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ballot {
    /// `Sim`, `Não`, `Abstenção`, `Obstrução` or `Artigo 17`.
    pub tipo_voto: String,
    pub data_registro_voto: Option<String>,
    #[serde(rename = "deputado_")]
    pub deputado: Legislator,
}
