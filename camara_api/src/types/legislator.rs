//! Legislator (`deputados`) types.
//!
//! Field names follow the wire keys of the API, in snake case.

use serde::{Deserialize, Serialize};

use super::{EventPhase, OrganSummary, Venue};

/// Summary of a legislator, as listed by `/deputados` and embedded in many
/// other resources (event attendance, party members, board members).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Legislator {
    pub id: i64,
    pub uri: String,
    pub nome: String,
    pub sigla_partido: Option<String>,
    pub uri_partido: Option<String>,
    /// Two-letter state code.
    pub sigla_uf: Option<String>,
    pub id_legislatura: Option<i64>,
    pub url_foto: Option<String>,
    pub email: Option<String>,
}

/// Full record returned by `/deputados/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegislatorDetail {
    pub id: i64,
    pub uri: String,
    pub nome_civil: String,
    pub cpf: Option<String>,
    pub sexo: Option<String>,
    pub url_website: Option<String>,
    #[serde(default)]
    pub rede_social: Vec<String>,
    pub data_nascimento: Option<String>,
    pub data_falecimento: Option<String>,
    pub uf_nascimento: Option<String>,
    pub municipio_nascimento: Option<String>,
    pub escolaridade: Option<String>,
    pub ultimo_status: LegislatorStatus,
}

/// The latest mandate status of a legislator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegislatorStatus {
    #[serde(flatten)]
    pub legislator: Legislator,
    pub data: Option<String>,
    pub nome_eleitoral: Option<String>,
    pub gabinete: Option<Office>,
    pub situacao: Option<String>,
    pub condicao_eleitoral: Option<String>,
    pub descricao_status: Option<String>,
}

/// A legislator's office in the Chamber buildings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    pub nome: Option<String>,
    pub predio: Option<String>,
    pub sala: Option<String>,
    pub andar: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
}

/// One reimbursed expense (`/deputados/{id}/despesas`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub ano: i64,
    pub mes: i64,
    pub tipo_despesa: String,
    pub cod_documento: Option<i64>,
    pub tipo_documento: Option<String>,
    pub cod_tipo_documento: Option<i64>,
    pub data_documento: Option<String>,
    pub num_documento: Option<String>,
    pub valor_documento: f64,
    pub url_documento: Option<String>,
    pub nome_fornecedor: Option<String>,
    pub cnpj_cpf_fornecedor: Option<String>,
    pub valor_liquido: f64,
    pub valor_glosa: f64,
    pub num_ressarcimento: Option<String>,
    pub cod_lote: Option<i64>,
    pub parcela: Option<i64>,
}

/// A floor speech (`/deputados/{id}/discursos`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Speech {
    pub data_hora_inicio: String,
    pub data_hora_fim: Option<String>,
    pub uri_evento: Option<String>,
    pub fase_evento: Option<EventPhase>,
    pub tipo_discurso: Option<String>,
    pub url_texto: Option<String>,
    pub url_audio: Option<String>,
    pub url_video: Option<String>,
    pub keywords: Option<String>,
    pub sumario: Option<String>,
    pub transcricao: Option<String>,
}

/// An event a legislator took part in (`/deputados/{id}/eventos`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegislatorEvent {
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

/// A past occupation (`/deputados/{id}/ocupacoes`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Occupation {
    pub titulo: Option<String>,
    pub entidade: Option<String>,
    #[serde(rename = "entidadeUF")]
    pub entidade_uf: Option<String>,
    pub entidade_pais: Option<String>,
    pub ano_inicio: Option<i64>,
    pub ano_fim: Option<i64>,
}

/// A committee seat held by a legislator (`/deputados/{id}/orgaos`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegislatorOrgan {
    pub id_orgao: i64,
    pub uri_orgao: String,
    pub sigla_orgao: Option<String>,
    pub nome_orgao: Option<String>,
    pub nome_publicacao: Option<String>,
    pub titulo: Option<String>,
    pub cod_titulo: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}

/// A declared profession (`/deputados/{id}/profissoes`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profession {
    pub data_hora: Option<String>,
    pub cod_tipo_profissao: Option<i64>,
    pub titulo: Option<String>,
}
