use serde::{Deserialize, Serialize};

use super::Legislator;

/// A four-year legislative term.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Legislature {
    pub id: i64,
    pub uri: String,
    pub data_inicio: String,
    pub data_fim: String,
}

/// A leadership post held during a legislature (`/legislaturas/{id}/lideres`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegislatureLeader {
    pub parlamentar: Legislator,
    pub titulo: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}

/// A seat on the Chamber's board (`/legislaturas/{id}/mesa`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardMember {
    #[serde(flatten)]
    pub legislator: Legislator,
    pub titulo: Option<String>,
    pub cod_titulo: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}
