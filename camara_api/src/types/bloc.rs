use serde::{Deserialize, Serialize};

use super::de;

/// A bloc of parties acting together in a legislature.
///
/// The API sends `id` and `idLegislatura` as strings; both are parsed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bloc {
    #[serde(deserialize_with = "de::number_or_string")]
    pub id: i64,
    pub nome: String,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub id_legislatura: Option<i64>,
    pub uri: String,
}
