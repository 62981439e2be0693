use serde::{Deserialize, Serialize};

/// Relation of a navigation link to the current page.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    First,
    Last,
    Next,
    #[serde(rename = "self")]
    Current,
    Previous,
    /// Any relation this client does not act on.
    #[serde(other)]
    Other,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Link {
    pub rel: Relation,
    pub href: Option<String>,
}

/// The `{ dados, links }` envelope around every response.
#[derive(Serialize, Deserialize, Debug)]
pub struct Page<T> {
    #[serde(rename = "dados", alias = "data")]
    pub data: T,
    pub links: Vec<Link>,
}
