//! CLI subcommand implementations, one module per resource collection.

pub mod bills;
pub mod blocs;
pub mod events;
pub mod fronts;
pub mod legislators;
pub mod legislatures;
pub mod organs;
pub mod parties;
pub mod votes;

use anyhow::{anyhow, bail, Context, Result};
use camara_api::{query::Endpoint, Options};
use clap::Args;
use serde::Serialize;
use serde_json::Value;

#[derive(Args)]
pub struct QueryArgs {
    /// Operation to run, e.g. list, get, expenses
    pub operation: String,

    /// Item id, required by every operation except list
    pub id: Option<String>,

    /// Filter as KEY=VALUE using the API's own names (e.g. siglaUf=SP,RJ).
    /// Repeatable; list values are comma separated
    #[arg(short = 'f', long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,
}

impl QueryArgs {
    /// The numeric item id.
    pub fn numeric_id(&self) -> Result<i64> {
        let raw = self.raw_id()?;
        raw.trim()
            .parse::<i64>()
            .with_context(|| format!("`{}` is not a numeric id", raw))
    }

    /// The item id as given.
    pub fn raw_id(&self) -> Result<&str> {
        self.id
            .as_deref()
            .ok_or_else(|| anyhow!("`{}` needs an item id", self.operation))
    }

    /// Converts the filters into options typed after `endpoint`'s schema.
    /// `None` when no filter was given.
    pub fn options(&self, endpoint: &Endpoint) -> Result<Option<Options>> {
        parse_filters(&self.filters, endpoint)
    }
}

/// Parses `KEY=VALUE` filters. Keys the endpoint does not know are passed
/// through as strings so the client reports them.
pub fn parse_filters(filters: &[String], endpoint: &Endpoint) -> Result<Option<Options>> {
    if filters.is_empty() {
        return Ok(None);
    }
    let mut options = Options::new();
    for filter in filters {
        let Some((key, raw)) = filter.split_once('=') else {
            bail!("Filter `{}` should look like KEY=VALUE", filter);
        };
        let key = key.trim();
        match endpoint.options.kind_of(key) {
            Some(kind) => options.insert(key, kind.parse(raw)),
            None => options.insert(key, raw),
        }
    }
    Ok(Some(options))
}

pub fn to_value<T: Serialize>(data: T) -> Result<Value> {
    serde_json::to_value(data).context("Failed to serialize the response")
}

pub fn unknown_operation(resource: &str, operation: &str, known: &[&str]) -> anyhow::Error {
    anyhow!(
        "`{}` is not an operation on {}; expected one of: {}",
        operation,
        resource,
        known.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use camara_api::{resources::legislators, OptionValue};

    use super::*;

    fn filters(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn filters_follow_the_schema() {
        let options = parse_filters(
            &filters(&["siglaUf=SP,RJ", "id=525", "nome=Silva", "dataInicio=2023-02-01"]),
            &legislators::LIST,
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            options.get("siglaUf"),
            Some(&OptionValue::List(vec![
                OptionValue::Str("SP".to_string()),
                OptionValue::Str("RJ".to_string()),
            ]))
        );
        assert_eq!(
            options.get("id"),
            Some(&OptionValue::List(vec![OptionValue::Int(525)]))
        );
        assert_eq!(options.get("nome"), Some(&OptionValue::Str("Silva".to_string())));
    }

    #[test]
    fn no_filters_means_no_options() {
        assert!(parse_filters(&[], &legislators::LIST).unwrap().is_none());
    }

    #[test]
    fn malformed_filters() {
        assert!(parse_filters(&filters(&["siglaUf"]), &legislators::LIST).is_err());
    }

    #[test]
    fn unknown_keys_pass_through() {
        let options = parse_filters(&filters(&["cor=azul"]), &legislators::LIST)
            .unwrap()
            .unwrap();
        assert_eq!(options.get("cor"), Some(&OptionValue::Str("azul".to_string())));
    }

    #[test]
    fn ids() {
        let args = QueryArgs {
            operation: "get".to_string(),
            id: Some("204554".to_string()),
            filters: vec![],
        };
        assert_eq!(args.numeric_id().unwrap(), 204554);

        let args = QueryArgs {
            operation: "get".to_string(),
            id: None,
            filters: vec![],
        };
        assert!(args.numeric_id().is_err());
    }
}
