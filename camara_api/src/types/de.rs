//! Lenient deserializers for fields the API sends either as numbers or as
//! numeric strings, depending on the endpoint.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

fn parse<E: de::Error>(raw: &str) -> Result<i64, E> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| E::custom(format!("expected a numeric string, got {:?}", raw)))
}

/// Accepts `123` or `"123"`.
pub fn number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => parse(&s),
    }
}

/// Accepts `123`, `"123"`, `null` or `""`. Use with `#[serde(default)]`.
pub fn opt_number_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(s)) => parse(&s).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        #[serde(deserialize_with = "number_or_string")]
        id: i64,
        #[serde(default, deserialize_with = "opt_number_or_string")]
        ano: Option<i64>,
    }

    #[test]
    fn numbers_and_strings_are_both_accepted() {
        let a: Sample = serde_json::from_str(r#"{"id": 585, "ano": "2019"}"#).unwrap();
        let b: Sample = serde_json::from_str(r#"{"id": "585", "ano": 2019}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.ano, Some(2019));
    }

    #[test]
    fn blank_and_missing_optionals() {
        let s: Sample = serde_json::from_str(r#"{"id": 1, "ano": ""}"#).unwrap();
        assert_eq!(s.ano, None);
        let s: Sample = serde_json::from_str(r#"{"id": 1, "ano": null}"#).unwrap();
        assert_eq!(s.ano, None);
        let s: Sample = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(s.ano, None);
    }

    #[test]
    fn non_numeric_strings_fail() {
        assert!(serde_json::from_str::<Sample>(r#"{"id": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"id": true}"#).is_err());
    }
}
