//! Serialization of an [`Options`] bag into query pairs, checked against an [`OptionSchema`].

use url::Url;

use super::{OptionKind, OptionSchema, OptionValue, Options};
use crate::{
    validate::{validate_date, validate_id, validate_time},
    Error,
};

/// Appends every option to `base` as `key=value` pairs, in insertion order.
///
/// List kinds produce one pair per element. Keys missing from `schema` fail
/// with [`Error::UnknownOption`]; values of the wrong shape fail with
/// [`Error::TypeMismatch`] or, for dates, times and ids, [`Error::InvalidInput`].
///
/// Values are form-urlencoded: `14:30` is sent as `14%3A30` and a space as
/// `+`. The API decodes both back to the raw `HH:MM` and text values.
pub fn build_url(base: &Url, options: Option<&Options>, schema: &OptionSchema) -> Result<Url, Error> {
    let Some(options) = options else {
        return Ok(base.clone());
    };

    let mut url = base.clone();
    for (key, value) in options.iter() {
        let kind = schema.kind_of(key).ok_or_else(|| Error::UnknownOption {
            key: key.to_string(),
        })?;

        match kind {
            OptionKind::IntegerList => {
                for item in expect_list(key, value, kind)? {
                    let id = validate_id(item)?;
                    url.query_pairs_mut().append_pair(key, &id.to_string());
                }
            }
            OptionKind::StringList => {
                for item in expect_list(key, value, kind)? {
                    match item {
                        OptionValue::Str(s) => {
                            url.query_pairs_mut().append_pair(key, s);
                        }
                        other => {
                            tracing::warn!(
                                "Skipping {} in `{}`: only strings are sent",
                                other.kind_name(),
                                key
                            );
                        }
                    }
                }
            }
            OptionKind::Date => {
                url.query_pairs_mut().append_pair(key, &validate_date(value)?);
            }
            OptionKind::Time => {
                url.query_pairs_mut().append_pair(key, &validate_time(value)?);
            }
            OptionKind::Boolean => match value {
                OptionValue::Bool(b) => {
                    url.query_pairs_mut()
                        .append_pair(key, if *b { "true" } else { "false" });
                }
                other => return Err(mismatch(key, kind, other)),
            },
            OptionKind::String => match value {
                OptionValue::Str(s) => {
                    url.query_pairs_mut().append_pair(key, s);
                }
                other => return Err(mismatch(key, kind, other)),
            },
            OptionKind::Integer => {
                let id = validate_id(value)?;
                url.query_pairs_mut().append_pair(key, &id.to_string());
            }
        }
    }

    Ok(url)
}

fn expect_list<'a>(
    key: &str,
    value: &'a OptionValue,
    kind: OptionKind,
) -> Result<&'a [OptionValue], Error> {
    match value {
        OptionValue::List(items) => Ok(items),
        other => Err(mismatch(key, kind, other)),
    }
}

fn mismatch(key: &str, kind: OptionKind, found: &OptionValue) -> Error {
    Error::TypeMismatch {
        key: key.to_string(),
        expected: kind.expected(),
        found: found.kind_name(),
    }
}
