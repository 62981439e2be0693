//! The options bag passed to every operation: [`Options`], [`OptionValue`] and [`SortOrder`].

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::Error;

/// A single option value, before it is validated against an operation's schema.
///
/// Calendar values are explicit variants so dates and times never have to be
/// guessed from a string at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Date(NaiveDate),
    Time(NaiveTime),
    /// A date and wall-clock time, in local time.
    Moment(NaiveDateTime),
    List(Vec<OptionValue>),
}

impl OptionValue {
    /// Short name of the value's shape, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            OptionValue::Int(_) => "an integer",
            OptionValue::Float(_) => "a number",
            OptionValue::Str(_) => "a string",
            OptionValue::Bool(_) => "a boolean",
            OptionValue::Date(_) => "a date",
            OptionValue::Time(_) => "a time",
            OptionValue::Moment(_) => "a date-time",
            OptionValue::List(_) => "a list",
        }
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Int(n) => write!(f, "{}", n),
            OptionValue::Float(n) => write!(f, "{}", n),
            OptionValue::Str(s) => write!(f, "{}", s),
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Date(d) => write!(f, "{}", d),
            OptionValue::Time(t) => write!(f, "{}", t),
            OptionValue::Moment(m) => write!(f, "{}", m),
            OptionValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}
impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value.into())
    }
}
impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Int(value.into())
    }
}
impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}
impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}
impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}
impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}
impl From<NaiveDate> for OptionValue {
    fn from(value: NaiveDate) -> Self {
        OptionValue::Date(value)
    }
}
impl From<NaiveTime> for OptionValue {
    fn from(value: NaiveTime) -> Self {
        OptionValue::Time(value)
    }
}
impl From<NaiveDateTime> for OptionValue {
    fn from(value: NaiveDateTime) -> Self {
        OptionValue::Moment(value)
    }
}
/// Zoned timestamps are reduced to their wall-clock fields in their own zone.
impl<Tz: TimeZone> From<DateTime<Tz>> for OptionValue {
    fn from(value: DateTime<Tz>) -> Self {
        OptionValue::Moment(value.naive_local())
    }
}
impl From<SortOrder> for OptionValue {
    fn from(value: SortOrder) -> Self {
        OptionValue::Str(value.to_string())
    }
}
impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(values: Vec<T>) -> Self {
        OptionValue::List(values.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<OptionValue> + Clone> From<&[T]> for OptionValue {
    fn from(values: &[T]) -> Self {
        OptionValue::List(values.iter().cloned().map(Into::into).collect())
    }
}
impl<T: Into<OptionValue>, const N: usize> From<[T; N]> for OptionValue {
    fn from(values: [T; N]) -> Self {
        OptionValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// An ordered bag of options. Keys keep the position of their first insertion,
/// and that order is the order of the pairs in the request URL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    entries: Vec<(String, OptionValue)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`. Replacing an existing key keeps its position.
    pub fn insert(&mut self, key: &str, value: impl Into<OptionValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets the sort direction (`ordem`).
    pub fn with_order(self, order: SortOrder) -> Self {
        self.with("ordem", order)
    }

    /// Sets the field the results are sorted by (`ordenarPor`).
    pub fn with_sort_by(self, field: &str) -> Self {
        self.with("ordenarPor", field)
    }

    /// Sets the start of the date range (`dataInicio`).
    pub fn with_start_date(self, date: impl Into<OptionValue>) -> Self {
        self.with("dataInicio", date)
    }

    /// Sets the end of the date range (`dataFim`).
    pub fn with_end_date(self, date: impl Into<OptionValue>) -> Self {
        self.with("dataFim", date)
    }

    /// Restricts results to the given legislatures (`idLegislatura`).
    pub fn with_legislatures(self, ids: &[i64]) -> Self {
        self.with("idLegislatura", ids)
    }
}

impl<K: AsRef<str>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (key, value) in iter {
            options.insert(key.as_ref(), value);
        }
        options
    }
}

/// Sort order for API results (`ordem`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// A to Z, 0 to 9. This is the API default.
    #[default]
    Asc,
    /// Z to A, 9 to 0.
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortOrder::Asc => "asc",
                SortOrder::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ASC" => Ok(SortOrder::Asc),
            "desc" | "DESC" => Ok(SortOrder::Desc),
            other => Err(Error::InvalidInput(format!(
                "`{}` is not a sort order; expected asc or desc",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn insertion_order_is_kept() {
        let options = Options::new()
            .with("ordenarPor", "nome")
            .with("id", vec![1, 2])
            .with("ordem", SortOrder::Desc);
        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["ordenarPor", "id", "ordem"]);
    }

    #[test]
    fn replacing_a_key_keeps_its_position() {
        let options = Options::new()
            .with("ordem", "asc")
            .with("nome", "Silva")
            .with("ordem", "desc");
        assert_eq!(options.len(), 2);
        let entries: Vec<(&str, String)> =
            options.iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(
            entries,
            vec![("ordem", "desc".to_string()), ("nome", "Silva".to_string())]
        );
    }

    #[test]
    fn conversions_pick_the_right_variant() {
        assert_eq!(OptionValue::from(5), OptionValue::Int(5));
        assert_eq!(OptionValue::from("x"), OptionValue::Str("x".to_string()));
        assert_eq!(
            OptionValue::from([525]),
            OptionValue::List(vec![OptionValue::Int(525)])
        );
        let date = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
        assert_eq!(OptionValue::from(date), OptionValue::Date(date));
        assert_eq!(
            OptionValue::from(SortOrder::Desc),
            OptionValue::Str("desc".to_string())
        );
    }

    #[test]
    fn common_helpers_use_wire_keys() {
        let options = Options::new()
            .with_start_date("2023-01-01")
            .with_end_date("2023-12-31")
            .with_legislatures(&[56, 57])
            .with_order(SortOrder::Asc)
            .with_sort_by("id");
        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["dataInicio", "dataFim", "idLegislatura", "ordem", "ordenarPor"]
        );
        assert_eq!(
            options.get("idLegislatura"),
            Some(&OptionValue::List(vec![
                OptionValue::Int(56),
                OptionValue::Int(57)
            ]))
        );
    }

    #[test]
    fn sort_order_parses() {
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        let err = "down".parse::<SortOrder>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: `down` is not a sort order; expected asc or desc");
    }
}
