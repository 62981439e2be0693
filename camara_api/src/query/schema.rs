use super::OptionValue;

/// How an option's value is validated and encoded into the query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    /// One non-negative id, `key=123`.
    Integer,
    /// Repeated ids, `key=1&key=2`.
    IntegerList,
    /// One string, `key=value`.
    String,
    /// Repeated strings, `key=a&key=b`.
    StringList,
    /// One `AAAA-MM-DD` date.
    Date,
    /// One `HH:MM` time.
    Time,
    /// `key=true` or `key=false`.
    Boolean,
}

impl OptionKind {
    /// Describes the expected value, for error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            OptionKind::Integer => "an integer",
            OptionKind::IntegerList | OptionKind::StringList => "a list",
            OptionKind::String => "a string",
            OptionKind::Date => "a date",
            OptionKind::Time => "a time",
            OptionKind::Boolean => "a boolean",
        }
    }

    /// Parses a raw textual value (from a command line, a config file) into
    /// the value shape this kind expects. List kinds split on commas. Values
    /// that do not parse are kept as strings, so validation reports them.
    pub fn parse(&self, raw: &str) -> OptionValue {
        match self {
            OptionKind::Integer => parse_int(raw),
            OptionKind::IntegerList => OptionValue::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(parse_int)
                    .collect(),
            ),
            OptionKind::StringList => OptionValue::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| OptionValue::Str(s.to_string()))
                    .collect(),
            ),
            OptionKind::Boolean => match raw {
                "true" => OptionValue::Bool(true),
                "false" => OptionValue::Bool(false),
                _ => OptionValue::Str(raw.to_string()),
            },
            OptionKind::String | OptionKind::Date | OptionKind::Time => {
                OptionValue::Str(raw.to_string())
            }
        }
    }
}

fn parse_int(raw: &str) -> OptionValue {
    raw.trim()
        .parse::<i64>()
        .map(OptionValue::Int)
        .unwrap_or_else(|_| OptionValue::Str(raw.to_string()))
}

/// The option keys an operation accepts, with the kind of each.
#[derive(Clone, Copy, Debug)]
pub struct OptionSchema {
    entries: &'static [(&'static str, OptionKind)],
}

impl OptionSchema {
    /// A schema that accepts no options at all.
    pub const NONE: OptionSchema = OptionSchema::new(&[]);

    pub const fn new(entries: &'static [(&'static str, OptionKind)]) -> Self {
        Self { entries }
    }

    pub fn kind_of(&self, key: &str) -> Option<OptionKind> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, kind)| *kind)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        let entries: &'static [(&'static str, OptionKind)] = self.entries;
        entries.iter().map(|(k, _)| *k)
    }
}
