//! Validation of the primitive option values the API understands: dates
//! (`AAAA-MM-DD`), times (`HH:MM`) and numeric identifiers.

use chrono::{Datelike, Timelike};
use regex::Regex;

use crate::{query::OptionValue, Error};

/// Validates a date option and returns it in the `AAAA-MM-DD` wire format.
///
/// Strings must already be in that format; calendar values are converted from
/// their local year, month and day. The day is only checked against 31, not
/// against the length of the month.
pub fn validate_date(value: &OptionValue) -> Result<String, Error> {
    match value {
        OptionValue::Str(s) => {
            // ASCII digits only.
            let re = Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$")
                .map_err(|e| Error::InvalidInput(format!("regex compile error: {}", e)))?;
            let caps = re.captures(s).ok_or_else(|| invalid_date(value))?;
            parse_field(&caps[1]).ok_or_else(|| invalid_date(value))?;
            let month = parse_field(&caps[2]).ok_or_else(|| invalid_date(value))?;
            let day = parse_field(&caps[3]).ok_or_else(|| invalid_date(value))?;
            if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
                return Err(invalid_date(value));
            }
            Ok(s.clone())
        }
        OptionValue::Date(d) => format_date(d.year(), d.month(), d.day(), value),
        OptionValue::Moment(m) => format_date(m.year(), m.month(), m.day(), value),
        _ => Err(invalid_date(value)),
    }
}

/// Validates a time option and returns it in the `HH:MM` wire format.
///
/// Hours up to 24 are accepted.
pub fn validate_time(value: &OptionValue) -> Result<String, Error> {
    match value {
        OptionValue::Str(s) => {
            let re = Regex::new(r"^([0-9]{2}):([0-9]{2})$")
                .map_err(|e| Error::InvalidInput(format!("regex compile error: {}", e)))?;
            let caps = re.captures(s).ok_or_else(|| invalid_time(value))?;
            let hour = parse_field(&caps[1]).ok_or_else(|| invalid_time(value))?;
            let minute = parse_field(&caps[2]).ok_or_else(|| invalid_time(value))?;
            if hour > 24 || minute > 59 {
                return Err(invalid_time(value));
            }
            Ok(s.clone())
        }
        OptionValue::Time(t) => Ok(format!("{:02}:{:02}", t.hour(), t.minute())),
        OptionValue::Moment(m) => Ok(format!("{:02}:{:02}", m.hour(), m.minute())),
        _ => Err(invalid_time(value)),
    }
}

/// Validates a numeric identifier. Only integral values are accepted, and the
/// absolute value is returned: negative ids are flipped rather than rejected.
pub fn validate_id(value: &OptionValue) -> Result<u64, Error> {
    // Largest integer an f64 holds exactly.
    const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

    match value {
        OptionValue::Int(n) => Ok(n.unsigned_abs()),
        OptionValue::Float(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT => {
            Ok(f.abs() as u64)
        }
        _ => Err(Error::InvalidInput(format!(
            "{} is not a valid ID ({})",
            value,
            value.kind_name()
        ))),
    }
}

fn parse_field(digits: &str) -> Option<u32> {
    digits.parse().ok()
}

fn format_date(year: i32, month: u32, day: u32, value: &OptionValue) -> Result<String, Error> {
    if !(0..=9999).contains(&year) {
        return Err(invalid_date(value));
    }
    Ok(format!("{:04}-{:02}-{:02}", year, month, day))
}

fn invalid_date(value: &OptionValue) -> Error {
    Error::InvalidInput(format!("{} is not a valid date (AAAA-MM-DD)", value))
}

fn invalid_time(value: &OptionValue) -> Error {
    Error::InvalidInput(format!("{} is not a valid time (HH:MM)", value))
}
