/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Checks that `params` is an object holding every field in `fields`
///
/// # Returns
/// * `Ok(())` - Every field is present
/// * `Err(AppError::Validation)` - The message lists every missing field,
///   e.g. `params[name] is required, params[wid] is required`
pub fn require_params(params: &Value, fields: &[&str]) -> Result<(), AppError> {
    let Some(map) = params.as_object() else {
        let missing = missing_message(fields.iter().copied());
        return Err(AppError::Validation(if missing.is_empty() {
            "params is not an object".to_string()
        } else {
            format!("params is not an object: {missing}")
        }));
    };

    let missing = missing_message(fields.iter().copied().filter(|f| !map.contains_key(*f)));
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(missing))
    }
}

/// Serializes a typed request and checks its required fields
///
/// Returns the JSON that goes on the wire.
pub fn require_fields<T: Serialize + ?Sized>(
    params: &T,
    fields: &[&str],
) -> Result<Value, AppError> {
    let value = serde_json::to_value(params)?;
    require_params(&value, fields)?;
    Ok(value)
}

fn missing_message<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    fields
        .map(|f| format!("params[{f}] is required"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// True for `{}` and `null`, the shapes Toggl uses for "nothing"
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Decodes a single-entity response into a typed value
///
/// `{}` and `null` are rejected: with `#[serde(default)]` models they would
/// otherwise decode into an entity with `id: 0`.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    if is_empty_value(&value) {
        return Err(AppError::InvalidFormat(
            "empty response where an entity was expected".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Decodes a list response; `{}` and `null` become an empty list
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, AppError> {
    if is_empty_value(&value) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value)?)
}

/// Decodes a single-entity response; `{}` and `null` become `None`
pub fn decode_optional<T: DeserializeOwned>(value: Value) -> Result<Option<T>, AppError> {
    if is_empty_value(&value) {
        return Ok(None);
    }
    decode(value).map(Some)
}

/// Any value accepted by [`iso8601`]
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    /// Date and time with an offset
    DateTime(DateTime<FixedOffset>),
    /// Calendar date
    Date(NaiveDate),
    /// ISO-8601 (or close enough) text
    Text(String),
    /// Loose JSON value, only strings are accepted
    Json(Value),
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.fixed_offset())
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(value: DateTime<Local>) -> Self {
        Self::DateTime(value.fixed_offset())
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Value> for Timestamp {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            other => Self::Json(other),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Self::Json(Value::from(value))
    }
}

/// Formats a timestamp as ISO-8601, writing a zero offset as `Z`
///
/// Dates are formatted as `YYYY-MM-DD`, everything else as
/// `YYYY-MM-DDTHH:MM:SS[.fff]±HH:MM`; fractional seconds are only written
/// when present. Strings are parsed first.
///
/// # Errors
/// * `AppError::InvalidType` - Neither a date/time nor a string
/// * `AppError::InvalidFormat` - A string that is not a date/time
///
/// # Example
/// ```
/// use toggl_client::model::utils::iso8601;
/// assert_eq!(iso8601("2015-08-21T09:21:02+00:00").unwrap(), "2015-08-21T09:21:02Z");
/// assert_eq!(iso8601("2015-08-21T04:21:02-05:00").unwrap(), "2015-08-21T04:21:02-05:00");
/// ```
pub fn iso8601(timestamp: impl Into<Timestamp>) -> Result<String, AppError> {
    match timestamp.into() {
        Timestamp::DateTime(dt) => Ok(format_datetime(&dt)),
        Timestamp::Date(date) => Ok(date.format("%Y-%m-%d").to_string()),
        Timestamp::Text(text) => parse_timestamp(&text).map(|dt| format_datetime(&dt)),
        Timestamp::Json(value) => Err(AppError::InvalidType(format!(
            "Can't convert {} to ISO-8601 Date/Time",
            json_kind(&value)
        ))),
    }
}

/// Parses ISO-8601 text; date-times without offset and bare dates are taken as UTC
pub fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>, AppError> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"] {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Ok(dt);
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    Err(AppError::InvalidFormat(format!("invalid date: {text}")))
}

fn format_datetime(dt: &DateTime<FixedOffset>) -> String {
    let formatted = dt.format("%Y-%m-%dT%H:%M:%S%.f%:z").to_string();
    match formatted
        .strip_suffix("+00:00")
        .or_else(|| formatted.strip_suffix("-00:00"))
    {
        Some(prefix) => format!("{prefix}Z"),
        None => formatted,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
