//! Defensive decoding of stored record arrays.
//!
//! Stored data may come from an older version of a record type or be
//! partially corrupt. Decoding never fails: an element that lacks a required
//! field is dropped, an optional field of the wrong type becomes `None`.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// A record kept in a `RecordStore`.
pub trait Record: Serialize + Clone + Sized {
    /// The record's fields without its id.
    type Input: Clone;

    fn id(&self) -> &str;

    fn from_input(id: String, input: Self::Input) -> Self;

    fn decode(value: &Value) -> Decoded<Self>;
}

/// Outcome of decoding one stored element.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    Valid(T),
    Dropped(DropReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    NotAnObject,
    MissingField(&'static str),
    InvalidField(&'static str),
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::NotAnObject => write!(f, "not an object"),
            DropReason::MissingField(name) => write!(f, "missing field '{}'", name),
            DropReason::InvalidField(name) => write!(f, "invalid field '{}'", name),
        }
    }
}

/// Decode a raw stored value into its valid records.
///
/// Returns `None` when there is nothing usable at all: the value is missing,
/// is not JSON, or is not a JSON array.
pub fn decode_array<T: Record>(raw: Option<&str>) -> Option<Vec<T>> {
    let raw = raw?;
    let value: Value = serde_json::from_str(raw).ok()?;
    let items = value.as_array()?;

    let records = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match T::decode(item) {
            Decoded::Valid(record) => Some(record),
            Decoded::Dropped(reason) => {
                tracing::debug!(index, %reason, "dropping stored element");
                None
            }
        })
        .collect();

    Some(records)
}

// Field helpers used by the `Record::decode` implementations.

pub(crate) fn as_object(value: &Value) -> Result<&Map<String, Value>, DropReason> {
    value.as_object().ok_or(DropReason::NotAnObject)
}

pub(crate) fn required_str(obj: &Map<String, Value>, field: &'static str) -> Result<String, DropReason> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(DropReason::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DropReason::InvalidField(field)),
    }
}

pub(crate) fn optional_str(obj: &Map<String, Value>, field: &str) -> Option<String> {
    obj.get(field).and_then(Value::as_str).map(str::to_string)
}

pub(crate) fn required_u32(obj: &Map<String, Value>, field: &'static str) -> Result<u32, DropReason> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(DropReason::MissingField(field)),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && *f <= u32::MAX as f64)
                    .map(|f| f.round() as u32)
            })
            .ok_or(DropReason::InvalidField(field)),
        Some(_) => Err(DropReason::InvalidField(field)),
    }
}

/// Keep only the string entries of an array field; `None` if none remain.
pub(crate) fn string_list(obj: &Map<String, Value>, field: &str) -> Option<Vec<String>> {
    let items: Vec<String> = obj
        .get(field)?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();

    if items.is_empty() { None } else { Some(items) }
}
