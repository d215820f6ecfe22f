// src/sort/record.rs

//! Field lookup for the things we know how to sort.

use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::value::FieldValue;

/// Anything that can expose a named, comparable field.
///
/// Returning `None` means "this record has no such field"; such records are
/// never reordered relative to each other.
pub trait Record {
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl Record for BTreeMap<String, FieldValue<'_>> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(borrow_value)
    }
}

/// JSON objects: strings that parse as RFC 3339 become dates, `null`,
/// arrays and nested objects count as missing.
impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).and_then(json_field_value)
    }
}

/// Non-object JSON values have no fields.
impl Record for Value {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match self {
            Value::Object(map) => map.field(name),
            _ => None,
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

fn borrow_value<'a>(value: &'a FieldValue<'_>) -> FieldValue<'a> {
    match value {
        FieldValue::Bool(b) => FieldValue::Bool(*b),
        FieldValue::Number(n) => FieldValue::Number(*n),
        FieldValue::Text(s) => FieldValue::Text(Cow::Borrowed(s.as_ref())),
        FieldValue::Date(d) => FieldValue::Date(*d),
    }
}

fn json_field_value(value: &Value) -> Option<FieldValue<'_>> {
    match value {
        Value::Bool(b) => Some(FieldValue::Bool(*b)),
        Value::Number(n) => n.as_f64().map(FieldValue::Number),
        Value::String(s) => Some(match DateTime::parse_from_rfc3339(s) {
            Ok(date) => FieldValue::Date(date.with_timezone(&Utc)),
            Err(_) => FieldValue::Text(Cow::Borrowed(s.as_str())),
        }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
