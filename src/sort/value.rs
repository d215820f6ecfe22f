// src/sort/value.rs

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{DateTime, Utc};

/// A single comparable field value pulled out of a record.
///
/// Values of the same kind compare naturally:
/// - `Date`: chronological
/// - `Text`: lexicographic (byte order, like `str::cmp`)
/// - `Number`: numeric, using `f64::total_cmp` so NaN still has a place;
///   `-0.0` and `0.0` are equal
/// - `Bool`: `false < true`
///
/// Values of different kinds are ordered by kind so that the ordering stays
/// total: `Bool < Number < Text < Date`.
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    Bool(bool),
    Number(f64),
    Text(Cow<'a, str>),
    Date(DateTime<Utc>),
}

impl FieldValue<'_> {
    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Number(_) => 1,
            FieldValue::Text(_) => 2,
            FieldValue::Date(_) => 3,
        }
    }
}

impl Ord for FieldValue<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            // `+ 0.0` folds -0.0 into 0.0 so both zeros compare equal.
            (FieldValue::Number(a), FieldValue::Number(b)) => (a + 0.0).total_cmp(&(b + 0.0)),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl PartialOrd for FieldValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FieldValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FieldValue<'_> {}

impl From<String> for FieldValue<'static> {
    fn from(value: String) -> Self {
        FieldValue::Text(Cow::Owned(value))
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }
}
