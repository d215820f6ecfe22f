#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use clihelper::sort::FieldValue;

/// A record as used by the sort tests.
pub type TestRecord = BTreeMap<String, FieldValue<'static>>;

/// Builder for single-field (or multi-field) records.
#[derive(Default)]
pub struct RecordBuilder {
    record: TestRecord,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(self, value: DateTime<Utc>) -> Self {
        self.with("date", FieldValue::Date(value))
    }

    pub fn name(self, value: &str) -> Self {
        self.with("name", FieldValue::from(value.to_string()))
    }

    pub fn with(mut self, field: &str, value: FieldValue<'static>) -> Self {
        self.record.insert(field.to_string(), value);
        self
    }

    pub fn build(self) -> TestRecord {
        self.record
    }
}

/// One `{ date }` record per offset (milliseconds) from `now`.
pub fn date_records(now: DateTime<Utc>, offsets_ms: &[i64]) -> Vec<TestRecord> {
    offsets_ms
        .iter()
        .map(|ms| RecordBuilder::new().date(now + Duration::milliseconds(*ms)).build())
        .collect()
}

/// One `{ name }` record per name.
pub fn name_records(names: &[&str]) -> Vec<TestRecord> {
    names
        .iter()
        .map(|n| RecordBuilder::new().name(n).build())
        .collect()
}
