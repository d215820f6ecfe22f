// src/sort/mod.rs

//! In-place sorting of records by a named field.
//!
//! - [`value`] defines [`FieldValue`], the single ordering abstraction used
//!   for dates, strings, numbers and booleans alike.
//! - [`record`] defines the [`Record`] lookup trait and its implementations
//!   for JSON values and plain maps.
//!
//! The sort itself never inspects value types; it only asks each record for
//! its field and compares the results.

pub mod record;
pub mod value;

use std::cmp::Ordering;

use serde::Deserialize;
use tracing::trace;

pub use record::Record;
pub use value::FieldValue;

/// Options for [`sort_values`].
///
/// Deserializing an empty object (or calling [`SortOptions::default`]) gives
/// the defaults: descending by `"date"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SortOptions {
    #[serde(default = "default_descending")]
    pub descending: bool,

    #[serde(default = "default_field")]
    pub field: String,
}

fn default_descending() -> bool {
    true
}

fn default_field() -> String {
    "date".to_string()
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            descending: default_descending(),
            field: default_field(),
        }
    }
}

impl SortOptions {
    /// Ascending by the default field.
    pub fn ascending() -> Self {
        Self {
            descending: false,
            ..Self::default()
        }
    }

    /// Descending by the default field.
    pub fn descending() -> Self {
        Self::default()
    }

    /// Same order, different field.
    pub fn by_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }
}

/// Sort `records` in place by `options.field`.
///
/// Records that lack the field keep their relative order and end up after
/// every record that has it. If no record has the field, nothing moves.
/// The sort is stable, so equal keys keep their input order.
pub fn sort_values<R: Record>(records: &mut [R], options: &SortOptions) {
    trace!(
        field = %options.field,
        descending = options.descending,
        len = records.len(),
        "sorting records"
    );

    let field = options.field.as_str();
    records.sort_by(|a, b| {
        compare_fields(a.field(field), b.field(field), options.descending)
    });
}

/// Compare two optional field values for the requested direction.
///
/// Missing values are equal to each other and greater than any present value
/// in both directions.
pub fn compare_fields(
    a: Option<FieldValue<'_>>,
    b: Option<FieldValue<'_>>,
    descending: bool,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            if descending {
                b.cmp(&a)
            } else {
                a.cmp(&b)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
