// tests/sort_json.rs

use std::error::Error;

use serde_json::{json, Value};

use clihelper::sort::{compare_fields, sort_values, FieldValue, Record, SortOptions};
use clihelper::sort_json;

type TestResult = Result<(), Box<dyn Error>>;

fn names(records: &[Value]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r["name"].as_str().unwrap_or("<none>"))
        .collect()
}

#[test]
fn rfc3339_strings_sort_chronologically() {
    // Lexicographic order would put "2024-01-01T10:00:00+05:00" last.
    let mut records = vec![
        json!({ "name": "a", "date": "2024-01-01T06:00:00Z" }),
        json!({ "name": "b", "date": "2024-01-01T10:00:00+05:00" }),
        json!({ "name": "c", "date": "2024-01-01T07:00:00Z" }),
    ];

    sort_values(&mut records, &SortOptions::default());

    assert_eq!(names(&records), vec!["c", "a", "b"]);
}

#[test]
fn numbers_sort_numerically() {
    let mut records = vec![
        json!({ "name": "ten", "size": 10 }),
        json!({ "name": "two", "size": 2 }),
        json!({ "name": "half", "size": 0.5 }),
    ];

    sort_values(&mut records, &SortOptions::ascending().by_field("size"));

    assert_eq!(names(&records), vec!["half", "two", "ten"]);
}

#[test]
fn records_without_the_field_go_last_in_both_directions() {
    let input = vec![
        json!({ "name": "no-date-1" }),
        json!({ "name": "old", "date": "2020-01-01T00:00:00Z" }),
        json!({ "name": "null-date", "date": null }),
        json!({ "name": "new", "date": "2023-01-01T00:00:00Z" }),
    ];

    let mut desc = input.clone();
    sort_values(&mut desc, &SortOptions::default());
    assert_eq!(names(&desc), vec!["new", "old", "no-date-1", "null-date"]);

    let mut asc = input;
    sort_values(&mut asc, &SortOptions::ascending());
    assert_eq!(names(&asc), vec!["old", "new", "no-date-1", "null-date"]);
}

#[test]
fn non_object_values_have_no_fields() {
    assert!(json!(42).field("date").is_none());
    assert!(json!("2024-01-01T00:00:00Z").field("date").is_none());
    assert!(json!({ "date": [1, 2] }).field("date").is_none());
}

#[test]
fn mixed_kinds_still_form_a_total_order() {
    let text = FieldValue::from("zzz");
    let date = FieldValue::Date(chrono::Utc::now());
    let number = FieldValue::Number(f64::NAN);
    let boolean = FieldValue::Bool(true);

    assert!(boolean < number);
    assert!(number < text);
    assert!(text < date);
    assert_eq!(FieldValue::Number(f64::NAN), FieldValue::Number(f64::NAN));
}

#[test]
fn compare_fields_treats_missing_as_equal_to_missing() {
    use std::cmp::Ordering;

    assert_eq!(compare_fields(None, None, true), Ordering::Equal);
    assert_eq!(compare_fields(None, None, false), Ordering::Equal);
    assert_eq!(
        compare_fields(Some(FieldValue::from("a")), None, true),
        Ordering::Less
    );
    assert_eq!(
        compare_fields(Some(FieldValue::from("a")), Some(FieldValue::from("b")), true),
        Ordering::Greater
    );
}

#[test]
fn sort_options_deserialize_with_defaults() -> TestResult {
    let options: SortOptions = serde_json::from_str("{}")?;
    assert_eq!(options, SortOptions::default());
    assert!(options.descending);
    assert_eq!(options.field, "date");

    let options: SortOptions = serde_json::from_str(r#"{ "descending": false, "field": "name" }"#)?;
    assert_eq!(options, SortOptions::ascending().by_field("name"));
    Ok(())
}

#[test]
fn sort_json_renders_sorted_array() -> TestResult {
    let input = r#"[{"name":"Deidre"},{"name":"Zoltan"},{"name":"Aiofe"}]"#;

    let output = sort_json(input, &SortOptions::ascending().by_field("name"))?;
    let records: Vec<Value> = serde_json::from_str(&output)?;

    assert_eq!(names(&records), vec!["Aiofe", "Deidre", "Zoltan"]);
    Ok(())
}

#[test]
fn sort_json_rejects_non_arrays() {
    let result = sort_json(r#"{"name":"Aiofe"}"#, &SortOptions::default());
    assert!(matches!(
        result,
        Err(clihelper::errors::HelperError::JsonError(_))
    ));
}

#[test]
fn negative_and_positive_zero_tie() {
    assert_eq!(FieldValue::Number(-0.0), FieldValue::Number(0.0));

    // Equal keys keep their input order.
    let mut records = vec![
        json!({ "name": "pos", "size": 0.0 }),
        json!({ "name": "neg", "size": -0.0 }),
        json!({ "name": "one", "size": 1 }),
    ];
    sort_values(&mut records, &SortOptions::ascending().by_field("size"));

    assert_eq!(names(&records), vec!["pos", "neg", "one"]);
}

#[test]
fn borrowed_records_sort_without_moving_the_originals() {
    let owned = vec![
        json!({ "name": "Deidre" }),
        json!({ "name": "Zoltan" }),
        json!({ "name": "Aiofe" }),
    ];
    let mut refs: Vec<&Value> = owned.iter().collect();

    sort_values(&mut refs, &SortOptions::default().by_field("name"));

    let sorted: Vec<&str> = refs.iter().map(|r| r["name"].as_str().unwrap_or("")).collect();
    assert_eq!(sorted, vec!["Zoltan", "Deidre", "Aiofe"]);
    assert_eq!(names(&owned), vec!["Deidre", "Zoltan", "Aiofe"]);
}
