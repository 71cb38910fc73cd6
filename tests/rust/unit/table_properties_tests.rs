//! End-to-end tests for the table property schema: raw input is resolved
//! against the schema, then read back through the typed accessors.

use std::collections::BTreeSet;

use delta_table_properties::table_properties::{
    get_analyze_columns, get_checkpoint_interval, get_location, get_partitioned_by,
    render_with_clause, resolve_properties, AnalyzeScope, ErrorCode, ResolvedProperties,
    TablePropertyError, TablePropertySchema, CHECKPOINT_INTERVAL_PROPERTY,
};
use serde_json::{json, Value};
use test_case::test_case;

fn resolve(raw: Value) -> Result<ResolvedProperties, TablePropertyError> {
    let raw = raw.as_object().cloned().unwrap_or_default();
    resolve_properties(TablePropertySchema::shared(), &raw)
}

#[test]
fn test_partitioned_and_checkpointed_table() {
    let resolved = resolve(json!({
        "partitioned_by": ["Year", "MONTH"],
        "checkpoint_interval": 10
    }))
    .unwrap();

    assert_eq!(
        get_partitioned_by(&resolved).unwrap(),
        vec!["year".to_string(), "month".to_string()]
    );
    assert_eq!(get_checkpoint_interval(&resolved).unwrap(), Some(10));
    assert_eq!(get_location(&resolved).unwrap(), None);
}

#[test]
fn test_negative_checkpoint_interval_fails_on_read() {
    let resolved = resolve(json!({"checkpoint_interval": -5})).unwrap();

    let err = get_checkpoint_interval(&resolved).unwrap_err();
    assert_eq!(err.property(), CHECKPOINT_INTERVAL_PROPERTY);
    assert_eq!(err.error_code(), ErrorCode::InvalidTableProperty);
    assert!(err.to_string().contains("checkpoint_interval"));
}

#[test_case(json!(["A", "b", "A"]), &["a", "b", "a"] ; "duplicates kept")]
#[test_case(json!(["Zeta", "alpha"]), &["zeta", "alpha"] ; "order kept")]
#[test_case(json!([]), &[] ; "empty")]
fn test_partition_columns_normalized(raw: Value, expected: &[&str]) {
    let resolved = resolve(json!({ "partitioned_by": raw })).unwrap();
    assert_eq!(get_partitioned_by(&resolved).unwrap(), expected);
}

#[test]
fn test_unpartitioned_table_has_empty_partition_list() {
    let resolved = ResolvedProperties::new();
    assert!(get_partitioned_by(&resolved).unwrap().is_empty());
}

#[test]
fn test_location_round_trips_unchanged() {
    let resolved = resolve(json!({"location": "s3://bucket/path"})).unwrap();
    assert_eq!(
        get_location(&resolved).unwrap().as_deref(),
        Some("s3://bucket/path")
    );
}

#[test]
fn test_analyze_scope_through_property_map() {
    let mut resolved = resolve(json!({"location": "s3://bucket/path"})).unwrap();
    assert_eq!(get_analyze_columns(&resolved).unwrap(), None);

    AnalyzeScope::columns(["Id", "ts"]).attach(&mut resolved);

    let expected: BTreeSet<String> = ["Id", "ts"].iter().map(|s| s.to_string()).collect();
    assert_eq!(get_analyze_columns(&resolved).unwrap(), Some(expected));

    // Hidden property never shows up in SHOW CREATE TABLE output
    let rendered = render_with_clause(TablePropertySchema::shared(), &resolved).unwrap();
    assert!(!rendered.contains("analyze_columns"));
    assert!(rendered.contains("location = 's3://bucket/path'"));
}

#[test]
fn test_schema_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let raw = json!({"checkpoint_interval": i + 1});
                let resolved =
                    resolve_properties(TablePropertySchema::shared(), raw.as_object().unwrap())
                        .unwrap();
                get_checkpoint_interval(&resolved).unwrap()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![Some(1), Some(2), Some(3), Some(4)]);
}
