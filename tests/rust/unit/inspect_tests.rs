//! Tests for the inspection tool output, using temporary property files.

use std::io::Write;

use delta_table_properties::config::{InspectConfig, OutputFormat};
use delta_table_properties::inspect::{describe_file, describe_schema, resolve_report};

fn property_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_describe_schema_text_hides_internal_property() {
    let text = describe_schema(&InspectConfig::default()).unwrap();
    assert!(text.contains("partitioned_by"));
    assert!(text.contains("array(varchar)"));
    assert!(!text.contains("$trino.analyze_columns"));

    let config = InspectConfig {
        show_hidden: true,
        ..Default::default()
    };
    assert!(describe_schema(&config)
        .unwrap()
        .contains("$trino.analyze_columns"));
}

#[test]
fn test_describe_schema_json() {
    let config = InspectConfig {
        output_format: OutputFormat::Json,
        ..Default::default()
    };
    let entries: serde_json::Value =
        serde_json::from_str(&describe_schema(&config).unwrap()).unwrap();
    let names: Vec<_> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["location", "partitioned_by", "checkpoint_interval"]);
}

#[test]
fn test_describe_yaml_file() {
    let file = property_file("partitioned_by: [Year, MONTH]\ncheckpoint_interval: 10\n");
    let text = describe_file(file.path(), &InspectConfig::default()).unwrap();
    assert!(text.contains("partitioned_by: [year, month]"));
    assert!(text.contains("checkpoint_interval: 10"));
    assert!(text.contains("partitioned_by = ARRAY['year','month']"));
}

#[test]
fn test_describe_json_file_as_json() -> anyhow::Result<()> {
    let file = property_file(r#"{"location": "s3://bucket/path"}"#);
    let config = InspectConfig {
        output_format: OutputFormat::Json,
        ..Default::default()
    };
    let report: serde_json::Value = serde_json::from_str(&describe_file(file.path(), &config)?)?;
    assert_eq!(report["location"], "s3://bucket/path");
    assert_eq!(report["partitioned_by"], serde_json::json!([]));
    assert!(report["checkpoint_interval"].is_null());
    Ok(())
}

#[test]
fn test_invalid_checkpoint_interval_is_reported() {
    let err = resolve_report("checkpoint_interval: 0\n").unwrap_err();
    assert_eq!(err.to_string(), "checkpoint_interval must be greater than 0");
}

#[test]
fn test_unknown_property_is_reported() {
    let err = resolve_report(r#"{"format": "PARQUET"}"#).unwrap_err();
    assert!(err.to_string().contains("format"));
}

#[test]
fn test_missing_file() {
    let err = describe_file(
        std::path::Path::new("/nonexistent/properties.yaml"),
        &InspectConfig::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}
