//! Rendering for the `delta-table-properties` inspection tool
//!
//! Kept in the library so the output formats can be tested without spawning
//! the binary.

use std::path::Path;

use anyhow::{anyhow, Context};
use log::debug;
use serde::Serialize;

use crate::config::{InspectConfig, OutputFormat};
use crate::table_properties::{
    get_checkpoint_interval, get_location, get_partitioned_by,
    render_with_clause, resolve_properties, PropertyType, PropertyValue, TablePropertySchema,
};

#[derive(Debug, Serialize)]
pub struct SchemaEntry {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub default: Option<PropertyValue>,
    pub hidden: bool,
}

/// Typed view of a resolved property file
///
/// Hidden properties cannot be supplied in a file, so none are reported.
#[derive(Debug, Serialize)]
pub struct ResolvedReport {
    pub location: Option<String>,
    pub partitioned_by: Vec<String>,
    pub checkpoint_interval: Option<i64>,
    pub with_clause: Option<String>,
}

pub fn schema_entries(schema: &TablePropertySchema, show_hidden: bool) -> Vec<SchemaEntry> {
    schema
        .table_properties()
        .iter()
        .filter(|p| show_hidden || !p.hidden)
        .map(|p| SchemaEntry {
            name: p.name,
            description: p.description,
            property_type: p.property_type,
            default: p.default_value.clone(),
            hidden: p.hidden,
        })
        .collect()
}

pub fn describe_schema(config: &InspectConfig) -> anyhow::Result<String> {
    let entries = schema_entries(TablePropertySchema::shared(), config.show_hidden);
    match config.output_format {
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|e| {
                let default = e
                    .default
                    .as_ref()
                    .map(PropertyValue::to_sql_literal)
                    .unwrap_or_else(|| "-".to_string());
                format!(
                    "{:<24} {:<16} {:<10} {}",
                    e.name, e.property_type, default, e.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&entries)?),
    }
}

/// Parse a raw property map from JSON or YAML text
pub fn parse_raw_properties(
    content: &str,
) -> anyhow::Result<serde_json::Map<String, serde_json::Value>> {
    // YAML is a superset of JSON, so one parser covers both
    let value: serde_json::Value =
        serde_yaml::from_str(content).context("property file is neither JSON nor YAML")?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        serde_json::Value::Null => Ok(serde_json::Map::new()),
        other => Err(anyhow!("expected a property map, got {}", other)),
    }
}

pub fn resolve_report(content: &str) -> anyhow::Result<ResolvedReport> {
    let schema = TablePropertySchema::shared();
    let raw = parse_raw_properties(content)?;
    let resolved = resolve_properties(schema, &raw)?;

    Ok(ResolvedReport {
        location: get_location(&resolved)?,
        partitioned_by: get_partitioned_by(&resolved)?,
        checkpoint_interval: get_checkpoint_interval(&resolved)?,
        with_clause: render_with_clause(schema, &resolved),
    })
}

pub fn describe_file(path: &Path, config: &InspectConfig) -> anyhow::Result<String> {
    debug!("Resolving table properties from {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let report = resolve_report(&content)?;

    match config.output_format {
        OutputFormat::Text => {
            let mut lines = vec![
                format!("location: {}", report.location.as_deref().unwrap_or("-")),
                format!("partitioned_by: [{}]", report.partitioned_by.join(", ")),
                format!(
                    "checkpoint_interval: {}",
                    report
                        .checkpoint_interval
                        .map_or_else(|| "-".to_string(), |v| v.to_string())
                ),
            ];
            if let Some(with_clause) = &report.with_clause {
                lines.push(with_clause.clone());
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&report)?),
    }
}
