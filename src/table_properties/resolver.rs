//! Reference resolution of raw `WITH (...)` literals against the schema
//!
//! Mirrors what the host runtime does before handing a map to the accessors:
//! reject unknown names, coerce literals to the declared type, normalize, and
//! fill in defaults. Positivity of `checkpoint_interval` is deliberately not
//! checked here; see [`get_checkpoint_interval`](super::get_checkpoint_interval).

use std::collections::BTreeSet;

use log::{debug, warn};
use serde_json::{Map, Value};

use super::accessors::ResolvedProperties;
use super::errors::{Result, TablePropertyError};
use super::schema::{PropertyMetadata, TablePropertySchema};
use super::value::{PropertyType, PropertyValue};

/// Resolve loosely typed user input into a [`ResolvedProperties`] map
///
/// A JSON `null` counts as "not specified". Hidden properties cannot be set by
/// users and are reported as unknown.
///
/// # Example
/// ```ignore
/// let raw = serde_json::json!({"partitioned_by": ["Year", "MONTH"]});
/// let resolved = resolve_properties(TablePropertySchema::shared(), raw.as_object().unwrap())?;
/// assert_eq!(get_partitioned_by(&resolved)?, vec!["year", "month"]);
/// ```
pub fn resolve_properties(
    schema: &TablePropertySchema,
    raw: &Map<String, Value>,
) -> Result<ResolvedProperties> {
    let mut resolved = ResolvedProperties::new();

    for (name, literal) in raw {
        let metadata = match schema.get(name) {
            Some(metadata) if !metadata.hidden => metadata,
            _ => {
                warn!("Rejecting unknown table property '{}'", name);
                return Err(TablePropertyError::UnknownProperty {
                    property: name.clone(),
                });
            }
        };

        if literal.is_null() {
            continue;
        }

        let value = coerce(metadata, literal)?;
        resolved.insert(name.clone(), metadata.normalize(value));
    }

    for metadata in schema.table_properties() {
        if resolved.contains_key(metadata.name) {
            continue;
        }
        if let Some(default) = &metadata.default_value {
            resolved.insert(metadata.name.to_string(), default.clone());
        }
    }

    debug!(
        "Resolved {} table properties from {} supplied",
        resolved.len(),
        raw.len()
    );

    Ok(resolved)
}

/// Coerce a single literal to the property's declared type
fn coerce(metadata: &PropertyMetadata, literal: &Value) -> Result<PropertyValue> {
    let mismatch = || TablePropertyError::InvalidPropertyType {
        property: metadata.name.to_string(),
        expected: metadata.property_type.to_string(),
        actual: literal.to_string(),
    };

    match metadata.property_type {
        PropertyType::Varchar => literal
            .as_str()
            .map(|s| PropertyValue::Varchar(s.to_string()))
            .ok_or_else(mismatch),
        PropertyType::Bigint => literal
            .as_i64()
            .map(PropertyValue::Bigint)
            .ok_or_else(mismatch),
        PropertyType::VarcharArray => string_elements(literal)
            .map(PropertyValue::VarcharArray)
            .ok_or_else(mismatch),
        PropertyType::VarcharSet => string_elements(literal)
            .map(|items| PropertyValue::VarcharSet(items.into_iter().collect::<BTreeSet<_>>()))
            .ok_or_else(mismatch),
    }
}

fn string_elements(literal: &Value) -> Option<Vec<String>> {
    literal
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}
