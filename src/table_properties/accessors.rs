//! Typed accessors over a resolved table property map
//!
//! The map handed to these functions has already been defaulted and normalized
//! against [`TablePropertySchema`](super::TablePropertySchema). None of them
//! mutate it.

use std::collections::{BTreeSet, HashMap};

use super::errors::{Result, TablePropertyError};
use super::schema::{
    ANALYZE_COLUMNS_PROPERTY, CHECKPOINT_INTERVAL_PROPERTY, LOCATION_PROPERTY,
    PARTITIONED_BY_PROPERTY,
};
use super::value::{PropertyType, PropertyValue};

/// Property name to resolved value, produced per statement by the host runtime
pub type ResolvedProperties = HashMap<String, PropertyValue>;

/// External storage location, if one was given. Not validated here.
pub fn get_location(table_properties: &ResolvedProperties) -> Result<Option<String>> {
    match table_properties.get(LOCATION_PROPERTY) {
        None => Ok(None),
        Some(PropertyValue::Varchar(location)) => Ok(Some(location.clone())),
        Some(other) => Err(type_mismatch(LOCATION_PROPERTY, PropertyType::Varchar, other)),
    }
}

/// Partition columns in partition order; empty when the table is unpartitioned
pub fn get_partitioned_by(table_properties: &ResolvedProperties) -> Result<Vec<String>> {
    match table_properties.get(PARTITIONED_BY_PROPERTY) {
        None => Ok(Vec::new()),
        Some(PropertyValue::VarcharArray(columns)) => Ok(columns.clone()),
        Some(other) => Err(type_mismatch(
            PARTITIONED_BY_PROPERTY,
            PropertyType::VarcharArray,
            other,
        )),
    }
}

/// Checkpoint interval, rejected when not strictly positive
///
/// Validation happens here rather than during resolution so the failure is
/// reported at the point the interval is actually used.
pub fn get_checkpoint_interval(table_properties: &ResolvedProperties) -> Result<Option<i64>> {
    match table_properties.get(CHECKPOINT_INTERVAL_PROPERTY) {
        None => Ok(None),
        Some(PropertyValue::Bigint(interval)) if *interval <= 0 => Err(
            TablePropertyError::constraint_violation(
                CHECKPOINT_INTERVAL_PROPERTY,
                "must be greater than 0",
            ),
        ),
        Some(PropertyValue::Bigint(interval)) => Ok(Some(*interval)),
        Some(other) => Err(type_mismatch(
            CHECKPOINT_INTERVAL_PROPERTY,
            PropertyType::Bigint,
            other,
        )),
    }
}

/// Columns selected for analysis, carried through the hidden analyze property
pub fn get_analyze_columns(
    table_properties: &ResolvedProperties,
) -> Result<Option<BTreeSet<String>>> {
    match table_properties.get(ANALYZE_COLUMNS_PROPERTY) {
        None => Ok(None),
        Some(PropertyValue::VarcharSet(columns)) => Ok(Some(columns.clone())),
        Some(other) => Err(type_mismatch(
            ANALYZE_COLUMNS_PROPERTY,
            PropertyType::VarcharSet,
            other,
        )),
    }
}

// The host guarantees well-typed maps; a mismatch is a contract violation, not a panic.
fn type_mismatch(property: &str, expected: PropertyType, actual: &PropertyValue) -> TablePropertyError {
    TablePropertyError::constraint_violation(
        property,
        format!(
            "must be of type {}, but resolved to {}",
            expected,
            actual.property_type()
        ),
    )
}
