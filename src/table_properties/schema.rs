//! Table property schema for the Delta Lake connector
//!
//! Declares every property accepted in `CREATE TABLE ... WITH (...)`, with its
//! type, default and normalization. The host runtime uses this list to validate
//! property names, coerce literals, normalize values and fill in defaults.
//!
//! The schema is immutable once built and can be shared freely across planning
//! threads.

use log::debug;

use super::value::{Normalizer, PropertyType, PropertyValue};

pub const LOCATION_PROPERTY: &str = "location";
pub const PARTITIONED_BY_PROPERTY: &str = "partitioned_by";
pub const CHECKPOINT_INTERVAL_PROPERTY: &str = "checkpoint_interval";
/// Subset of columns to be analyzed. Only carried between planning phases of
/// a single `ANALYZE` statement and never persisted.
// TODO: drop once statistics collection receives the table handle, which
// already knows the analyzed columns.
pub const ANALYZE_COLUMNS_PROPERTY: &str = "$trino.analyze_columns";

/// Definition of a single table property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub property_type: PropertyType,
    pub default_value: Option<PropertyValue>,
    /// Hidden properties are excluded from user-facing listings
    pub hidden: bool,
    pub normalizer: Option<Normalizer>,
}

impl PropertyMetadata {
    pub fn new(
        name: &'static str,
        description: &'static str,
        property_type: PropertyType,
    ) -> Self {
        Self {
            name,
            description,
            property_type,
            default_value: None,
            hidden: false,
            normalizer: None,
        }
    }

    pub fn varchar(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, PropertyType::Varchar)
    }

    pub fn bigint(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, PropertyType::Bigint)
    }

    pub fn with_default(mut self, value: PropertyValue) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Apply this property's normalizer, if any
    pub fn normalize(&self, value: PropertyValue) -> PropertyValue {
        match self.normalizer {
            Some(normalizer) => normalizer.apply(value),
            None => value,
        }
    }
}

/// Ordered catalog of the table properties understood by the connector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePropertySchema {
    table_properties: Vec<PropertyMetadata>,
}

lazy_static::lazy_static! {
    static ref SHARED_SCHEMA: TablePropertySchema = TablePropertySchema::new();
}

impl TablePropertySchema {
    pub fn new() -> Self {
        let table_properties = vec![
            PropertyMetadata::varchar(
                LOCATION_PROPERTY,
                "File system location URI for external table",
            ),
            PropertyMetadata::new(
                PARTITIONED_BY_PROPERTY,
                "Partition columns",
                PropertyType::VarcharArray,
            )
            .with_default(PropertyValue::VarcharArray(Vec::new()))
            .with_normalizer(Normalizer::LowerCaseElements),
            PropertyMetadata::bigint(CHECKPOINT_INTERVAL_PROPERTY, "Checkpoint interval"),
            PropertyMetadata::new(
                ANALYZE_COLUMNS_PROPERTY,
                "Columns to be analyzed",
                PropertyType::VarcharSet,
            )
            .hidden(),
        ];

        debug!(
            "Registered {} Delta Lake table properties",
            table_properties.len()
        );

        Self { table_properties }
    }

    /// Process-wide schema instance
    pub fn shared() -> &'static TablePropertySchema {
        &SHARED_SCHEMA
    }

    /// All definitions in declaration order, hidden ones included
    pub fn table_properties(&self) -> &[PropertyMetadata] {
        &self.table_properties
    }

    /// Definitions that may be shown to users
    pub fn visible_properties(&self) -> impl Iterator<Item = &PropertyMetadata> {
        self.table_properties.iter().filter(|p| !p.hidden)
    }

    pub fn get(&self, name: &str) -> Option<&PropertyMetadata> {
        self.table_properties.iter().find(|p| p.name == name)
    }
}

impl Default for TablePropertySchema {
    fn default() -> Self {
        Self::new()
    }
}
