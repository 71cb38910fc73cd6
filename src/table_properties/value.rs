//! Typed property values and the semantic types they are declared with.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type of a table property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Varchar,
    /// Ordered list of strings
    VarcharArray,
    Bigint,
    /// Unordered set of strings, only used for in-process properties
    VarcharSet,
}

impl PropertyType {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyType::Varchar => "varchar",
            PropertyType::VarcharArray => "array(varchar)",
            PropertyType::Bigint => "bigint",
            PropertyType::VarcharSet => "set(varchar)",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.type_name())
    }
}

/// A resolved, typed property value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Varchar(String),
    VarcharArray(Vec<String>),
    Bigint(i64),
    VarcharSet(BTreeSet<String>),
}

impl PropertyValue {
    pub fn property_type(&self) -> PropertyType {
        match self {
            PropertyValue::Varchar(_) => PropertyType::Varchar,
            PropertyValue::VarcharArray(_) => PropertyType::VarcharArray,
            PropertyValue::Bigint(_) => PropertyType::Bigint,
            PropertyValue::VarcharSet(_) => PropertyType::VarcharSet,
        }
    }

    /// Render the value as a SQL literal, e.g. `ARRAY['year','month']`
    pub fn to_sql_literal(&self) -> String {
        match self {
            PropertyValue::Varchar(s) => quote(s),
            PropertyValue::VarcharArray(items) => format!(
                "ARRAY[{}]",
                items.iter().map(|s| quote(s)).collect::<Vec<_>>().join(",")
            ),
            PropertyValue::Bigint(v) => v.to_string(),
            PropertyValue::VarcharSet(items) => format!(
                "ARRAY[{}]",
                items.iter().map(|s| quote(s)).collect::<Vec<_>>().join(",")
            ),
        }
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Normalization applied once to a user-supplied value when it is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    /// Lower-case every element of a string list, keeping order and duplicates
    LowerCaseElements,
}

impl Normalizer {
    pub fn apply(&self, value: PropertyValue) -> PropertyValue {
        match (self, value) {
            (Normalizer::LowerCaseElements, PropertyValue::VarcharArray(items)) => {
                PropertyValue::VarcharArray(items.iter().map(|s| s.to_lowercase()).collect())
            }
            (_, other) => other,
        }
    }
}
