//! Analyze scope handed from statement analysis to statistics collection
//!
//! Prefer passing [`AnalyzeScope`] directly between planning phases. The
//! [`attach`](AnalyzeScope::attach) path exists for hosts that can only move a
//! table property map between those phases.

use std::collections::BTreeSet;

use super::accessors::{get_analyze_columns, ResolvedProperties};
use super::errors::Result;
use super::schema::ANALYZE_COLUMNS_PROPERTY;
use super::value::PropertyValue;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeScope {
    /// `None` analyzes every column
    pub columns: Option<BTreeSet<String>>,
}

impl AnalyzeScope {
    pub fn all() -> Self {
        Self { columns: None }
    }

    pub fn columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: Some(columns.into_iter().map(Into::into).collect()),
        }
    }

    pub fn from_properties(table_properties: &ResolvedProperties) -> Result<Self> {
        Ok(Self {
            columns: get_analyze_columns(table_properties)?,
        })
    }

    /// Write this scope into the hidden analyze property of `table_properties`
    pub fn attach(&self, table_properties: &mut ResolvedProperties) {
        match &self.columns {
            Some(columns) => {
                table_properties.insert(
                    ANALYZE_COLUMNS_PROPERTY.to_string(),
                    PropertyValue::VarcharSet(columns.clone()),
                );
            }
            None => {
                table_properties.remove(ANALYZE_COLUMNS_PROPERTY);
            }
        }
    }

    pub fn includes(&self, column: &str) -> bool {
        self.columns
            .as_ref()
            .map_or(true, |columns| columns.contains(column))
    }
}
