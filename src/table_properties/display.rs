//! `WITH (...)` clause rendering for `SHOW CREATE TABLE`
//!
//! Hidden properties are never rendered.

use super::accessors::ResolvedProperties;
use super::schema::TablePropertySchema;

/// Render the visible properties present in `table_properties`, in schema order
///
/// Returns `None` when there is nothing to show.
///
/// # Example
/// ```ignore
/// WITH (
///    location = 's3://bucket/path',
///    partitioned_by = ARRAY['year','month']
/// )
/// ```
pub fn render_with_clause(
    schema: &TablePropertySchema,
    table_properties: &ResolvedProperties,
) -> Option<String> {
    let entries: Vec<String> = schema
        .visible_properties()
        .filter_map(|metadata| {
            table_properties
                .get(metadata.name)
                .map(|value| format!("   {} = {}", metadata.name, value.to_sql_literal()))
        })
        .collect();

    if entries.is_empty() {
        return None;
    }

    Some(format!("WITH (\n{}\n)", entries.join(",\n")))
}
