pub mod accessors;
pub mod display;
pub mod errors;
pub mod planning;
pub mod resolver;
pub mod schema;
pub mod value;

// Re-export commonly used types
pub use accessors::{
    get_analyze_columns, get_checkpoint_interval, get_location, get_partitioned_by,
    ResolvedProperties,
};
pub use display::render_with_clause;
pub use errors::{ErrorCode, Result, TablePropertyError};
pub use planning::AnalyzeScope;
pub use resolver::resolve_properties;
pub use schema::{
    PropertyMetadata, TablePropertySchema, ANALYZE_COLUMNS_PROPERTY,
    CHECKPOINT_INTERVAL_PROPERTY, LOCATION_PROPERTY, PARTITIONED_BY_PROPERTY,
};
pub use value::{Normalizer, PropertyType, PropertyValue};
