//! Delta Lake table properties
//!
//! This crate declares the table properties recognized by the Delta Lake
//! connector and provides typed, validated access to them:
//! - The property schema (names, types, defaults, normalization)
//! - Reference resolution of raw `WITH (...)` input against the schema
//! - Typed accessors over a resolved property map
//! - `SHOW CREATE TABLE` rendering of visible properties

pub mod config;
pub mod inspect;
pub mod table_properties;
