//! Unit tests - exercise the public API without any external services

mod inspect_tests;
mod table_properties_tests;
