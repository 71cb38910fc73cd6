//! # Table Property Error Types
//!
//! Errors surfaced while resolving or reading Delta Lake table properties.
//!
//! ## Error Categories
//!
//! - **Value Errors**: a resolved property holds a value the connector refuses
//!   (e.g. a non-positive `checkpoint_interval`). Raised by the accessors.
//! - **Resolution Errors**: unknown property names or literals that cannot be
//!   coerced to the declared type. Raised by the reference resolver only; a host
//!   runtime normally rejects these before the accessors run.
//!
//! Every variant maps to the host's generic `INVALID_TABLE_PROPERTY` channel via
//! [`TablePropertyError::error_code`].

use std::fmt;

use thiserror::Error;

/// Error codes understood by the host runtime's error-reporting mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidTableProperty,
}

impl ErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidTableProperty => "INVALID_TABLE_PROPERTY",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TablePropertyError {
    #[error("{message}")]
    InvalidPropertyValue { property: String, message: String },
    #[error("Catalog does not support table property '{property}'")]
    UnknownProperty { property: String },
    #[error("Invalid value for table property '{property}': expected {expected}, got {actual}")]
    InvalidPropertyType {
        property: String,
        expected: String,
        actual: String,
    },
}

impl TablePropertyError {
    /// Create a value error whose message is `"<property> <constraint>"`
    ///
    /// # Example
    /// ```ignore
    /// TablePropertyError::constraint_violation("checkpoint_interval", "must be greater than 0")
    /// ```
    pub fn constraint_violation(
        property: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        let property = property.into();
        let message = format!("{} {}", property, constraint.into());
        TablePropertyError::InvalidPropertyValue { property, message }
    }

    /// Name of the property the error refers to
    pub fn property(&self) -> &str {
        match self {
            TablePropertyError::InvalidPropertyValue { property, .. }
            | TablePropertyError::UnknownProperty { property }
            | TablePropertyError::InvalidPropertyType { property, .. } => property,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        ErrorCode::InvalidTableProperty
    }
}

pub type Result<T> = std::result::Result<T, TablePropertyError>;
