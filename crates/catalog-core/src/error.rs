//! # Error Types
//!
//! The single caller-visible error kind for this layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Error Propagation                                 │
//! │                                                                         │
//! │  Malformed payload ─┐                                                  │
//! │  Bad enum name     ─┼──► DataValidationError (this module)            │
//! │  Missing key       ─┤         │                                        │
//! │  sqlx::Error       ─┘         ▼                                        │
//! │                     Web layer decides how to surface it                │
//! │                                                                         │
//! │  The one exception: find() signals absence with Ok(None).              │
//! │  "Not found" is not a failure.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. One error kind for the whole layer; variants categorize it
//! 4. Storage failures are wrapped at the operation boundary, never leaked raw

use thiserror::Error;

// =============================================================================
// Data Validation Error
// =============================================================================

/// Every caller-visible failure from the catalog persistence layer.
///
/// Covers malformed input payloads (wrong shape, missing keys, wrong field
/// types, unknown enum names), misuse (update/delete without an identity),
/// and wrapped storage-engine failures.
#[derive(Debug, Error)]
pub enum DataValidationError {
    /// The deserialization payload was not a mapping at all.
    ///
    /// ## When This Occurs
    /// - Request body was a bare string, number, array, or null
    #[error("Invalid product: body of request contained bad or no data")]
    BadPayload,

    /// A required key was absent from the payload.
    #[error("Invalid product: missing {0}")]
    MissingField(String),

    /// A payload field held the wrong JSON type.
    ///
    /// Example message: `Invalid type for boolean [available]: string`
    #[error("Invalid type for {expected} [{field}]: {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A value could not be interpreted - unknown category name,
    /// unparseable price text, and the like.
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    /// An operation that needs a persisted identity was called on an
    /// instance that has none.
    ///
    /// `op` is the operation name, e.g. "Update" or "Delete".
    #[error("{op} called with empty ID field")]
    EmptyId { op: &'static str },

    /// A storage-engine operation failed underneath us.
    ///
    /// ## When This Occurs
    /// - Connection or pool failure
    /// - Constraint violation
    /// - Migration failure
    #[error("Datastore operation failed: {0}")]
    Datastore(String),
}

impl DataValidationError {
    /// Creates a MissingField error for the given payload key.
    pub fn missing(key: impl Into<String>) -> Self {
        DataValidationError::MissingField(key.into())
    }

    /// Creates an InvalidAttribute error for the given value or detail.
    pub fn invalid_attribute(value: impl Into<String>) -> Self {
        DataValidationError::InvalidAttribute(value.into())
    }

    /// Wraps an arbitrary storage-engine failure.
    pub fn datastore(err: impl std::fmt::Display) -> Self {
        DataValidationError::Datastore(err.to_string())
    }
}

// =============================================================================
// Storage Engine Conversions (sqlx feature)
// =============================================================================

/// Convert sqlx errors into the layer's single error kind.
///
/// Wrapping happens at the boundary of the affected repository operation;
/// callers never see a raw `sqlx::Error`.
#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for DataValidationError {
    fn from(err: sqlx::Error) -> Self {
        DataValidationError::Datastore(err.to_string())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::migrate::MigrateError> for DataValidationError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DataValidationError::Datastore(err.to_string())
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with DataValidationError.
pub type DataResult<T> = Result<T, DataValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_payload_message() {
        let err = DataValidationError::BadPayload;
        assert_eq!(
            err.to_string(),
            "Invalid product: body of request contained bad or no data"
        );
    }

    #[test]
    fn test_missing_field_message() {
        let err = DataValidationError::missing("price");
        assert_eq!(err.to_string(), "Invalid product: missing price");
    }

    #[test]
    fn test_invalid_type_message() {
        let err = DataValidationError::InvalidType {
            field: "available",
            expected: "boolean",
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "Invalid type for boolean [available]: string"
        );
    }

    #[test]
    fn test_invalid_attribute_message() {
        let err = DataValidationError::invalid_attribute("NOT_A_REAL_CATEGORY");
        assert_eq!(err.to_string(), "Invalid attribute: NOT_A_REAL_CATEGORY");
    }

    #[test]
    fn test_empty_id_message() {
        let err = DataValidationError::EmptyId { op: "Update" };
        assert_eq!(err.to_string(), "Update called with empty ID field");
    }
}
