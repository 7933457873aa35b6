//! # Category Enumeration
//!
//! The closed set of product category tags.
//!
//! ## Name-Based Exchange
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Category Representation                               │
//! │                                                                         │
//! │  In memory:   Category::Cloths       (enum variant)                    │
//! │  In payloads: "CLOTHS"               (symbolic name, never ordinal)    │
//! │  In storage:  'CLOTHS' TEXT column   (same symbolic name)              │
//! │                                                                         │
//! │  Unknown name ──► DataValidationError::InvalidAttribute                │
//! │  (rejected, never silently coerced to a default)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The name→variant mapping is an explicit `FromStr` with an error branch,
//! not reflection: an unrecognized name is a typed failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DataValidationError;

// =============================================================================
// Category
// =============================================================================

/// The closed set of category tags a product can carry.
///
/// Exchanged as upper-case symbolic names (`"CLOTHS"`, `"FOOD"`, ...).
/// `Unknown` is the sentinel for unspecified categories and the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Sentinel for products with no assigned category.
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    /// All members of the enumeration, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    /// Returns the symbolic name used in payloads and storage.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Unknown
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DataValidationError;

    /// Looks a category up by its symbolic name.
    ///
    /// An unrecognized name fails with `Invalid attribute: {name}` - the
    /// caller's value is named in the message, and no default is substituted.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "UNKNOWN" => Ok(Category::Unknown),
            "CLOTHS" => Ok(Category::Cloths),
            "FOOD" => Ok(Category::Food),
            "HOUSEWARES" => Ok(Category::Housewares),
            "AUTOMOTIVE" => Ok(Category::Automotive),
            "TOOLS" => Ok(Category::Tools),
            other => Err(DataValidationError::invalid_attribute(other)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Category::default(), Category::Unknown);
    }

    #[test]
    fn test_round_trip_by_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "NOT_A_REAL_CATEGORY".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid attribute: NOT_A_REAL_CATEGORY");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Names are exchanged upper-case; "food" is not a member.
        assert!("food".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_symbolic_names() {
        let json = serde_json::to_value(Category::Tools).unwrap();
        assert_eq!(json, serde_json::json!("TOOLS"));

        let back: Category = serde_json::from_value(json).unwrap();
        assert_eq!(back, Category::Tools);
    }
}
