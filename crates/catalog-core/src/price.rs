//! # Price Module
//!
//! Exact-decimal price handling and boundary coercion.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A price written as 19.99 must compare equal to 19.99 after a          │
//! │  round-trip through storage. Floats cannot promise that.               │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal::Decimal                                   │
//! │    Decimal::from_str("19.99") == reloaded value, always                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Boundary Coercion
//! Upstream query-string plumbing hands prices over as text, sometimes with
//! a stray layer of quotes (`' "19.99" '`). All textual normalization lives
//! in [`parse_price`] - the repository never does its own string surgery.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{DataResult, DataValidationError};

// =============================================================================
// Textual Coercion
// =============================================================================

/// Parses arbitrary textual price input into an exact decimal.
///
/// ## Accepted Formats
/// - A plain decimal: `"19.99"`, `"7"`, `"-3.50"`
/// - The same with surrounding whitespace: `"  19.99 "`
/// - The same wrapped in one layer of single or double quotes:
///   `"\"19.99\""`, `"'19.99'"` (a query-string passing artifact)
///
/// Anything else fails with `Invalid attribute: {raw}`.
///
/// ## Example
/// ```rust
/// use catalog_core::price::parse_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_price(" \"19.99\" ").unwrap(), Decimal::new(1999, 2));
/// assert_eq!(parse_price("19.99").unwrap(), Decimal::new(1999, 2));
/// assert!(parse_price("nineteen").is_err());
/// ```
pub fn parse_price(raw: &str) -> DataResult<Decimal> {
    let trimmed = raw.trim();

    // Strip a single layer of enclosing quotes, then re-trim in case the
    // quotes themselves were padded: ' "19.99" ' -> "19.99" -> 19.99
    let unquoted = strip_quotes(trimmed).trim();

    Decimal::from_str(unquoted).map_err(|_| DataValidationError::invalid_attribute(raw))
}

/// Removes one layer of matching enclosing quotes, if present.
fn strip_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

// =============================================================================
// Canonical Storage Form
// =============================================================================

/// Returns the canonical text form of a price.
///
/// Trailing zeros are stripped (`19.990` -> `"19.99"`) so that the stored
/// text is unique per value and SQL equality filtering on the price column
/// matches exactly. Reloading the canonical text yields an equal `Decimal`.
pub fn canonical(price: &Decimal) -> String {
    price.normalize().to_string()
}

// =============================================================================
// Price Query Input
// =============================================================================

/// Input to `find_by_price`: an exact decimal or raw text to be coerced.
///
/// Lets the repository accept `Decimal` values from domain code and raw
/// query-string text from the web layer through one parameter:
///
/// ```rust,ignore
/// repo.find_by_price(Decimal::new(1999, 2)).await?;
/// repo.find_by_price(" \"19.99\" ").await?;
/// ```
#[derive(Debug, Clone)]
pub enum PriceQuery {
    /// An already-exact decimal value.
    Exact(Decimal),
    /// Raw text, normalized through [`parse_price`].
    Text(String),
}

impl PriceQuery {
    /// Resolves the query input to an exact decimal.
    pub fn resolve(self) -> DataResult<Decimal> {
        match self {
            PriceQuery::Exact(value) => Ok(value),
            PriceQuery::Text(raw) => parse_price(&raw),
        }
    }
}

impl From<Decimal> for PriceQuery {
    fn from(value: Decimal) -> Self {
        PriceQuery::Exact(value)
    }
}

impl From<&str> for PriceQuery {
    fn from(raw: &str) -> Self {
        PriceQuery::Text(raw.to_string())
    }
}

impl From<String> for PriceQuery {
    fn from(raw: String) -> Self {
        PriceQuery::Text(raw)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_decimal() {
        assert_eq!(parse_price("29.99").unwrap(), Decimal::new(2999, 2));
        assert_eq!(parse_price("7").unwrap(), Decimal::new(7, 0));
    }

    #[test]
    fn test_parse_quoted_and_padded() {
        assert_eq!(parse_price(" \"19.99\" ").unwrap(), Decimal::new(1999, 2));
        assert_eq!(parse_price("'19.99'").unwrap(), Decimal::new(1999, 2));
        assert_eq!(parse_price("\" 19.99 \"").unwrap(), Decimal::new(1999, 2));
    }

    #[test]
    fn test_only_one_quote_layer_is_stripped() {
        // Two layers is malformed input, not something we keep unwrapping.
        assert!(parse_price("\"\"19.99\"\"").is_err());
    }

    #[test]
    fn test_parse_garbage_names_the_input() {
        let err = parse_price("nineteen").unwrap_err();
        assert_eq!(err.to_string(), "Invalid attribute: nineteen");
    }

    #[test]
    fn test_canonical_strips_trailing_zeros() {
        let padded = Decimal::from_str("19.990").unwrap();
        assert_eq!(canonical(&padded), "19.99");
        assert_eq!(canonical(&Decimal::new(1999, 2)), "19.99");
    }

    #[test]
    fn test_canonical_round_trips() {
        for text in ["19.99", "0.01", "12000", "3.5"] {
            let value = Decimal::from_str(text).unwrap();
            assert_eq!(Decimal::from_str(&canonical(&value)).unwrap(), value);
        }
    }

    #[test]
    fn test_price_query_resolution() {
        let exact: PriceQuery = Decimal::new(3999, 2).into();
        let text: PriceQuery = "39.99".into();
        assert_eq!(exact.resolve().unwrap(), text.resolve().unwrap());
    }
}
