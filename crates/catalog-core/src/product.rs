//! # Product Entity
//!
//! The Product record: fields, construction, payload contract.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Product Lifecycle                                │
//! │                                                                         │
//! │  Product::default()            id = None                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  .deserialize(&payload)?       fields populated, id still None         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.create(&mut product)     id = Some(rowid), assigned by SQLite    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.update / repo.delete     id never reassigned                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.all / repo.find_by_*     fresh instances built from rows         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Payload Contract
//! `serialize`/`deserialize` exchange a flat mapping with exactly the keys
//! `id, name, description, price, available, category`. The category travels
//! as its symbolic name, the price as decimal text. The payload never
//! carries the id *into* the entity - identity is assigned by storage.

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::category::Category;
use crate::error::{DataResult, DataValidationError};
use crate::price;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Default-constructible with every field defaulted; fields are public and
/// directly assignable. Identity (`id`) is `None` until the first
/// successful `create` and is never reassigned afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    /// Surrogate key, assigned by the storage engine on create.
    pub id: Option<i64>,

    /// Display name. Non-empty for persisted products.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Exact decimal price. Never binary floating point.
    pub price: Decimal,

    /// Whether the product is currently available.
    pub available: bool,

    /// Category tag from the closed enumeration.
    pub category: Category,
}

impl fmt::Display for Product {
    /// Renders as `<Product {name} id=[{id}]>`, with `id=[None]` before
    /// the product has been persisted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

impl Product {
    /// Serializes the product into its structured payload form.
    ///
    /// Produces a mapping with exactly the keys
    /// `id, name, description, price, available, category`. The price is
    /// rendered as decimal text (scale preserved) so it reloads to the same
    /// exact value; the category as its symbolic name.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price.to_string(),
            "available": self.available,
            "category": self.category.as_str(),
        })
    }

    /// Populates the product from a structured payload, returning `&mut
    /// Self` for the fluent create-then-deserialize pattern:
    ///
    /// ```rust
    /// use catalog_core::Product;
    /// use serde_json::json;
    ///
    /// let payload = json!({
    ///     "name": "Hammer",
    ///     "description": "16oz claw hammer",
    ///     "price": "12.99",
    ///     "available": true,
    ///     "category": "TOOLS",
    /// });
    /// let mut product = Product::default();
    /// product.deserialize(&payload).unwrap();
    /// assert_eq!(product.name, "Hammer");
    /// ```
    ///
    /// ## Failure Modes
    /// - payload is not a mapping: "body of request contained bad or no data"
    /// - a required key is absent: "Invalid product: missing {key}"
    /// - `available` is not a boolean: "Invalid type for boolean [available]: ..."
    /// - unrecognized category name: "Invalid attribute: {name}"
    /// - any other malformed field: "Invalid attribute: {detail}"
    ///
    /// Every field is parsed before any is assigned, so a failed call
    /// leaves the instance unchanged. The `id` key is ignored: identity
    /// comes from storage, never from the payload.
    pub fn deserialize(&mut self, data: &Value) -> DataResult<&mut Self> {
        let map = data.as_object().ok_or(DataValidationError::BadPayload)?;

        let name = string_field(map, "name")?;
        let description = string_field(map, "description")?;
        let price = price_field(map)?;

        let available = match field(map, "available")? {
            Value::Bool(flag) => *flag,
            other => {
                return Err(DataValidationError::InvalidType {
                    field: "available",
                    expected: "boolean",
                    found: json_type_name(other),
                })
            }
        };

        let category = string_field(map, "category")?.parse::<Category>()?;

        self.name = name;
        self.description = description;
        self.price = price;
        self.available = available;
        self.category = category;
        Ok(self)
    }
}

// =============================================================================
// Payload Field Extraction
// =============================================================================

/// Looks a required key up in the payload mapping.
fn field<'a>(map: &'a Map<String, Value>, key: &str) -> DataResult<&'a Value> {
    map.get(key).ok_or_else(|| DataValidationError::missing(key))
}

/// Extracts a required text field.
fn string_field(map: &Map<String, Value>, key: &str) -> DataResult<String> {
    match field(map, key)? {
        Value::String(text) => Ok(text.clone()),
        other => Err(DataValidationError::invalid_attribute(format!(
            "{key} must be a string, got {}",
            json_type_name(other)
        ))),
    }
}

/// Extracts the price, coercing text or JSON numbers to an exact decimal.
fn price_field(map: &Map<String, Value>) -> DataResult<Decimal> {
    match field(map, "price")? {
        Value::String(text) => price::parse_price(text),
        Value::Number(number) => {
            // serde_json renders numbers with their shortest exact text
            // form, which Decimal parses without float round-tripping.
            let text = number.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map_err(|_| DataValidationError::invalid_attribute(text))
        }
        other => Err(DataValidationError::invalid_attribute(format!(
            "price must be a number or decimal string, got {}",
            json_type_name(other)
        ))),
    }
}

/// Names a JSON value's type for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Database Row Mapping (sqlx feature)
// =============================================================================

#[cfg(feature = "sqlx")]
mod row {
    use super::Product;
    use crate::category::Category;
    use rust_decimal::Decimal;
    use sqlx::sqlite::SqliteRow;
    use sqlx::{FromRow, Row};
    use std::str::FromStr;

    /// Reconstructs a Product from its storage row.
    ///
    /// The price column holds canonical decimal text and the category
    /// column the symbolic name; both are parsed back to their domain
    /// types. A row that fails to parse is a column-decode error - it can
    /// only mean the table was written by something other than this layer.
    impl FromRow<'_, SqliteRow> for Product {
        fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
            let price_text: String = row.try_get("price")?;
            let price = Decimal::from_str(&price_text).map_err(|err| {
                sqlx::Error::ColumnDecode {
                    index: "price".to_string(),
                    source: Box::new(err),
                }
            })?;

            let category_text: String = row.try_get("category")?;
            let category = Category::from_str(&category_text).map_err(|err| {
                sqlx::Error::ColumnDecode {
                    index: "category".to_string(),
                    source: Box::new(err),
                }
            })?;

            Ok(Product {
                id: Some(row.try_get("id")?),
                name: row.try_get("name")?,
                description: row.try_get("description")?,
                price,
                available: row.try_get("available")?,
                category,
            })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fedora_payload() -> Value {
        json!({
            "name": "Fedora",
            "description": "A red hat",
            "price": "12.50",
            "available": true,
            "category": "CLOTHS",
        })
    }

    #[test]
    fn test_construct_a_product() {
        let product = Product {
            name: "Fedora".to_string(),
            description: "A red hat".to_string(),
            price: Decimal::new(1250, 2),
            available: true,
            category: Category::Cloths,
            ..Product::default()
        };

        assert_eq!(product.to_string(), "<Product Fedora id=[None]>");
        assert_eq!(product.id, None);
        assert_eq!(product.name, "Fedora");
        assert_eq!(product.description, "A red hat");
        assert!(product.available);
        assert_eq!(product.price, Decimal::new(1250, 2));
        assert_eq!(product.category, Category::Cloths);
    }

    #[test]
    fn test_display_with_assigned_id() {
        let product = Product {
            id: Some(7),
            name: "Fedora".to_string(),
            ..Product::default()
        };
        assert_eq!(product.to_string(), "<Product Fedora id=[7]>");
    }

    #[test]
    fn test_serialize_a_product() {
        let product = Product {
            id: Some(3),
            name: "Fedora".to_string(),
            description: "A red hat".to_string(),
            price: Decimal::new(1250, 2),
            available: true,
            category: Category::Cloths,
        };

        let data = product.serialize();
        assert_eq!(data["id"], json!(3));
        assert_eq!(data["name"], json!("Fedora"));
        assert_eq!(data["description"], json!("A red hat"));
        assert_eq!(data["price"], json!("12.50"));
        assert_eq!(data["available"], json!(true));
        assert_eq!(data["category"], json!("CLOTHS"));
        assert_eq!(data.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_serialize_unpersisted_id_is_null() {
        let data = Product::default().serialize();
        assert_eq!(data["id"], Value::Null);
    }

    #[test]
    fn test_deserialize_a_product() {
        let mut product = Product::default();
        product.deserialize(&fedora_payload()).unwrap();

        assert_eq!(product.id, None);
        assert_eq!(product.name, "Fedora");
        assert_eq!(product.description, "A red hat");
        assert_eq!(product.price, Decimal::new(1250, 2));
        assert!(product.available);
        assert_eq!(product.category, Category::Cloths);
    }

    #[test]
    fn test_deserialize_is_fluent() {
        // The create-then-deserialize pattern: chain straight into use.
        let mut product = Product::default();
        let display = product.deserialize(&fedora_payload()).unwrap().to_string();
        assert_eq!(display, "<Product Fedora id=[None]>");
    }

    #[test]
    fn test_deserialize_accepts_numeric_price() {
        let mut payload = fedora_payload();
        payload["price"] = json!(10.99);

        let mut product = Product::default();
        product.deserialize(&payload).unwrap();
        assert_eq!(product.price, Decimal::new(1099, 2));
    }

    #[test]
    fn test_round_trip() {
        let mut original = Product::default();
        original.deserialize(&fedora_payload()).unwrap();

        let mut reloaded = Product::default();
        reloaded.deserialize(&original.serialize()).unwrap();

        assert_eq!(reloaded.name, original.name);
        assert_eq!(reloaded.description, original.description);
        assert_eq!(reloaded.price, original.price);
        assert_eq!(reloaded.available, original.available);
        assert_eq!(reloaded.category, original.category);
    }

    #[test]
    fn test_deserialize_with_invalid_category() {
        let mut payload = fedora_payload();
        payload["category"] = json!("NOT_A_REAL_CATEGORY");

        let err = Product::default().deserialize(&payload).unwrap_err();
        assert!(err
            .to_string()
            .contains("Invalid attribute: NOT_A_REAL_CATEGORY"));
    }

    #[test]
    fn test_deserialize_with_non_mapping_data() {
        let err = Product::default()
            .deserialize(&json!("not a mapping"))
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("body of request contained bad or no data"));

        let err = Product::default().deserialize(&Value::Null).unwrap_err();
        assert!(err
            .to_string()
            .contains("body of request contained bad or no data"));
    }

    #[test]
    fn test_deserialize_with_missing_key() {
        let mut payload = fedora_payload();
        payload.as_object_mut().unwrap().remove("price");

        let err = Product::default().deserialize(&payload).unwrap_err();
        assert!(err.to_string().contains("missing price"));
    }

    #[test]
    fn test_deserialize_with_non_boolean_available() {
        let mut payload = fedora_payload();
        payload["available"] = json!("yes");

        let err = Product::default().deserialize(&payload).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bool"));
        assert!(message.contains("string"));
    }

    #[test]
    fn test_failed_deserialize_leaves_instance_unchanged() {
        let mut product = Product::default();
        product.deserialize(&fedora_payload()).unwrap();
        let before = product.clone();

        let mut bad = fedora_payload();
        bad["category"] = json!("HATS");
        assert!(product.deserialize(&bad).is_err());

        assert_eq!(product, before);
    }
}
