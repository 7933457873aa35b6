//! # catalog-core: Pure Domain Logic for the Catalog Service
//!
//! This crate is the **heart** of the catalog service. It defines the
//! Product entity, its validation rules, and its payload contract, with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Web layer (external collaborator)               │   │
//! │  │        routes, request/response formatting, bootstrap           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ serde_json::Value payloads             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │ category  │  │   price   │  │   error   │  │   │
//! │  │   │  Product  │  │ Category  │  │ coercion  │  │ taxonomy  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  catalog-db (Storage Layer)                     │   │
//! │  │           SQLite queries, migrations, ProductRepository         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The Product entity and its payload contract
//! - [`category`] - The closed Category enumeration
//! - [`price`] - Exact-decimal price coercion (no floating point!)
//! - [`error`] - The single caller-visible error kind
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Decimals**: Prices are `rust_decimal::Decimal`, never floats
//! 4. **Explicit Errors**: Every failure is a typed `DataValidationError`
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Category, Product};
//! use serde_json::json;
//!
//! let mut product = Product::default();
//! product
//!     .deserialize(&json!({
//!         "name": "Fedora",
//!         "description": "A red hat",
//!         "price": "12.50",
//!         "available": true,
//!         "category": "CLOTHS",
//!     }))
//!     .unwrap();
//!
//! assert_eq!(product.category, Category::Cloths);
//! assert_eq!(product.to_string(), "<Product Fedora id=[None]>");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod category;
pub mod error;
pub mod price;
pub mod product;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use catalog_core::Product` instead of
// `use catalog_core::product::Product`

pub use category::Category;
pub use error::{DataResult, DataValidationError};
pub use price::PriceQuery;
pub use product::Product;
