//! # catalog-db: Database Layer for the Catalog Service
//!
//! This crate provides database access for the catalog service.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Data Flow                                 │
//! │                                                                         │
//! │  Web layer (external collaborator)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    catalog-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo   │    │ 001_....sql  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (or :memory: in tests)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`repository`] - Repository implementations (product)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::{Database, DbConfig};
//!
//! // Create database with default config
//! let config = DbConfig::new("path/to/catalog.db");
//! let db = Database::new(config).await?;
//!
//! // Use the repository
//! let mut product = Product::default();
//! product.deserialize(&payload)?;
//! db.products().create(&mut product).await?;
//! ```
//!
//! ## Error Contract
//! Every repository operation returns the layer's single error kind,
//! [`catalog_core::DataValidationError`]; storage-engine failures are
//! wrapped at the operation boundary. Lookups signal absence with
//! `Ok(None)` rather than an error.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use pool::{Database, DbConfig};

// Repository re-export for convenience
pub use repository::product::ProductRepository;

// The error contract comes from catalog-core; re-exported so callers of
// this crate need not name catalog-core for the common path.
pub use catalog_core::{DataResult, DataValidationError};
